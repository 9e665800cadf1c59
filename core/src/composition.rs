//! Text composition state machine.
//!
//! Holds the committed text and three suggestion slots. Control symbols act
//! on it:
//!
//! - `*` cycles the selected slot
//! - `0` commits the selected slot, if it holds text
//! - `#` deletes the last word, if no suggestion is pending in slot 0
//!
//! Every other symbol passes through untouched. Candidates themselves come
//! from outside through `set_suggestions`.

use tracing::debug;

use crate::symbol::{CanonicalSymbol, Control};

/// Number of suggestion slots.
pub const SLOTS: usize = 3;

/// What a symbol did to the composition state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Not a control symbol, or a guarded operation whose guard failed
    Unchanged,
    /// `*` moved the selection
    SlotSelected { from: usize, to: usize },
    /// `0` appended the slot's text (plus a space)
    Committed(String),
    /// `#` removed trailing words; the display was refreshed
    WordDeleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionState {
    text: String,
    suggestions: [String; SLOTS],
    active: usize,
    /// Display still shows its placeholder; cleared by the first refresh
    initial: bool,
}

impl CompositionState {
    /// Empty text, `seed` in the slots, slot 0 selected.
    pub fn new(seed: [String; SLOTS]) -> Self {
        Self {
            text: String::new(),
            suggestions: seed,
            active: 0,
            initial: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[String; SLOTS] {
        &self.suggestions
    }

    pub fn active_slot(&self) -> usize {
        self.active
    }

    pub fn selected(&self) -> &str {
        &self.suggestions[self.active]
    }

    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Replace the candidates. The selected index is left where it is.
    pub fn set_suggestions(&mut self, suggestions: [String; SLOTS]) {
        self.suggestions = suggestions;
        self.refresh();
    }

    /// Re-render request: text and slots are shown as they are and the
    /// placeholder flag is cleared.
    pub fn refresh(&mut self) {
        self.initial = false;
    }

    pub fn handle(&mut self, symbol: CanonicalSymbol) -> Effect {
        match symbol.control() {
            Control::Cycle => self.cycle(),
            Control::Commit => self.commit(),
            Control::DeleteWord => self.delete_word(),
            Control::Passthrough => Effect::Unchanged,
        }
    }

    fn cycle(&mut self) -> Effect {
        let from = self.active;
        self.active = (self.active + 1) % SLOTS;
        Effect::SlotSelected {
            from,
            to: self.active,
        }
    }

    fn commit(&mut self) -> Effect {
        if self.suggestions[self.active].is_empty() {
            return Effect::Unchanged;
        }

        let committed = std::mem::take(&mut self.suggestions[self.active]);
        self.text.push_str(&committed);
        self.text.push(' ');
        self.suggestions = Default::default();
        self.active = 0;
        debug!(text = %self.text, "committed suggestion");
        Effect::Committed(committed)
    }

    fn delete_word(&mut self) -> Effect {
        if !self.suggestions[0].is_empty() {
            return Effect::Unchanged;
        }

        // Committed text ends in a space, so its split has an empty last
        // segment; dropping two segments removes one word and that artifact.
        let segments: Vec<&str> = self.text.split(' ').collect();
        let keep = segments.len().saturating_sub(2);
        let mut text = segments[..keep].join(" ");
        text.push(' ');
        self.text = text;
        self.refresh();
        debug!(text = %self.text, "deleted word");
        Effect::WordDeleted
    }
}

impl Default for CompositionState {
    fn default() -> Self {
        Self::new(Default::default())
    }
}
