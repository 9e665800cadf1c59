//! Event dispatcher.
//!
//! `KeypadEngine` owns all keypad state. A raw key is resolved through the
//! active layout; a resolved symbol plays its tone, drives the composition
//! state machine and finally queues an `input:` notification. Unresolved
//! keys have no effect at all.
//!
//! The engine is single-threaded and every call runs to completion, so hosts
//! with several input sources must feed it from one event loop.

use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::composition::{CompositionState, Effect, SLOTS};
use crate::config::KeypadConfig;
use crate::error::KeypadError;
use crate::layout::{self, LayoutMode, KEY_POSITIONS};
use crate::notification::Notification;
use crate::selector::{Advance, Cyclic, Language, SelectorState, TypingMode};
use crate::symbol::CanonicalSymbol;
use crate::tone::{AudioBackend, ToneGenerator, ToneOutcome};
use crate::view::KeypadView;

/// Raw input delivered by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard key, by its native key name ("q", "Enter", "Shift", ...)
    Key(String),
    /// On-screen button at a key position (0-based, row-major)
    Button(usize),
    /// Cancel gesture: refresh the display, resolve nothing
    Cancel,
}

impl InputEvent {
    /// Map a keyboard key name; `Escape` is the cancel gesture.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" => Self::Cancel,
            other => Self::Key(other.to_string()),
        }
    }
}

/// Result of dispatching one input event.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The key is not part of the active layout; nothing happened.
    Unresolved,
    /// Display refreshed by a cancel gesture.
    Refreshed,
    Resolved {
        symbol: CanonicalSymbol,
        effect: Effect,
        /// Best-effort; an error here did not stop the rest of the dispatch.
        tone: Result<ToneOutcome, KeypadError>,
    },
}

impl DispatchOutcome {
    pub fn symbol(&self) -> Option<CanonicalSymbol> {
        match self {
            Self::Resolved { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }
}

pub struct KeypadEngine<B: AudioBackend> {
    selectors: SelectorState,
    composition: CompositionState,
    tones: ToneGenerator<B>,
    key_labels: [&'static str; KEY_POSITIONS],
    outbox: VecDeque<Notification>,
}

impl<B: AudioBackend> KeypadEngine<B> {
    /// Engine with default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, &KeypadConfig::default())
    }

    pub fn with_config(backend: B, config: &KeypadConfig) -> Self {
        let selectors = SelectorState::new();
        let key_labels = layout::glyphs(selectors.layout());
        Self {
            selectors,
            composition: CompositionState::new(config.suggestion_seed.clone()),
            tones: ToneGenerator::with_config(backend, config.tone_table(), &config.tone),
            key_labels,
            outbox: VecDeque::new(),
        }
    }

    pub fn composition(&self) -> &CompositionState {
        &self.composition
    }

    pub fn selectors(&self) -> &SelectorState {
        &self.selectors
    }

    pub fn tones(&self) -> &ToneGenerator<B> {
        &self.tones
    }

    pub fn tones_mut(&mut self) -> &mut ToneGenerator<B> {
        &mut self.tones
    }

    pub fn layout(&self) -> LayoutMode {
        self.selectors.layout()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> DispatchOutcome {
        match event {
            InputEvent::Key(name) => self.dispatch(&name),
            InputEvent::Button(position) => self.press_button(position),
            InputEvent::Cancel => {
                self.refresh();
                DispatchOutcome::Refreshed
            }
        }
    }

    /// Dispatch a raw key name under the active layout.
    pub fn dispatch(&mut self, raw_key: &str) -> DispatchOutcome {
        match layout::resolve(self.layout(), raw_key) {
            Some(symbol) => self.apply(symbol),
            None => {
                trace!(raw_key, layout = %self.layout(), "unmapped key ignored");
                DispatchOutcome::Unresolved
            }
        }
    }

    /// Press the on-screen key at `position`: the glyph it currently shows
    /// is resolved like a typed key.
    pub fn press_button(&mut self, position: usize) -> DispatchOutcome {
        match self.key_labels.get(position).copied() {
            Some(glyph) => self.dispatch(glyph),
            None => DispatchOutcome::Unresolved,
        }
    }

    fn apply(&mut self, symbol: CanonicalSymbol) -> DispatchOutcome {
        let tone = self.tones.play(symbol);
        let effect = self.composition.handle(symbol);
        self.notify(Notification::Input(symbol));
        DispatchOutcome::Resolved {
            symbol,
            effect,
            tone,
        }
    }

    fn notify(&mut self, notification: Notification) {
        debug!(%notification, "notify");
        self.outbox.push_back(notification);
    }

    fn notify_advance<T: Cyclic>(&mut self, advance: Advance<T>) -> Advance<T> {
        if let Some(notification) = advance.new.notification() {
            self.notify(notification);
        }
        advance
    }

    pub fn next_language(&mut self) -> Advance<Language> {
        let advance = self.selectors.next_language();
        self.notify_advance(advance)
    }

    pub fn next_mode(&mut self) -> Advance<TypingMode> {
        let advance = self.selectors.next_mode();
        self.notify_advance(advance)
    }

    /// Switch layout and relabel all keys. Does not notify the host.
    pub fn next_layout(&mut self) -> Advance<LayoutMode> {
        let advance = self.selectors.next_layout();
        self.key_labels = layout::glyphs(advance.new);
        debug!(from = %advance.old, to = %advance.new, "layout changed");
        self.notify_advance(advance)
    }

    pub fn key_labels(&self) -> &[&'static str; KEY_POSITIONS] {
        &self.key_labels
    }

    /// Install candidates from the suggestion source.
    pub fn set_suggestions(&mut self, suggestions: [String; SLOTS]) {
        self.composition.set_suggestions(suggestions);
    }

    pub fn refresh(&mut self) {
        self.composition.refresh();
    }

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain(..).collect()
    }

    pub fn pending_notifications(&self) -> usize {
        self.outbox.len()
    }

    pub fn view(&self) -> KeypadView {
        KeypadView {
            text: self.composition.text().to_string(),
            placeholder: self.composition.is_initial(),
            suggestions: self.composition.suggestions().clone(),
            selected: self.composition.active_slot(),
            language: self.selectors.language().label(),
            layout: self.selectors.layout().label(),
            mode: self.selectors.mode().label(),
            keys: self.key_labels,
        }
    }
}
