//! Suggestion source seam.
//!
//! The keypad only cycles and commits candidates; producing them is the job
//! of a `SuggestionSource` the host plugs in.

use crate::composition::SLOTS;
use crate::key_buffer::KeyBuffer;
use crate::selector::{Language, TypingMode};

pub trait SuggestionSource {
    /// Candidates for the current buffer. An empty slot 0 means "nothing
    /// pending", which re-enables word deletion.
    fn suggest(&self, buffer: &KeyBuffer, language: Language, mode: TypingMode) -> [String; SLOTS];
}

/// Offers the typed digits verbatim in slot 0, or the seed when nothing is
/// typed. Performs no dictionary lookup.
#[derive(Debug, Clone)]
pub struct DigitEcho {
    seed: [String; SLOTS],
}

impl DigitEcho {
    pub fn new(seed: [String; SLOTS]) -> Self {
        Self { seed }
    }
}

impl SuggestionSource for DigitEcho {
    fn suggest(&self, buffer: &KeyBuffer, _language: Language, _mode: TypingMode) -> [String; SLOTS] {
        if buffer.is_empty() {
            return self.seed.clone();
        }
        [buffer.digits(), String::new(), String::new()]
    }
}
