//! Host-side record of the digit keys typed since the last commit.
//!
//! The host consumes the keypad's notifications and keeps this buffer as the
//! input to its suggestion source. It also remembers the language and typing
//! mode last announced.

use crate::notification::Notification;
use crate::selector::{Language, TypingMode};
use crate::symbol::{CanonicalSymbol, KeyGroup};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBuffer {
    keys: Vec<KeyGroup>,
    language: Language,
    mode: TypingMode,
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[KeyGroup] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    /// The buffered keys as digits, e.g. `"4433"`.
    pub fn digits(&self) -> String {
        self.keys.iter().map(|g| g.digit().as_char()).collect()
    }

    pub fn apply(&mut self, notification: Notification) {
        match notification {
            Notification::Language(lang) => self.language = lang,
            Notification::Mode(mode) => self.mode = mode,
            Notification::Input(symbol) => self.push(symbol),
        }
    }

    fn push(&mut self, symbol: CanonicalSymbol) {
        if let Some(group) = symbol.group() {
            self.keys.push(group);
            return;
        }
        match symbol {
            CanonicalSymbol::Zero => self.keys.clear(),
            CanonicalSymbol::Pound => self.backspace(),
            _ => {}
        }
    }

    /// Remove the last key together with the run of equal keys before it,
    /// i.e. one multi-tap letter.
    fn backspace(&mut self) {
        let Some(last) = self.keys.pop() else {
            return;
        };
        while self.keys.last() == Some(&last) {
            self.keys.pop();
        }
    }
}
