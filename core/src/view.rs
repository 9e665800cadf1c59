//! Render projection for the presentation shell.
//!
//! `KeypadView` is plain data: after each event the shell reads it and
//! redraws. The core holds no presentation handles.

use serde::Serialize;

use crate::composition::SLOTS;
use crate::layout::KEY_POSITIONS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypadView {
    /// Committed text
    pub text: String,
    /// True until the first refresh; the shell shows a placeholder instead of `text`
    pub placeholder: bool,
    pub suggestions: [String; SLOTS],
    /// Index of the highlighted suggestion
    pub selected: usize,
    pub language: &'static str,
    pub layout: &'static str,
    pub mode: &'static str,
    /// Glyphs on the 12 keys, row-major
    pub keys: [&'static str; KEY_POSITIONS],
}

impl KeypadView {
    /// The text line as the shell would draw it.
    pub fn display_text(&self) -> &str {
        if self.placeholder {
            ""
        } else {
            &self.text
        }
    }
}
