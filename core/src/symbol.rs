//! The 12-symbol keypad alphabet.
//!
//! Every raw key event is reduced to a `CanonicalSymbol` before anything else
//! in the crate looks at it. The alphabet is closed: `0`-`9`, `*` and `#`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::KeypadError;

/// One of the twelve keys of a telephone keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum CanonicalSymbol {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Star,
    Zero,
    Pound,
}

impl CanonicalSymbol {
    /// All symbols in keypad reading order (row by row, `*` `0` `#` last).
    pub const ALL: [CanonicalSymbol; 12] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Star,
        Self::Zero,
        Self::Pound,
    ];

    /// The character printed on the key.
    pub fn as_char(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Star => '*',
            Self::Zero => '0',
            Self::Pound => '#',
        }
    }

    /// Parse a single-character string such as `"5"` or `"#"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::try_from(ch).ok()
    }

    /// How the composition state machine treats this symbol.
    pub fn control(self) -> Control {
        match self {
            Self::Star => Control::Cycle,
            Self::Zero => Control::Commit,
            Self::Pound => Control::DeleteWord,
            _ => Control::Passthrough,
        }
    }

    /// Letter group printed under a digit key, `None` for `*`, `0` and `#`.
    pub fn group(self) -> Option<KeyGroup> {
        match self {
            Self::One => Some(KeyGroup::Punctuation),
            Self::Two => Some(KeyGroup::Abc),
            Self::Three => Some(KeyGroup::Def),
            Self::Four => Some(KeyGroup::Ghi),
            Self::Five => Some(KeyGroup::Jkl),
            Self::Six => Some(KeyGroup::Mno),
            Self::Seven => Some(KeyGroup::Pqrs),
            Self::Eight => Some(KeyGroup::Tuv),
            Self::Nine => Some(KeyGroup::Wxyz),
            Self::Star | Self::Zero | Self::Pound => None,
        }
    }
}

impl TryFrom<char> for CanonicalSymbol {
    type Error = KeypadError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '1' => Ok(Self::One),
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            '*' => Ok(Self::Star),
            '0' => Ok(Self::Zero),
            '#' => Ok(Self::Pound),
            ch => Err(KeypadError::InvalidSymbol(ch)),
        }
    }
}

impl From<CanonicalSymbol> for char {
    fn from(symbol: CanonicalSymbol) -> char {
        symbol.as_char()
    }
}

impl fmt::Display for CanonicalSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Role of a symbol inside the composition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// `*`: move to the next suggestion slot
    Cycle,
    /// `0`: commit the selected suggestion
    Commit,
    /// `#`: delete the last word of the committed text
    DeleteWord,
    /// Everything else: forwarded to the host only
    Passthrough,
}

/// Letter group of a digit key (`1` carries punctuation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyGroup {
    Punctuation,
    Abc,
    Def,
    Ghi,
    Jkl,
    Mno,
    Pqrs,
    Tuv,
    Wxyz,
}

impl KeyGroup {
    /// The digit key carrying this group.
    pub fn digit(self) -> CanonicalSymbol {
        match self {
            Self::Punctuation => CanonicalSymbol::One,
            Self::Abc => CanonicalSymbol::Two,
            Self::Def => CanonicalSymbol::Three,
            Self::Ghi => CanonicalSymbol::Four,
            Self::Jkl => CanonicalSymbol::Five,
            Self::Mno => CanonicalSymbol::Six,
            Self::Pqrs => CanonicalSymbol::Seven,
            Self::Tuv => CanonicalSymbol::Eight,
            Self::Wxyz => CanonicalSymbol::Nine,
        }
    }

    /// Caption shown under the digit.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Punctuation => ".,!?",
            Self::Abc => "abc",
            Self::Def => "def",
            Self::Ghi => "ghi",
            Self::Jkl => "jkl",
            Self::Mno => "mno",
            Self::Pqrs => "pqrs",
            Self::Tuv => "tuv",
            Self::Wxyz => "wxyz",
        }
    }
}
