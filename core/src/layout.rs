//! Layout registry: raw key names to canonical symbols, and key positions to
//! display glyphs.
//!
//! Three layouts coexist:
//!
//! - `Telephone` – the phone keypad (`1 2 3` on top), keys are named by their digit
//! - `Numeric`   – the numpad (`7 8 9` on top), with `.`/`,` as `*` and Enter as `#`
//! - `Alphabetic` – the left side of a QWERTY keyboard (`123 / qwe / asd / zxc`)
//!
//! Both tables are static and never change at runtime.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::selector::Cyclic;
use crate::symbol::CanonicalSymbol;

/// Number of physical key positions on the keypad.
pub const KEY_POSITIONS: usize = 12;

/// Active physical/virtual key arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Telephone,
    Numeric,
    Alphabetic,
}

impl LayoutMode {
    /// Short label shown in the layout indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Telephone => "T9",
            Self::Numeric => "NUM",
            Self::Alphabetic => "KBD",
        }
    }

    fn table(self) -> &'static phf::Map<&'static str, CanonicalSymbol> {
        match self {
            Self::Telephone => &TELEPHONE,
            Self::Numeric => &NUMERIC,
            Self::Alphabetic => &ALPHABETIC,
        }
    }

    fn glyphs(self) -> &'static [&'static str; KEY_POSITIONS] {
        match self {
            Self::Telephone => &TELEPHONE_GLYPHS,
            Self::Numeric => &NUMERIC_GLYPHS,
            Self::Alphabetic => &ALPHABETIC_GLYPHS,
        }
    }
}

impl Cyclic for LayoutMode {
    const ALL: &'static [Self] = &[Self::Telephone, Self::Numeric, Self::Alphabetic];

    fn label(self) -> &'static str {
        LayoutMode::label(self)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a raw key name under the given layout.
///
/// Returns `None` for keys the layout does not map; callers must treat that
/// as "nothing happened".
pub fn resolve(layout: LayoutMode, raw_key: &str) -> Option<CanonicalSymbol> {
    layout.table().get(raw_key).copied()
}

/// Glyph printed on the key at `position` (0-based, row-major) in `layout`.
pub fn glyph_for(layout: LayoutMode, position: usize) -> Option<&'static str> {
    layout.glyphs().get(position).copied()
}

/// All 12 glyphs of a layout, row-major.
pub fn glyphs(layout: LayoutMode) -> [&'static str; KEY_POSITIONS] {
    *layout.glyphs()
}

static TELEPHONE_GLYPHS: [&str; KEY_POSITIONS] =
    ["1", "2", "3", "4", "5", "6", "7", "8", "9", "*", "0", "#"];

static NUMERIC_GLYPHS: [&str; KEY_POSITIONS] =
    ["7", "8", "9", "4", "5", "6", "1", "2", "3", ".", "0", "↵"];

static ALPHABETIC_GLYPHS: [&str; KEY_POSITIONS] =
    ["1", "2", "3", "q", "w", "e", "a", "s", "d", "z", "x", "c"];

static TELEPHONE: phf::Map<&'static str, CanonicalSymbol> = phf_map! {
    "1" => CanonicalSymbol::One,
    "2" => CanonicalSymbol::Two,
    "3" => CanonicalSymbol::Three,
    "4" => CanonicalSymbol::Four,
    "5" => CanonicalSymbol::Five,
    "6" => CanonicalSymbol::Six,
    "7" => CanonicalSymbol::Seven,
    "8" => CanonicalSymbol::Eight,
    "9" => CanonicalSymbol::Nine,
    "*" => CanonicalSymbol::Star,
    "0" => CanonicalSymbol::Zero,
    "#" => CanonicalSymbol::Pound,
};

// Numpad rows are upside down relative to a phone.
static NUMERIC: phf::Map<&'static str, CanonicalSymbol> = phf_map! {
    "7" => CanonicalSymbol::One,
    "8" => CanonicalSymbol::Two,
    "9" => CanonicalSymbol::Three,
    "4" => CanonicalSymbol::Four,
    "5" => CanonicalSymbol::Five,
    "6" => CanonicalSymbol::Six,
    "1" => CanonicalSymbol::Seven,
    "2" => CanonicalSymbol::Eight,
    "3" => CanonicalSymbol::Nine,
    "," => CanonicalSymbol::Star,
    "." => CanonicalSymbol::Star,
    "0" => CanonicalSymbol::Zero,
    "↵" => CanonicalSymbol::Pound,
    "Enter" => CanonicalSymbol::Pound,
};

static ALPHABETIC: phf::Map<&'static str, CanonicalSymbol> = phf_map! {
    "1" => CanonicalSymbol::One,
    "2" => CanonicalSymbol::Two,
    "3" => CanonicalSymbol::Three,
    "q" => CanonicalSymbol::Four,
    "Q" => CanonicalSymbol::Four,
    "w" => CanonicalSymbol::Five,
    "W" => CanonicalSymbol::Five,
    "e" => CanonicalSymbol::Six,
    "E" => CanonicalSymbol::Six,
    "a" => CanonicalSymbol::Seven,
    "A" => CanonicalSymbol::Seven,
    "s" => CanonicalSymbol::Eight,
    "S" => CanonicalSymbol::Eight,
    "d" => CanonicalSymbol::Nine,
    "D" => CanonicalSymbol::Nine,
    "z" => CanonicalSymbol::Star,
    "Z" => CanonicalSymbol::Star,
    "x" => CanonicalSymbol::Zero,
    "X" => CanonicalSymbol::Zero,
    "c" => CanonicalSymbol::Pound,
    "C" => CanonicalSymbol::Pound,
};
