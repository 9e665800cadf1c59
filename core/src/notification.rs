//! Outbound notifications from the keypad to its host.
//!
//! The wire form is a short `key:value` string:
//!
//! - `lang:EN`, `lang:PL`   – language selector moved
//! - `mode:MT`, `mode:T9`   – typing mode selector moved
//! - `input:<symbol>`       – a raw key resolved to a keypad symbol
//!
//! The layout selector is presentational and never notifies.

use std::fmt;
use std::str::FromStr;

use crate::error::KeypadError;
use crate::selector::{Cyclic, Language, TypingMode};
use crate::symbol::CanonicalSymbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Language(Language),
    Mode(TypingMode),
    Input(CanonicalSymbol),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language(lang) => write!(f, "lang:{}", lang.label()),
            Self::Mode(mode) => write!(f, "mode:{}", mode.label()),
            Self::Input(symbol) => write!(f, "input:{symbol}"),
        }
    }
}

fn parse_label<T: Cyclic>(label: &str) -> Option<T> {
    T::ALL.iter().copied().find(|value| value.label() == label)
}

impl FromStr for Notification {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KeypadError::InvalidNotification(s.to_string());
        let (key, value) = s.split_once(':').ok_or_else(invalid)?;

        match key {
            "input" => CanonicalSymbol::from_label(value)
                .map(Self::Input)
                .ok_or_else(invalid),
            "lang" => parse_label(value).map(Self::Language).ok_or_else(invalid),
            "mode" => parse_label(value).map(Self::Mode).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(Notification::Input(CanonicalSymbol::Pound).to_string(), "input:#");
        assert_eq!(Notification::Language(Language::English).to_string(), "lang:EN");
        assert_eq!(Notification::Mode(TypingMode::MultiTap).to_string(), "mode:MT");
    }

    #[test]
    fn test_parse_host_messages() {
        assert_eq!(
            "input:7".parse::<Notification>().unwrap(),
            Notification::Input(CanonicalSymbol::Seven)
        );
        assert_eq!(
            "lang:PL".parse::<Notification>().unwrap(),
            Notification::Language(Language::Polish)
        );
        assert_eq!(
            "mode:T9".parse::<Notification>().unwrap(),
            Notification::Mode(TypingMode::PredictiveT9)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["input:", "input:77", "input:a", "lang:DE", "mode:", "layout:NUM", "nonsense"] {
            assert!(
                matches!(bad.parse::<Notification>(), Err(KeypadError::InvalidNotification(_))),
                "{bad} should be rejected"
            );
        }
    }
}
