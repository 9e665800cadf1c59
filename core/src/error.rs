//! Error types for the keypad core.
//!
//! Unmapped raw keys are not errors: `layout::resolve` returns `None` for
//! them and the dispatcher drops the event silently.

use thiserror::Error;

use crate::symbol::CanonicalSymbol;

#[derive(Error, Debug)]
pub enum KeypadError {
    /// A resolved symbol has no entry in the tone table.
    #[error("no tone defined for symbol '{0}'")]
    UnknownSymbol(CanonicalSymbol),

    #[error("audio output could not be initialized: {0}")]
    AudioInit(String),

    #[error("tone could not be scheduled: {0}")]
    AudioSchedule(String),

    #[error("'{0}' is not a keypad symbol")]
    InvalidSymbol(char),

    #[error("unrecognized notification '{0}'")]
    InvalidNotification(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
