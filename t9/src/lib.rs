//! # t9
//!
//! Terminal host for the keypad core: configuration, the host loop that
//! connects the keypad to a suggestion source, and REPL command parsing.

pub mod command;
pub mod config;
pub mod host;

// Re-export keypad components from core
pub use keypad_core::*;

pub use command::Command;
pub use config::T9Config;
pub use host::Host;

/// Host with the logging audio backend and `DigitEcho` suggestions.
pub fn create_host(config: &T9Config) -> Host<LoggingBackend, DigitEcho> {
    Host::with_config(LoggingBackend, config.base())
}
