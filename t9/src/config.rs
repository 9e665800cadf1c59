//! Host configuration that extends the base `KeypadConfig` from core.
//!
//! This configuration includes:
//! - All keypad options from `keypad_core::KeypadConfig` (flattened via serde)
//! - Whether the REPL echoes outbound notifications
//! - A default log filter used when `T9_LOG` is not set
//!
//! # Example
//!
//! ```rust
//! use t9::T9Config;
//!
//! let config = T9Config::from_toml_str("echo_notifications = false\n").unwrap();
//! assert!(!config.echo_notifications);
//! assert_eq!(config.base().tone.duration_ms, 300);
//! ```

use keypad_core::{ConfigError, KeypadConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct T9Config {
    /// Print `lang:`/`mode:`/`input:` notifications as they are emitted
    pub echo_notifications: bool,

    /// tracing-subscriber filter directive, e.g. "info" or "keypad_core=debug"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    /// Keypad configuration (suggestion seed, tone parameters)
    #[serde(flatten)]
    pub base: KeypadConfig,
}

impl Default for T9Config {
    fn default() -> Self {
        Self {
            echo_notifications: true,
            log_filter: None,
            base: KeypadConfig::default(),
        }
    }
}

impl T9Config {
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: T9Config = toml::from_str(content)?;
        config.base.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn base(&self) -> &KeypadConfig {
        &self.base
    }

    pub fn into_base(self) -> KeypadConfig {
        self.base
    }
}
