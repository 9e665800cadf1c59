//! Keypad configuration.
//!
//! All fields have defaults, so a TOML file only needs to mention what it
//! changes:
//!
//! ```toml
//! suggestion_seed = ["", ":-)", ":-("]
//!
//! [tone]
//! gain = 0.1
//! latency_ms = 1
//! duration_ms = 300
//!
//! [[tone.overrides]]
//! symbol = "5"
//! low = 770
//! high = 1336
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::symbol::CanonicalSymbol;
use crate::tone::{ToneSpec, ToneTable};

/// Generic keypad configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Candidates shown when nothing has been typed. Slot 0 must be empty:
    /// it is the "no suggestion" sentinel.
    pub suggestion_seed: [String; 3],

    pub tone: ToneConfig,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            suggestion_seed: [String::new(), ":-)".to_string(), ":-(".to_string()],
            tone: ToneConfig::default(),
        }
    }
}

/// Feedback tone parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Mix gain of the two oscillators (0.0 - 1.0)
    pub gain: f32,
    /// Delay before the tone starts, leaves the device time to wake up
    pub latency_ms: u64,
    /// Tone length
    pub duration_ms: u64,
    /// Per-symbol replacements for the DTMF frequencies
    pub overrides: Vec<ToneOverride>,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            gain: 0.1,
            latency_ms: 1,
            duration_ms: 300,
            overrides: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToneOverride {
    pub symbol: CanonicalSymbol,
    pub low: f32,
    pub high: f32,
}

impl KeypadConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: KeypadConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.suggestion_seed[0].is_empty() {
            return Err(ConfigError::Invalid(format!(
                "suggestion_seed[0] must be empty, got {:?}",
                self.suggestion_seed[0]
            )));
        }
        if !(0.0..=1.0).contains(&self.tone.gain) {
            return Err(ConfigError::Invalid(format!(
                "tone.gain must be within 0.0..=1.0, got {}",
                self.tone.gain
            )));
        }
        if self.tone.duration_ms == 0 {
            return Err(ConfigError::Invalid("tone.duration_ms must be positive".into()));
        }
        for o in &self.tone.overrides {
            if o.low <= 0.0 || o.high <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "tone override for '{}' has a non-positive frequency",
                    o.symbol
                )));
            }
        }
        Ok(())
    }

    /// DTMF table with the configured overrides applied.
    pub fn tone_table(&self) -> ToneTable {
        let mut table = ToneTable::dtmf();
        for o in &self.tone.overrides {
            table.set(o.symbol, ToneSpec::new(o.low, o.high));
        }
        table
    }
}
