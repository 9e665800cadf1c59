//! keypad-core
//!
//! Input decoding, DTMF feedback and text composition for a 12-key keypad,
//! shared by the t9 host.
//!
//! Raw key events from a phone keypad, a numpad or the left side of a QWERTY
//! keyboard are resolved to one canonical alphabet (`0`-`9`, `*`, `#`). Each
//! resolved symbol plays its DTMF tone, drives a small composition state
//! machine and is reported to the host as a notification.
//!
//! Public API:
//! - `CanonicalSymbol` - The 12-symbol keypad alphabet
//! - `LayoutMode` / `resolve` / `glyph_for` - Layout registry
//! - `ToneGenerator` / `AudioBackend` - DTMF tone scheduling
//! - `SelectorState` - Language, layout and typing-mode selectors
//! - `CompositionState` - Committed text and suggestion slots
//! - `KeypadEngine` - Event dispatcher tying it all together
//! - `KeyBuffer` / `SuggestionSource` - Host-side suggestion plumbing
//! - `KeypadConfig` - Configuration

pub mod error;
pub use error::{ConfigError, KeypadError};

pub mod symbol;
pub use symbol::{CanonicalSymbol, Control, KeyGroup};

pub mod layout;
pub use layout::{glyph_for, glyphs, resolve, LayoutMode, KEY_POSITIONS};

pub mod tone;
pub use tone::{
    AudioBackend, AudioState, LoggingBackend, ScheduledTone, ToneGenerator, ToneOutcome, ToneSpec,
    ToneTable,
};

pub mod selector;
pub use selector::{Advance, Cyclic, Language, Selector, SelectorState, TypingMode};

pub mod notification;
pub use notification::Notification;

pub mod composition;
pub use composition::{CompositionState, Effect, SLOTS};

pub mod config;
pub use config::{KeypadConfig, ToneConfig, ToneOverride};

pub mod view;
pub use view::KeypadView;

pub mod engine;
pub use engine::{DispatchOutcome, InputEvent, KeypadEngine};

pub mod key_buffer;
pub use key_buffer::KeyBuffer;

pub mod suggestion;
pub use suggestion::{DigitEcho, SuggestionSource};
