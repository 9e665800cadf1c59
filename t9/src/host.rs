//! Host side of the keypad.
//!
//! The `Host` plays the role of the application around the keypad: it feeds
//! input events to the engine, consumes the notifications the engine emits,
//! keeps the key buffer up to date and pushes fresh suggestions back after
//! every notification.

use keypad_core::{
    AudioBackend, DigitEcho, DispatchOutcome, InputEvent, KeyBuffer, KeypadConfig, KeypadEngine,
    KeypadView, Notification, SuggestionSource, SLOTS,
};
use tracing::debug;

pub struct Host<B: AudioBackend, S: SuggestionSource> {
    engine: KeypadEngine<B>,
    buffer: KeyBuffer,
    source: S,
}

impl<B: AudioBackend> Host<B, DigitEcho> {
    /// Host using `DigitEcho` seeded from the config.
    pub fn with_config(backend: B, config: &KeypadConfig) -> Self {
        let source = DigitEcho::new(config.suggestion_seed.clone());
        Self::new(KeypadEngine::with_config(backend, config), source)
    }
}

impl<B: AudioBackend, S: SuggestionSource> Host<B, S> {
    pub fn new(engine: KeypadEngine<B>, source: S) -> Self {
        Self {
            engine,
            buffer: KeyBuffer::new(),
            source,
        }
    }

    pub fn engine(&self) -> &KeypadEngine<B> {
        &self.engine
    }

    pub fn buffer(&self) -> &KeyBuffer {
        &self.buffer
    }

    pub fn view(&self) -> KeypadView {
        self.engine.view()
    }

    /// Feed one input event and process whatever it emitted.
    pub fn handle(&mut self, event: InputEvent) -> (DispatchOutcome, Vec<Notification>) {
        let outcome = self.engine.handle_event(event);
        (outcome, self.pump())
    }

    pub fn next_language(&mut self) -> Vec<Notification> {
        self.engine.next_language();
        self.pump()
    }

    pub fn next_mode(&mut self) -> Vec<Notification> {
        self.engine.next_mode();
        self.pump()
    }

    pub fn next_layout(&mut self) -> Vec<Notification> {
        self.engine.next_layout();
        self.pump()
    }

    /// Override the suggestion slots directly, bypassing the source.
    pub fn set_suggestions(&mut self, suggestions: [String; SLOTS]) {
        self.engine.set_suggestions(suggestions);
    }

    /// Drain the engine's notifications, apply each to the key buffer and
    /// refresh the suggestions after it. Returns the drained notifications.
    fn pump(&mut self) -> Vec<Notification> {
        let notifications = self.engine.drain_notifications();
        for notification in &notifications {
            self.buffer.apply(*notification);
            let suggestions =
                self.source
                    .suggest(&self.buffer, self.buffer.language(), self.buffer.mode());
            debug!(%notification, ?suggestions, "updating suggestions");
            self.engine.set_suggestions(suggestions);
        }
        notifications
    }
}
