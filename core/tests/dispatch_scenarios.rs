// core/tests/dispatch_scenarios.rs
//
// End-to-end tests for KeypadEngine dispatch.
//
// Tests cover:
// - Layout resolution for every layout, including unmapped keys
// - Tone scheduling side effects and audio failure recovery
// - Suggestion cycle / commit / delete-word scenarios
// - Notification ordering against post-transition state

use keypad_core::{
    AudioBackend, CanonicalSymbol, DispatchOutcome, Effect, InputEvent, KeypadConfig,
    KeypadEngine, KeypadError, Notification, ScheduledTone, ToneOutcome,
};

#[derive(Default)]
struct RecordingBackend {
    fail_next_init: bool,
    inits: usize,
    played: Vec<ScheduledTone>,
}

impl AudioBackend for RecordingBackend {
    type Handle = ();

    fn initialize(&mut self) -> Result<(), KeypadError> {
        self.inits += 1;
        if std::mem::take(&mut self.fail_next_init) {
            return Err(KeypadError::AudioInit("device busy".into()));
        }
        Ok(())
    }

    fn now(&self, _handle: &()) -> f64 {
        0.0
    }

    fn schedule(&mut self, _handle: &(), tone: &ScheduledTone) -> Result<(), KeypadError> {
        self.played.push(*tone);
        Ok(())
    }
}

fn engine() -> KeypadEngine<RecordingBackend> {
    KeypadEngine::new(RecordingBackend::default())
}

fn played(engine: &KeypadEngine<RecordingBackend>) -> Vec<CanonicalSymbol> {
    engine.tones().backend().played.iter().map(|t| t.symbol).collect()
}

#[test]
fn test_all_telephone_keys_play_and_notify() {
    let mut e = engine();
    for symbol in CanonicalSymbol::ALL {
        e.dispatch(&symbol.to_string());
    }
    assert_eq!(played(&e), CanonicalSymbol::ALL.to_vec());
    let sent: Vec<Notification> = e.drain_notifications();
    assert_eq!(sent.len(), 12);
    assert!(sent
        .iter()
        .zip(CanonicalSymbol::ALL)
        .all(|(n, s)| *n == Notification::Input(s)));
}

#[test]
fn test_unmapped_key_under_alphabetic_layout_is_silent() {
    let mut e = engine();
    e.next_layout();
    e.next_layout();
    assert_eq!(e.view().layout, "KBD");

    let before = e.view();
    let outcome = e.handle_event(InputEvent::from_key_name("Shift"));
    assert!(matches!(outcome, DispatchOutcome::Unresolved));
    assert!(played(&e).is_empty());
    assert_eq!(e.pending_notifications(), 0);
    assert_eq!(e.view(), before);
}

#[test]
fn test_alphabetic_keys_resolve() {
    let mut e = engine();
    e.next_layout();
    e.next_layout();
    for (key, symbol) in [("q", CanonicalSymbol::Four), ("X", CanonicalSymbol::Zero), ("c", CanonicalSymbol::Pound)] {
        assert_eq!(e.dispatch(key).symbol(), Some(symbol));
    }
    // Telephone-only keys are not part of this layout
    assert!(matches!(e.dispatch("*"), DispatchOutcome::Unresolved));
}

#[test]
fn test_numeric_layout_buttons_and_keys_agree() {
    let mut e = engine();
    e.next_layout();
    for position in 0..12 {
        let by_button = e.press_button(position).symbol();
        let glyph = e.key_labels()[position];
        let by_key = e.dispatch(glyph).symbol();
        assert_eq!(by_button, Some(CanonicalSymbol::ALL[position]));
        assert_eq!(by_button, by_key);
    }
}

#[test]
fn test_cycle_then_commit_scenario() {
    let mut e = engine();
    assert_eq!(e.composition().suggestions(), &["", ":-)", ":-("]);

    let outcome = e.dispatch("*");
    assert!(matches!(
        outcome,
        DispatchOutcome::Resolved { effect: Effect::SlotSelected { from: 0, to: 1 }, .. }
    ));
    assert_eq!(e.composition().selected(), ":-)");

    e.dispatch("0");
    assert_eq!(e.composition().text(), ":-) ");
    assert_eq!(e.composition().suggestions(), &["", "", ""]);
    assert_eq!(e.composition().active_slot(), 0);
    assert_eq!(played(&e), vec![CanonicalSymbol::Star, CanonicalSymbol::Zero]);
}

#[test]
fn test_commit_on_sentinel_still_tones_and_notifies() {
    let mut e = engine();
    let outcome = e.dispatch("0");
    assert!(matches!(outcome, DispatchOutcome::Resolved { effect: Effect::Unchanged, .. }));
    assert_eq!(e.composition().text(), "");
    assert_eq!(e.composition().suggestions(), &["", ":-)", ":-("]);
    assert_eq!(played(&e), vec![CanonicalSymbol::Zero]);
    assert_eq!(e.drain_notifications(), vec![Notification::Input(CanonicalSymbol::Zero)]);
}

#[test]
fn test_delete_word_after_two_commits() {
    let mut e = engine();
    e.set_suggestions(["".into(), "hello".into(), "".into()]);
    e.dispatch("*");
    e.dispatch("0");
    e.set_suggestions(["".into(), "world".into(), "".into()]);
    e.dispatch("*");
    e.dispatch("0");
    assert_eq!(e.composition().text(), "hello world ");

    e.dispatch("#");
    assert_eq!(e.composition().text(), "hello ");
    assert!(!e.view().placeholder);
}

#[test]
fn test_delete_word_blocked_while_suggestion_pending() {
    let mut e = engine();
    e.set_suggestions(["".into(), "hi".into(), "".into()]);
    e.dispatch("*");
    e.dispatch("0");
    e.set_suggestions(["4".into(), "".into(), "".into()]);

    let outcome = e.dispatch("#");
    assert!(matches!(outcome, DispatchOutcome::Resolved { effect: Effect::Unchanged, .. }));
    assert_eq!(e.composition().text(), "hi ");
}

#[test]
fn test_audio_failure_does_not_block_composition() {
    let mut e = KeypadEngine::new(RecordingBackend {
        fail_next_init: true,
        ..Default::default()
    });

    let outcome = e.dispatch("*");
    assert!(matches!(outcome, DispatchOutcome::Resolved { tone: Ok(ToneOutcome::Degraded), .. }));
    assert_eq!(e.composition().active_slot(), 1);
    assert_eq!(e.pending_notifications(), 1);

    let outcome = e.dispatch("*");
    assert!(matches!(outcome, DispatchOutcome::Resolved { tone: Ok(ToneOutcome::Scheduled(_)), .. }));
    assert_eq!(e.tones().backend().inits, 2);
}

#[test]
fn test_unknown_symbol_is_reported_but_dispatch_completes() {
    let config = KeypadConfig::default();
    let mut e = KeypadEngine::with_config(RecordingBackend::default(), &config);
    // Drop every tone so the table no longer covers the alphabet
    *e.tones_mut() = keypad_core::ToneGenerator::with_config(
        RecordingBackend::default(),
        keypad_core::ToneTable::from_entries(std::iter::empty()),
        &config.tone,
    );

    let outcome = e.dispatch("*");
    assert!(matches!(
        outcome,
        DispatchOutcome::Resolved { tone: Err(KeypadError::UnknownSymbol(CanonicalSymbol::Star)), .. }
    ));
    assert_eq!(e.composition().active_slot(), 1);
    assert_eq!(e.drain_notifications(), vec![Notification::Input(CanonicalSymbol::Star)]);
}

#[test]
fn test_configured_tone_timing() {
    let config = KeypadConfig::from_toml_str("[tone]\nduration_ms = 120\nlatency_ms = 10\ngain = 0.5\n").unwrap();
    let mut e = KeypadEngine::with_config(RecordingBackend::default(), &config);
    e.dispatch("1");
    let tone = e.tones().backend().played[0];
    assert!((tone.start - 0.010).abs() < 1e-9);
    assert!((tone.stop - 0.130).abs() < 1e-9);
    assert!((tone.gain - 0.5).abs() < f32::EPSILON);
}

#[test]
fn test_selector_wrap_notifications() {
    let mut e = engine();
    let sent: Vec<String> = (0..3)
        .map(|_| {
            e.next_mode();
            e.drain_notifications()[0].to_string()
        })
        .collect();
    assert_eq!(sent, ["mode:T9", "mode:MT", "mode:T9"]);
}
