//! Integration tests for the t9 host loop.
//!
//! Tests the complete round trip: keypad notifications feed the key buffer,
//! the suggestion source refills the slots, and control keys act on them.

use t9::{
    create_host, Command, DigitEcho, InputEvent, KeypadEngine, LoggingBackend, Notification,
    SuggestionSource, T9Config, KeyBuffer, Language, TypingMode, Host, SLOTS,
};

fn type_keys(host: &mut Host<LoggingBackend, DigitEcho>, keys: &str) -> Vec<Notification> {
    keys.split_whitespace()
        .flat_map(|k| host.handle(InputEvent::from_key_name(k)).1)
        .collect()
}

#[test]
fn test_digits_fill_slot_zero() {
    let mut host = create_host(&T9Config::default());
    type_keys(&mut host, "4 4 3");
    assert_eq!(host.buffer().digits(), "443");
    assert_eq!(host.view().suggestions, ["443", "", ""]);
}

#[test]
fn test_commit_digits_then_seed_returns() {
    let mut host = create_host(&T9Config::default());
    type_keys(&mut host, "4 3 0");
    let view = host.view();
    assert_eq!(view.text, "43 ");
    assert_eq!(view.suggestions, ["", ":-)", ":-("]);
    assert!(host.buffer().is_empty());
}

#[test]
fn test_pound_backspaces_buffer_before_deleting_words() {
    let mut host = create_host(&T9Config::default());
    type_keys(&mut host, "* 0");
    assert_eq!(host.view().text, ":-) ");

    type_keys(&mut host, "5 5");
    type_keys(&mut host, "#");
    // Slot 0 was pending, so only the buffer shrank
    assert_eq!(host.view().text, ":-) ");
    assert!(host.buffer().is_empty());

    type_keys(&mut host, "#");
    assert_eq!(host.view().text, " ");
}

#[test]
fn test_language_and_mode_reach_buffer() {
    let mut host = create_host(&T9Config::default());
    let sent = host.next_language();
    assert_eq!(sent, vec![Notification::Language(Language::Polish)]);
    host.next_mode();
    assert_eq!(host.buffer().language(), Language::Polish);
    assert_eq!(host.buffer().mode(), TypingMode::PredictiveT9);
    assert_eq!(host.view().language, "PL");
    assert_eq!(host.view().mode, "T9");
}

#[test]
fn test_layout_change_is_silent_and_relabels() {
    let mut host = create_host(&T9Config::default());
    assert!(host.next_layout().is_empty());
    assert!(host.next_layout().is_empty());
    assert_eq!(host.view().keys[3], "q");

    let sent = type_keys(&mut host, "q Shift");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_string(), "input:4");
}

#[test]
fn test_notifications_round_trip_through_wire_format() {
    let mut host = create_host(&T9Config::default());
    let mut sent = type_keys(&mut host, "1 * #");
    sent.extend(host.next_mode());
    for n in sent {
        assert_eq!(n.to_string().parse::<Notification>().unwrap(), n);
    }
}

struct Fixed;

impl SuggestionSource for Fixed {
    fn suggest(&self, buffer: &KeyBuffer, _: Language, _: TypingMode) -> [String; SLOTS] {
        if buffer.is_empty() {
            Default::default()
        } else {
            [String::new(), "good".into(), "home".into()]
        }
    }
}

#[test]
fn test_custom_source_commit_and_delete() {
    let config = T9Config::default();
    let engine = KeypadEngine::with_config(LoggingBackend, config.base());
    let mut host = Host::new(engine, Fixed);

    for key in ["4", "6", "6", "3", "*", "*", "0"] {
        host.handle(InputEvent::from_key_name(key));
    }
    assert_eq!(host.view().text, "home ");

    host.handle(InputEvent::from_key_name("#"));
    assert_eq!(host.view().text, " ");
}

#[test]
fn test_repl_commands_drive_host() {
    let mut host = create_host(&T9Config::default());
    match ":suggest |yes|no".parse::<Command>().unwrap() {
        Command::Suggest(slots) => host.set_suggestions(slots),
        other => panic!("unexpected command {other:?}"),
    }
    assert_eq!(host.view().suggestions, ["", "yes", "no"]);

    // The next notification hands the slots back to the suggestion source
    type_keys(&mut host, "*");
    assert_eq!(host.view().suggestions, ["", ":-)", ":-("]);
    assert_eq!(host.view().selected, 1);
}

#[test]
fn test_config_flattens_keypad_options() {
    let config = T9Config::from_toml_str(
        "echo_notifications = false\nsuggestion_seed = [\"\", \"ok\", \"\"]\n\n[tone]\nduration_ms = 50\n",
    )
    .unwrap();
    assert!(!config.echo_notifications);
    assert_eq!(config.base().tone.duration_ms, 50);

    let mut host = create_host(&config);
    type_keys(&mut host, "* 0");
    assert_eq!(host.view().text, "ok ");

    let text = config.to_toml_string().unwrap();
    assert_eq!(T9Config::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_escape_clears_placeholder_only() {
    let mut host = create_host(&T9Config::default());
    assert_eq!(host.view().display_text(), "");
    assert!(host.view().placeholder);
    let (_, sent) = host.handle(InputEvent::from_key_name("Escape"));
    assert!(sent.is_empty());
    assert!(!host.view().placeholder);
}
