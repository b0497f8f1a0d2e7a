use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use tarefas::ui::core::{EventHandler, EventType, Focus};

#[test]
fn test_focus_cycle() {
    assert_eq!(Focus::default(), Focus::Input);
    assert_eq!(Focus::Input.next(), Focus::Tasks);
    assert_eq!(Focus::Tasks.next(), Focus::ClearButton);
    assert_eq!(Focus::ClearButton.next(), Focus::Input);
    assert_eq!(Focus::Input.previous(), Focus::ClearButton);
}

#[test]
fn test_key_release_is_ignored() {
    let release = KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(matches!(EventHandler::classify(Event::Key(release)), EventType::Other));

    let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert!(matches!(EventHandler::classify(Event::Key(press)), EventType::Key(_)));
    assert!(matches!(EventHandler::classify(Event::Resize(80, 24)), EventType::Resize(80, 24)));
}

#[test]
fn test_tick_rate_from_config() {
    let handler = EventHandler::new(tokio::time::Duration::from_millis(10));
    assert_eq!(handler.tick_rate(), tokio::time::Duration::from_millis(10));
}
