use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tarefas::config::Config;
use tarefas::logger::Logger;
use tarefas::model::{TaskFilter, TaskId};
use tarefas::ui::core::{Action, Component, EventType, Focus};
use tarefas::ui::app_component::AppState;
use tarefas::ui::AppComponent;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 15;

fn new_app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut AppComponent, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

fn click(app: &mut AppComponent, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
    .unwrap();
}

fn draw_lines(app: &mut AppComponent, width: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(width as usize)
        .map(|line| line.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn draw(app: &mut AppComponent) -> String {
    draw_lines(app, WIDTH).concat()
}

fn labels(app: &AppComponent) -> Vec<String> {
    app.tasks().tasks().iter().map(|t| t.label().to_string()).collect()
}

#[test]
fn test_initial_screen() {
    let mut app = new_app();
    let screen = draw(&mut app);

    for text in [
        "Tarefas",
        "Digite uma nova tarefa...",
        "Todas",
        "Ativas",
        "Concluídas",
        "0 tarefas ativas",
        "Limpar concluídas",
    ] {
        assert!(screen.contains(text), "missing '{}' on screen", text);
    }
    assert_eq!(app.state().focus, Focus::Input);
    assert_eq!(app.tasks().filter(), TaskFilter::All);
}

#[test]
fn test_add_from_input() {
    let mut app = new_app();
    add(&mut app, "Buy milk");
    add(&mut app, "   ");

    assert_eq!(labels(&app), vec!["Buy milk"]);
    assert_eq!(app.tasks().pending_input(), "   ");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.tasks().pending_input(), "");

    let screen = draw(&mut app);
    assert!(screen.contains("[ ] Buy milk"));
    assert!(screen.contains("[Editar] [Excluir]"));
    assert!(screen.contains("1 tarefas ativas"));
}

#[test]
fn test_toggle_edit_delete_from_keyboard() {
    let mut app = new_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Wash car");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::Tasks);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.tasks().tasks()[0].is_completed());
    assert_eq!(app.tasks().counter_text(), "1 tarefas ativas");

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    assert!(app.task_list().is_editing());
    assert!(draw(&mut app).contains("[Salvar]"));

    for _ in 0.."Wash car".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Walk dog");
    press(&mut app, KeyCode::Enter);
    assert_eq!(labels(&app), vec!["Buy milk", "Walk dog"]);
    assert!(!app.task_list().is_editing());

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(labels(&app), vec!["Buy milk"]);
}

#[test]
fn test_filters_and_clear_completed() {
    let mut app = new_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Wash car");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::F(3));
    assert_eq!(app.tasks().filter(), TaskFilter::Completed);
    let visible: Vec<&str> = app.task_list().rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(visible, vec!["Buy milk"]);

    press(&mut app, KeyCode::F(2));
    let visible: Vec<&str> = app.task_list().rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(visible, vec!["Wash car"]);

    press(&mut app, KeyCode::F(1));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::ClearButton);
    press(&mut app, KeyCode::Enter);

    assert_eq!(labels(&app), vec!["Wash car"]);
    assert_eq!(app.tasks().active_count(), 1);
}

#[test]
fn test_mouse_clicks() {
    let mut app = new_app();
    add(&mut app, "Buy milk");
    add(&mut app, "Wash car");
    draw(&mut app);

    // First task checkbox: list border starts on row 5, rows start on row 6
    click(&mut app, 1, 6);
    assert!(app.tasks().tasks()[0].is_completed());

    // "Ativas" tab on row 4
    click(&mut app, 10, 4);
    assert_eq!(app.tasks().filter(), TaskFilter::Active);

    // "Todas" tab
    click(&mut app, 2, 4);
    assert_eq!(app.tasks().filter(), TaskFilter::All);

    // "[Excluir]" on the second row
    draw(&mut app);
    click(&mut app, WIDTH - 3, 7);
    assert_eq!(labels(&app), vec!["Buy milk"]);

    // "Limpar concluídas" on the footer row
    draw(&mut app);
    click(&mut app, WIDTH - 5, HEIGHT - 2);
    assert!(app.tasks().is_empty());
}

#[test]
fn test_mouse_edit_and_save() {
    let mut app = new_app();
    add(&mut app, "Buy milk");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().focus, Focus::Tasks);
    draw(&mut app);

    // "[Editar] [Excluir]" end at the inner right edge (column 58)
    click(&mut app, 44, 6);
    assert!(app.task_list().is_editing());
    assert!(draw(&mut app).contains("[Salvar]"));

    type_text(&mut app, " now");
    click(&mut app, WIDTH - 3, 6);
    assert!(!app.task_list().is_editing());
    assert_eq!(labels(&app), vec!["Buy milk now"]);

    // Clicking the input takes focus back
    draw(&mut app);
    click(&mut app, 5, 2);
    assert_eq!(app.state().focus, Focus::Input);
}

#[test]
fn test_long_label_keeps_buttons_in_view() {
    let width = 40;
    let mut app = new_app();
    add(&mut app, "A very long task label that fills the whole row and more");

    let lines = draw_lines(&mut app, width);
    assert!(lines[6].contains('…'), "row was '{}'", lines[6]);
    assert!(lines[6].contains("[Editar] [Excluir]"), "row was '{}'", lines[6]);

    // Label text is not a button
    click(&mut app, 10, 6);
    assert_eq!(app.tasks().len(), 1);

    // "[Excluir]" is drawn at the right edge
    draw_lines(&mut app, width);
    click(&mut app, width - 3, 6);
    assert!(app.tasks().is_empty());
}

#[test]
fn test_clipped_buttons_are_not_clickable() {
    let width = 20;
    let mut app = new_app();
    add(&mut app, "Buy milk and bread");
    draw_lines(&mut app, width);

    // Too narrow for "[Editar] [Excluir]": only the checkbox reacts
    click(&mut app, width - 3, 6);
    assert_eq!(app.tasks().len(), 1);

    click(&mut app, 1, 6);
    assert!(app.tasks().tasks()[0].is_completed());
}

#[test]
fn test_default_state_counter() {
    let state = AppState::default();
    assert_eq!(state.tasks.counter_text(), "0 tarefas ativas");
    assert_eq!(state.focus, Focus::Input);
}

#[test]
fn test_mouse_disabled() {
    let mut config = Config::default();
    config.ui.mouse_enabled = false;
    let mut app = AppComponent::new(&config, Logger::new());
    draw(&mut app);

    click(&mut app, 10, 4);
    assert_eq!(app.tasks().filter(), TaskFilter::All);
}

#[test]
fn test_logs_panel() {
    let mut app = new_app();
    add(&mut app, "Buy milk");

    press(&mut app, KeyCode::F(12));
    assert!(app.logs_visible());
    assert!(draw(&mut app).contains("Logs"));

    // Keys go to the panel while it is open
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.tasks().pending_input(), "");

    press(&mut app, KeyCode::Esc);
    assert!(!app.logs_visible());
}

#[test]
fn test_quit_keys() {
    let mut app = new_app();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());

    let mut app = new_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.tasks().pending_input(), "q");
}

#[test]
fn test_unknown_task_is_an_error() {
    let mut app = new_app();
    assert!(app.handle_app_action(Action::DeleteTask(TaskId::new())).is_err());
    assert!(app.handle_app_action(Action::SaveTask(TaskId::new())).is_err());
}
