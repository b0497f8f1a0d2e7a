use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tarefas::icons::IconService;
use tarefas::model::{TaskFilter, TaskItem};
use tarefas::ui::components::{TaskListComponent, TaskRow};
use tarefas::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn component_with(tasks: &[TaskItem]) -> TaskListComponent {
    let mut component = TaskListComponent::new(IconService::default());
    component.update_data(tasks.iter().map(TaskRow::from).collect(), TaskFilter::All);
    component
}

#[test]
fn test_display_row_keys() {
    let task = TaskItem::new("Buy milk");
    let id = task.id();
    let mut component = component_with(&[task]);

    assert_eq!(
        component.handle_key_events(key(KeyCode::Char(' '))),
        Action::ToggleTask { id, completed: true }
    );
    assert_eq!(component.handle_key_events(key(KeyCode::Char('e'))), Action::EditTask(id));
    assert_eq!(component.handle_key_events(key(KeyCode::Char('d'))), Action::DeleteTask(id));
    assert_eq!(
        component.handle_key_events(key(KeyCode::Right)),
        Action::SetFilter(TaskFilter::Active)
    );
}

#[test]
fn test_edit_row_captures_typing() {
    let mut task = TaskItem::new("Buy milk");
    task.enter_edit_mode();
    let id = task.id();
    let mut component = component_with(&[task]);

    assert!(component.is_editing());
    assert_eq!(
        component.handle_key_events(key(KeyCode::Char('q'))),
        Action::EditDraft {
            id,
            draft: "Buy milkq".to_string()
        }
    );
    assert_eq!(
        component.handle_key_events(key(KeyCode::Backspace)),
        Action::EditDraft {
            id,
            draft: "Buy mil".to_string()
        }
    );
    assert_eq!(component.handle_key_events(key(KeyCode::Enter)), Action::SaveTask(id));
    // No delete from the edit field
    assert_eq!(component.handle_key_events(key(KeyCode::Delete)), Action::None);
}

#[test]
fn test_selection_stays_in_bounds() {
    let tasks = [TaskItem::new("a"), TaskItem::new("b")];
    let mut component = component_with(&tasks);

    assert_eq!(component.update(Action::NextTask), Action::None);
    assert_eq!(component.update(Action::NextTask), Action::None);
    assert_eq!(component.selected_index, 1);

    component.update(Action::PreviousTask);
    component.update(Action::PreviousTask);
    assert_eq!(component.selected_index, 0);

    // Shrinking the list clamps the selection
    component.update(Action::NextTask);
    component.update_data(vec![TaskRow::from(&tasks[0])], TaskFilter::All);
    assert_eq!(component.selected_index, 0);
}
