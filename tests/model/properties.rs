use tarefas::model::{TaskFilter, TaskList};

const SAMPLES: [&str; 6] = ["a", "  padded  ", "Buy milk", "ç", "tab\tinside", "x y z"];

fn seeded(completed_every: usize) -> TaskList {
    let mut list = TaskList::new();
    for (i, text) in SAMPLES.iter().enumerate() {
        let id = list.add_task(text).unwrap();
        if i % completed_every == 0 {
            list.toggle_task(id, true).unwrap();
        }
    }
    list
}

#[test]
fn test_add_grows_by_one_and_starts_active() {
    let mut list = TaskList::new();
    for (i, text) in SAMPLES.iter().enumerate() {
        let id = list.add_task(text).unwrap();
        assert_eq!(list.len(), i + 1);
        let task = list.task(id).unwrap();
        assert!(!task.is_completed());
        assert_eq!(task.label(), text.trim());
    }
}

#[test]
fn test_blank_input_is_ignored() {
    let mut list = seeded(2);
    let before = list.len();
    for text in ["", "   ", "\t\n"] {
        assert!(list.add_task(text).is_none());
    }
    assert_eq!(list.len(), before);
}

#[test]
fn test_double_toggle_restores_state() {
    let mut list = seeded(2);
    let ids: Vec<_> = list.tasks().iter().map(|t| (t.id(), t.is_completed(), t.label().to_string())).collect();

    for (id, completed, label) in ids {
        list.toggle_task(id, !completed).unwrap();
        list.toggle_task(id, completed).unwrap();
        let task = list.task(id).unwrap();
        assert_eq!(task.is_completed(), completed);
        assert_eq!(task.label(), label);
    }
}

#[test]
fn test_filters_show_matching_tasks_only() {
    let mut list = seeded(3);

    list.set_filter(TaskFilter::Active);
    assert!(list.visible_tasks().all(|t| !t.is_completed()));

    list.set_filter(TaskFilter::Completed);
    assert!(list.visible_tasks().all(|t| t.is_completed()));

    list.set_filter(TaskFilter::All);
    assert_eq!(list.visible_tasks().count(), list.len());
}

#[test]
fn test_active_count_ignores_filter() {
    let mut list = seeded(2);
    let expected = list.tasks().iter().filter(|t| !t.is_completed()).count();
    for filter in TaskFilter::ALL {
        list.set_filter(filter);
        assert_eq!(list.active_count(), expected);
        assert_eq!(list.counter_text(), format!("{} tarefas ativas", expected));
    }
}

#[test]
fn test_clear_completed_keeps_active_order() {
    let mut list = seeded(2);
    let active_before: Vec<_> = list.tasks().iter().filter(|t| !t.is_completed()).map(|t| t.id()).collect();

    list.clear_completed().unwrap();

    let after: Vec<_> = list.tasks().iter().map(|t| t.id()).collect();
    assert_eq!(after, active_before);
    assert!(list.tasks().iter().all(|t| !t.is_completed()));
}
