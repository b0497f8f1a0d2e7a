use tarefas::model::{TaskFilter, TaskList};

#[test]
fn test_buy_milk_wash_car() {
    let mut list = TaskList::new();
    let milk = list.add_task("Buy milk").unwrap();
    let car = list.add_task("Wash car").unwrap();

    list.toggle_task(milk, true).unwrap();
    assert_eq!(list.active_count(), 1);
    assert_eq!(list.counter_text(), "1 tarefas ativas");

    list.set_filter(TaskFilter::Completed);
    let visible: Vec<&str> = list.visible_tasks().map(|t| t.label()).collect();
    assert_eq!(visible, vec!["Buy milk"]);

    list.clear_completed().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.tasks()[0].id(), car);
    assert_eq!(list.tasks()[0].label(), "Wash car");
    assert_eq!(list.active_count(), 1);
}

#[test]
fn test_edit_then_filter() {
    let mut list = TaskList::new();
    let id = list.add_task("Buy milk").unwrap();
    list.enter_edit_mode(id).unwrap();
    list.update_draft(id, "Buy oat milk".to_string()).unwrap();
    list.commit_draft(id).unwrap();

    list.toggle_task(id, true).unwrap();
    list.set_filter(TaskFilter::Active);
    assert_eq!(list.visible_tasks().count(), 0);

    list.set_filter(TaskFilter::All);
    assert_eq!(list.visible_tasks().next().unwrap().label(), "Buy oat milk");
}
