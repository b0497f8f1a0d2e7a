use super::filter::TaskFilter;
use super::task::{TaskEvent, TaskId, TaskItem};
use crate::constants::ACTIVE_COUNTER_SUFFIX;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskListError {
    #[error("task {0} is not in the list")]
    TaskNotFound(TaskId),
}

/// Owner of every task plus the new-task input and the active filter.
///
/// Every mutation ends with [`TaskList::render`]. Visibility and the active
/// count are derived from the tasks on demand.
#[derive(Debug)]
pub struct TaskList {
    tasks: Vec<TaskItem>,
    filter: TaskFilter,
    pending_input: String,
    counter_text: String,
    render_count: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: TaskFilter::default(),
            pending_input: String::new(),
            counter_text: Self::format_counter(0),
            render_count: 0,
        }
    }

    fn format_counter(active: usize) -> String {
        format!("{} {}", active, ACTIVE_COUNTER_SUFFIX)
    }

    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&TaskItem> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut TaskItem> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }

    fn require_mut(&mut self, id: TaskId) -> Result<&mut TaskItem, TaskListError> {
        self.task_mut(id).ok_or(TaskListError::TaskNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Tasks shown under the current filter, in insertion order
    pub fn visible_tasks(&self) -> impl Iterator<Item = &TaskItem> {
        let filter = self.filter;
        self.tasks.iter().filter(move |t| t.is_visible(filter))
    }

    /// Count of tasks not yet completed, ignoring the filter
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_completed()).count()
    }

    /// Footer counter as of the last render, e.g. "2 tarefas ativas"
    pub fn counter_text(&self) -> &str {
        &self.counter_text
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Append a task. Text that trims to nothing is ignored.
    pub fn add_task(&mut self, raw_text: &str) -> Option<TaskId> {
        let label = raw_text.trim();
        if label.is_empty() {
            log::debug!("Ignoring empty task text");
            return None;
        }

        let task = TaskItem::new(label);
        let id = task.id();
        log::info!("Adding task {} '{}'", id, label);
        self.tasks.push(task);
        self.pending_input.clear();
        self.render();
        Some(id)
    }

    /// Add the pending input as a task
    pub fn submit_pending_input(&mut self) -> Option<TaskId> {
        let text = self.pending_input.clone();
        self.add_task(&text)
    }

    /// The task already updated itself; only the view needs refreshing
    pub fn on_task_status_changed(&mut self, id: TaskId) {
        log::debug!("Task {} changed status", id);
        self.render();
    }

    /// Route a notification from a task to the matching owner operation
    pub fn dispatch(&mut self, event: TaskEvent) -> Result<(), TaskListError> {
        match event {
            TaskEvent::StatusChanged(id) => {
                self.on_task_status_changed(id);
                Ok(())
            }
            TaskEvent::DeleteRequested(id) => self.delete_task(id).map(|_| ()),
        }
    }

    pub fn toggle_task(&mut self, id: TaskId, value: bool) -> Result<(), TaskListError> {
        let event = self.require_mut(id)?.toggle_completion(value);
        self.dispatch(event)
    }

    pub fn request_delete(&mut self, id: TaskId) -> Result<(), TaskListError> {
        let event = self
            .task(id)
            .map(TaskItem::request_delete)
            .ok_or(TaskListError::TaskNotFound(id))?;
        self.dispatch(event)
    }

    pub fn enter_edit_mode(&mut self, id: TaskId) -> Result<(), TaskListError> {
        self.require_mut(id)?.enter_edit_mode();
        self.render();
        Ok(())
    }

    pub fn commit_edit(&mut self, id: TaskId, new_label: &str) -> Result<(), TaskListError> {
        self.require_mut(id)?.commit_edit(new_label);
        log::info!("Renamed task {} to '{}'", id, new_label);
        self.render();
        Ok(())
    }

    /// Replace the text of the task's edit field. Ignored in display mode.
    pub fn update_draft(&mut self, id: TaskId, draft: String) -> Result<(), TaskListError> {
        if let Some(current) = self.require_mut(id)?.edit_draft_mut() {
            *current = draft;
        }
        Ok(())
    }

    /// Commit whatever was typed in the task's edit field
    pub fn commit_draft(&mut self, id: TaskId) -> Result<(), TaskListError> {
        let task = self.require_mut(id)?;
        task.commit_draft();
        log::info!("Renamed task {} to '{}'", id, task.label());
        self.render();
        Ok(())
    }

    /// Remove a task by identity
    pub fn delete_task(&mut self, id: TaskId) -> Result<TaskItem, TaskListError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id() == id)
            .ok_or(TaskListError::TaskNotFound(id))?;
        let removed = self.tasks.remove(index);
        log::info!("Deleted task {} '{}'", id, removed.label());
        self.render();
        Ok(removed)
    }

    /// Remove every completed task, rendering once per removal.
    ///
    /// Ids are collected before anything is removed.
    pub fn clear_completed(&mut self) -> Result<usize, TaskListError> {
        let completed: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|t| t.is_completed())
            .map(TaskItem::id)
            .collect();

        let removed = completed.len();
        for id in completed {
            self.delete_task(id)?;
        }
        log::info!("Cleared {} completed tasks", removed);
        Ok(removed)
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        log::debug!("Filter set to {}", filter.label());
        self.filter = filter;
        self.render();
    }

    /// Refresh derived view state after a mutation
    pub fn render(&mut self) {
        self.counter_text = Self::format_counter(self.active_count());
        self.render_count += 1;
        log::trace!("Render #{}: {}", self.render_count, self.counter_text);
    }
}
