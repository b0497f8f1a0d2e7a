use super::filter::TaskFilter;
use std::fmt;
use uuid::Uuid;

/// Identity of a task. Labels may repeat, ids never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification a task sends to the list that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    /// Completion flag changed; the owner re-renders
    StatusChanged(TaskId),
    /// The user asked to delete the task; the owner removes it
    DeleteRequested(TaskId),
}

/// Display row or inline edit field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Display,
    Edit {
        draft: String,
    },
}

/// One to-do entry
#[derive(Debug, Clone)]
pub struct TaskItem {
    id: TaskId,
    label: String,
    completed: bool,
    mode: ViewMode,
}

impl TaskItem {
    /// Creates an active task in display mode. Callers trim the label first.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            label: label.into(),
            completed: false,
            mode: ViewMode::Display,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ViewMode::Edit { .. })
    }

    /// Switch to the edit field, seeded with the current label
    pub fn enter_edit_mode(&mut self) {
        self.mode = ViewMode::Edit {
            draft: self.label.clone(),
        };
    }

    /// Draft text while editing
    pub fn edit_draft(&self) -> Option<&str> {
        match &self.mode {
            ViewMode::Edit { draft } => Some(draft),
            ViewMode::Display => None,
        }
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut String> {
        match &mut self.mode {
            ViewMode::Edit { draft } => Some(draft),
            ViewMode::Display => None,
        }
    }

    /// Replace the label and go back to display mode.
    ///
    /// The new label is taken as is, an empty string included.
    pub fn commit_edit(&mut self, new_label: impl Into<String>) {
        self.label = new_label.into();
        self.mode = ViewMode::Display;
    }

    /// Commit the current draft. Does nothing in display mode.
    pub fn commit_draft(&mut self) {
        if let ViewMode::Edit { draft } = std::mem::take(&mut self.mode) {
            self.label = draft;
        }
    }

    /// Set the completion flag and notify the owner
    pub fn toggle_completion(&mut self, value: bool) -> TaskEvent {
        self.completed = value;
        TaskEvent::StatusChanged(self.id)
    }

    /// Ask the owner to remove this task
    pub fn request_delete(&self) -> TaskEvent {
        TaskEvent::DeleteRequested(self.id)
    }

    pub fn is_visible(&self, filter: TaskFilter) -> bool {
        filter.matches(self.completed)
    }
}
