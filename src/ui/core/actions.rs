use crate::model::{TaskFilter, TaskId};

/// Screen element receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Tasks,
    ClearButton,
}

impl Focus {
    /// Tab order: input, tasks, clear button
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Tasks,
            Self::Tasks => Self::ClearButton,
            Self::ClearButton => Self::Input,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Input => Self::ClearButton,
            Self::Tasks => Self::Input,
            Self::ClearButton => Self::Tasks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // New task input
    InputChanged(String),
    SubmitNewTask,

    // Task operations
    ToggleTask { id: TaskId, completed: bool },
    EditTask(TaskId),
    EditDraft { id: TaskId, draft: String },
    SaveTask(TaskId),
    DeleteTask(TaskId),
    ClearCompleted,

    // Navigation
    SetFilter(TaskFilter),
    NextTask,
    PreviousTask,
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // Log panel
    ToggleLogs,
    LogsScrollUp,
    LogsScrollDown,

    // App control
    Quit,
    None,
}
