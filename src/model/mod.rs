//! In-memory task model.
//!
//! Everything the screen shows is derived from a [`TaskList`]: the ordered
//! [`TaskItem`]s, the active [`TaskFilter`] and the pending new-task text.
//! Nothing here knows about the terminal.

pub mod filter;
pub mod task;
pub mod task_list;

pub use filter::TaskFilter;
pub use task::{TaskEvent, TaskId, TaskItem, ViewMode};
pub use task_list::{TaskList, TaskListError};
