//! Screen elements, top to bottom: new task input, filter tabs, task list, footer

pub mod common;
pub mod filter_tabs;
pub mod footer;
pub mod logs_panel;
pub mod new_task_input;
pub mod task_list_component;

pub use filter_tabs::FilterTabs;
pub use footer::Footer;
pub use logs_panel::LogsPanel;
pub use new_task_input::NewTaskInput;
pub use task_list_component::{RowTarget, TaskListComponent, TaskRow};
