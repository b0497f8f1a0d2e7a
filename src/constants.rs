//! Constants used throughout the application
//!
//! This module centralizes the interface strings (kept verbatim in Portuguese),
//! key hints and layout values.

// Screen labels
pub const APP_TITLE: &str = "Tarefas";
pub const NEW_TASK_PLACEHOLDER: &str = "Digite uma nova tarefa...";
pub const FILTER_ALL: &str = "Todas";
pub const FILTER_ACTIVE: &str = "Ativas";
pub const FILTER_COMPLETED: &str = "Concluídas";
pub const CLEAR_COMPLETED_BUTTON: &str = "Limpar concluídas";

/// Suffix of the active task counter, rendered as "{count} tarefas ativas"
pub const ACTIVE_COUNTER_SUFFIX: &str = "tarefas ativas";

// Row action tooltips
pub const TOOLTIP_EDIT: &str = "Editar";
pub const TOOLTIP_DELETE: &str = "Excluir";
pub const TOOLTIP_SAVE: &str = "Salvar";

// Key hints shown at the bottom of the screen
pub const HINTS_INPUT: &str = "Enter: add • Esc: clear • Tab: next • F1-F3: filter • Ctrl+C: quit";
pub const HINTS_TASKS: &str =
    "Space: toggle • e: edit • d: delete • ←/→: filter • c: clear completed • Tab: next • q: quit";
pub const HINTS_EDITING: &str = "Enter: save";
pub const HINTS_CLEAR_BUTTON: &str = "Enter: clear completed • Tab: next • Ctrl+C: quit";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Config and log file names
pub const APP_DIR_NAME: &str = "tarefas";
pub const LOCAL_CONFIG_FILE: &str = "tarefas.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "tarefas.log";

// Event loop timing
/// Minimum tick rate in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 10;
/// Maximum tick rate in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default tick rate in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;

/// Number of log lines kept in memory
pub const LOG_BUFFER_CAPACITY: usize = 500;
