//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to pick the glyphs used by task rows,
//! supporting emoji, Unicode and ASCII themes.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox glyphs
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Row action glyphs, shown in front of the action tooltip
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub edit: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
    pub clear: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub actions: ActionIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                task_status: TaskStatusIcons {
                    pending: "🔳",
                    completed: "✅",
                },
                actions: ActionIcons {
                    edit: "✏️",
                    delete: "🗑️",
                    save: "💾",
                    clear: "🧹",
                },
            },
            IconTheme::Unicode => IconSet {
                task_status: TaskStatusIcons {
                    pending: "☐",
                    completed: "☑",
                },
                actions: ActionIcons {
                    edit: "✎",
                    delete: "✗",
                    save: "✓",
                    clear: "⌫",
                },
            },
            IconTheme::Ascii => IconSet {
                task_status: TaskStatusIcons {
                    pending: "[ ]",
                    completed: "[X]",
                },
                actions: ActionIcons {
                    edit: "",
                    delete: "",
                    save: "",
                    clear: "",
                },
            },
        }
    }

    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    /// Checkbox glyph for a completion state
    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        if completed {
            self.task_completed()
        } else {
            self.task_pending()
        }
    }

    /// Action button text, e.g. "[Editar]" or "[✎ Editar]"
    #[must_use]
    pub fn action_button(&self, icon: &str, tooltip: &str) -> String {
        if icon.is_empty() {
            format!("[{}]", tooltip)
        } else {
            format!("[{} {}]", icon, tooltip)
        }
    }
}
