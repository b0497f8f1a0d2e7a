//! Tarefas - a terminal to-do list
//!
//! Tasks are added, edited, completed, filtered and cleared from a single
//! screen built with Ratatui. All state lives in memory.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`model`] - Tasks, filters and the task list that owns them
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and interface strings
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// In-memory task model
pub mod model;

/// Terminal user interface components and rendering
pub mod ui;

pub use model::{TaskFilter, TaskId, TaskItem, TaskList};
