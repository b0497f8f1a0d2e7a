//! Core UI functionality for Tarefas.
//!
//! This module contains the building blocks every screen element uses:
//!
//! - [`actions`] - Action definitions produced by input handling
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//!
//! # Architecture
//!
//! 1. **Events** are read by the [`EventHandler`]
//! 2. **Components** implement the [`Component`] trait and turn events into [`Action`]s
//! 3. The app component applies actions to the task model, then components
//!    are refreshed from the model and the frame is redrawn

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
