//! UI module for Tarefas
//!
//! This module handles the terminal interface: components, event handling and the render loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
