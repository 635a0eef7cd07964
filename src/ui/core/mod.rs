//! Core UI functionality for the campaign dashboard.
//!
//! This module contains the building blocks every view is made of: the
//! action vocabulary, the component abstraction, terminal event polling and
//! the background task runner that performs API calls.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Services shared across the UI
//! - [`event_handler`] - Keyboard, mouse and resize input polling
//! - [`task_manager`] - Background fetches reported back as actions
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn input into actions
//! 2. **Actions** flow through the components and end in the app component
//! 3. **Tasks** run fetches on tokio and send their results back as actions

// Core UI modules
pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
