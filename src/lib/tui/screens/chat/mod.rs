//! TUI Chat interface module
//!
//! - state.rs: view state around the chat session
//! - ui.rs: rendering
//! - input.rs: key handling
//! - runner.rs: event loop tying them to the answer service

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{InputAction, handle_input};
pub use runner::{ChatResult, run_chat};
pub use state::ChatState;
pub use ui::ChatUI;
