//! TUI screens

pub mod chat;
pub mod welcome;

pub use chat::{ChatResult, run_chat};
