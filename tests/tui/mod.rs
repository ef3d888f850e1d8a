//! TUI unit tests module
//!
//! Organized by screen:
//! - chat/: ChatState, key handling and rendering tests

pub mod chat;
