//! TUI module for terminal user interface using Ratatui
//!
//! A welcome screen leading into a single chat screen.

pub mod screens;
mod terminal;
pub mod theme;
pub mod widgets;

pub use screens::{ChatResult, run_chat};
pub use terminal::{Tui, install_panic_hook, restore_terminal};
