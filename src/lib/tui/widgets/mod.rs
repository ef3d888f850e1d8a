//! Reusable TUI widgets
//!
//! - [`markdown`] - Markdown to styled lines, with link collection

pub mod markdown;

pub use markdown::MarkdownText;
