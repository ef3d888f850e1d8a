//! Answer service access
//!
//! The answer service is an opaque HTTP collaborator turning a query string
//! into a markdown answer. The session controller only sees the
//! [`AnswerService`] trait, which keeps it testable without a network.

mod client;
mod traits;
mod types;

pub use client::HttpAnswerClient;
pub use traits::AnswerService;
pub use types::{AnswerError, AnswerResponse};
