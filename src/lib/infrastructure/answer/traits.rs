//! Answer service trait

use super::types::AnswerError;
use async_trait::async_trait;

/// Anything that can turn a query into an answer text
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Ask a single question and wait for the answer text
    async fn ask(&self, query: &str) -> Result<String, AnswerError>;
}
