//! HTTP answer service client

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::traits::AnswerService;
use super::types::{AnswerError, AnswerResponse};
use crate::config::AppConfig;

/// Client for the `GET /ask?query=...` endpoint
#[derive(Clone)]
pub struct HttpAnswerClient {
    base_url: String,
    http: Client,
}

impl HttpAnswerClient {
    /// Client without a request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Creates client from application config.
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: config.backend_url.clone(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build URL from the backend URL and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[async_trait]
impl AnswerService for HttpAnswerClient {
    async fn ask(&self, query: &str) -> Result<String, AnswerError> {
        let url = self.build_url("/ask");

        info!(url = url.as_str(), query_len = query.len(), "Sending query to answer service");

        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(AnswerError::network)?;

        let status = response.status();
        if !status.is_success() {
            // Body is best-effort; an unreadable body counts as empty
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                body_len = body.len(),
                "Answer service returned an error status"
            );
            return Err(AnswerError::status(
                status.as_u16(),
                status.canonical_reason(),
                body,
            ));
        }

        let answer: AnswerResponse = response.json().await.map_err(AnswerError::from_reqwest)?;
        debug!(
            status = status.as_u16(),
            answer_len = answer.results.len(),
            "Received answer"
        );
        Ok(answer.results)
    }
}
