//! Answer service wire types and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a successful `/ask` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub query: String,
    pub results: String,
}

/// A failed answer request.
///
/// The `Display` output is the description shown to the user, so it must stay
/// free of decoration beyond what the backend or transport reported.
#[derive(Debug, Error)]
pub enum AnswerError {
    /// Backend answered with a non-success status
    #[error("{}", describe_status(*status, reason.as_deref(), body))]
    Status {
        status: u16,
        reason: Option<String>,
        body: String,
    },

    /// No response at all (connection refused, DNS, timeout, reset)
    #[error("{source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// A success status whose body is not `{ query, results }`
    #[error("invalid response from answer service: {source}")]
    InvalidResponse {
        #[source]
        source: reqwest::Error,
    },
}

impl AnswerError {
    pub fn status(status: u16, reason: Option<&str>, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            reason: reason.map(str::to_string),
            body: body.into(),
        }
    }

    pub fn network(source: reqwest::Error) -> Self {
        Self::Network { source }
    }

    pub fn invalid_response(source: reqwest::Error) -> Self {
        Self::InvalidResponse { source }
    }

    /// Classify a reqwest failure that happened after the request was sent
    pub(super) fn from_reqwest(source: reqwest::Error) -> Self {
        if source.is_decode() {
            Self::invalid_response(source)
        } else {
            Self::network(source)
        }
    }
}

/// An empty body falls back to `Backend error: <code> <reason>`
fn describe_status(status: u16, reason: Option<&str>, body: &str) -> String {
    if !body.is_empty() {
        return body.to_string();
    }
    match reason {
        Some(reason) => format!("Backend error: {status} {reason}"),
        None => format!("Backend error: {status} "),
    }
}
