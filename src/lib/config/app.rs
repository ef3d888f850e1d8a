use super::defaults::{DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use super::error::ConfigError;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from client.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the answer service, without the `/ask` path
    pub backend_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Replace the backend URL, validating the new value
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        super::loader::validate_backend_url(&url)?;
        self.backend_url = url;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
