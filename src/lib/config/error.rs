use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("backend url '{url}' is not a valid URL: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("backend url '{url}' must use http or https, not '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}
