use super::error::ConfigError;
use super::AppConfig;
use crate::constants::{BACKEND_URL_ENV, CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub backend_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one the default path is tried and a
/// missing file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    let raw = match path {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            match read_config(default_path) {
                Err(ConfigError::NotFound { .. }) => {
                    info!(path = CONFIG_PATH, "No configuration file, using defaults");
                    RawConfig::default()
                }
                other => other?,
            }
        }
    };
    let env_url = std::env::var(BACKEND_URL_ENV).ok();
    validate_and_build(raw, env_url)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The environment wins over the file, the built-in default comes last
fn resolve_backend_url(file: Option<String>, env: Option<String>) -> String {
    env.filter(|url| !url.trim().is_empty())
        .or(file)
        .unwrap_or_else(|| AppConfig::default().backend_url)
}

pub(super) fn validate_and_build(
    parsed: RawConfig,
    env_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let backend_url = resolve_backend_url(parsed.backend_url, env_url);
    validate_backend_url(&backend_url)?;

    if parsed.request_timeout_secs == Some(0) {
        return Err(ConfigError::ZeroTimeout);
    }

    Ok(AppConfig {
        backend_url,
        request_timeout_secs: parsed.request_timeout_secs,
    })
}

pub(super) fn validate_backend_url(url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(url).map_err(|err| ConfigError::InvalidBackendUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
