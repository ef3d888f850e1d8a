//! Application constants
//!
//! Single source of truth for paths and fixed user-facing strings.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable overriding the configured backend URL
pub const BACKEND_URL_ENV: &str = "P3R4_BACKEND_URL";

/// Answer service used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Prefix of the assistant message shown when a request fails
pub const ERROR_PREFIX: &str = "Error (mock): ";

/// Display name of the assistant
pub const ASSISTANT_NAME: &str = "P3R4";

pub const WELCOME_TAGLINE: &str =
    "Search the web, verify sources, and turn answers into clean write-ups.";

/// Shown when the Write action is triggered; document export is not wired up
pub const WRITE_STUB_NOTICE: &str = "Not wired yet. Later this will link Google + write to Docs.";

pub const WRITE_DESCRIPTION: &str = "Link your Google account to write into your Docs file.";
