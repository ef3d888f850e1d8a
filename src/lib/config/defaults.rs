pub use crate::constants::{CONFIG_PATH, DEFAULT_BACKEND_URL};

/// No timeout: a request that never settles keeps the session waiting
pub const DEFAULT_REQUEST_TIMEOUT_SECS: Option<u64> = None;
