//! Runtime configuration.
//!
//! Trac URL resolution order:
//! 1. `--trac-url` flag
//! 2. `TRAC_URL` environment variable
//! 3. The WordPress core Trac

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_TRAC_URL: &str = "https://core.trac.wordpress.org";
pub const TRAC_URL_ENV: &str = "TRAC_URL";
pub const DEFAULT_LIMIT: usize = 400;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Validated settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without a trailing slash.
    pub trac_url: String,
    pub limit: usize,
    pub fan_out: Option<usize>,
    pub timeout: Duration,
}

impl Config {
    pub fn resolve(
        trac_url: Option<&str>,
        limit: usize,
        fan_out: Option<usize>,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if fan_out == Some(0) {
            return Err(ConfigError::ZeroFanOut);
        }

        Ok(Self {
            trac_url: resolve_trac_url(trac_url)?,
            limit,
            fan_out,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Pick the Trac base URL from the flag, the environment, or the default.
pub fn resolve_trac_url(flag: Option<&str>) -> Result<String, ConfigError> {
    let from_env = env::var(TRAC_URL_ENV).ok();

    let raw = flag
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .or_else(|| from_env.as_deref().map(str::trim).filter(|url| !url.is_empty()))
        .unwrap_or(DEFAULT_TRAC_URL);

    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidTracUrl(raw.to_string()));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
