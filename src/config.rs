//! Client configuration.
//!
//! Configuration is supplied programmatically. [`ClientConfig::from_env`] is an
//! opt-in convenience for applications that keep the key in the environment;
//! the client never reads the environment on its own.

use crate::{Error, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.dermalytics.dev";

/// Request timeout applied by the underlying HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_ENV: &str = "DERMALYTICS_API_KEY";
pub const BASE_URL_ENV: &str = "DERMALYTICS_BASE_URL";
pub const TIMEOUT_SECS_ENV: &str = "DERMALYTICS_TIMEOUT_SECS";

/// Settings used to construct a [`crate::DermalyticsClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read configuration from `DERMALYTICS_API_KEY`, `DERMALYTICS_BASE_URL`
    /// and `DERMALYTICS_TIMEOUT_SECS`.
    ///
    /// An unparseable timeout is ignored and the default applies.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::validation("API key is required"))?;
        let base_url = env::var(BASE_URL_ENV).ok().filter(|u| !u.trim().is_empty());
        let timeout = env::var(TIMEOUT_SECS_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    /// Base URL with the default applied and a trailing slash removed.
    pub(crate) fn resolved_base_url(&self) -> String {
        let base = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        base.strip_suffix('/').unwrap_or(base).to_string()
    }

    pub(crate) fn resolved_timeout(&self) -> Duration {
        self.timeout
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
