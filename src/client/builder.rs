use crate::client::core::DermalyticsClient;
use crate::config::ClientConfig;
use crate::{Error, Result};
use std::time::Duration;

/// Builder for [`DermalyticsClient`].
///
/// Only the API key is required; everything else has a default.
#[derive(Default)]
pub struct DermalyticsClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl DermalyticsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API endpoint (defaults to `https://api.dermalytics.dev`).
    ///
    /// Also the hook for pointing the client at a mock server in tests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Timeout for the whole request, enforced by the HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<DermalyticsClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::validation("API key is required"))?;
        DermalyticsClient::new(ClientConfig {
            api_key,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}
