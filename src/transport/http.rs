use crate::client::error_classification::classify_error;
use crate::config::ClientConfig;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Per-call settings for [`HttpTransport::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Vec<u8>>,
    /// Extra headers; applied after the defaults, so they win on the same name.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::get()
        }
    }

    /// Serialize `body` as the JSON request payload.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            Error::validation_with_context(
                "Request body could not be serialized",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("validation"),
            )
        })?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Authenticated JSON-over-HTTPS transport.
///
/// Holds only immutable configuration and a pooled `reqwest::Client`, so a
/// single instance can serve concurrent calls.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    authorization: HeaderValue,
}

impl HttpTransport {
    /// `api_key` must already be validated and trimmed.
    pub(crate) fn new(config: &ClientConfig, api_key: String) -> Result<Self> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                Error::validation_with_context(
                    "API key contains characters not allowed in a header",
                    ErrorContext::new()
                        .with_details(e.to_string())
                        .with_source("config"),
                )
            })?;
        authorization.set_sensitive(true);

        let client = reqwest::Client::builder()
            .timeout(config.resolved_timeout())
            .build()
            .map_err(|e| {
                Error::api_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("config"),
                )
            })?;

        Ok(Self {
            client,
            base_url: config.resolved_base_url(),
            authorization,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self, extra: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                Error::validation_with_context(
                    format!("Invalid header name: {}", name),
                    ErrorContext::new()
                        .with_details(e.to_string())
                        .with_source("validation"),
                )
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                Error::validation_with_context(
                    format!("Invalid value for header {}", name),
                    ErrorContext::new()
                        .with_details(e.to_string())
                        .with_source("validation"),
                )
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Perform one authenticated request against `base_url + path` and decode
    /// the JSON response into `T`.
    ///
    /// Non-success statuses are classified into the matching error kind.
    pub async fn request<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.headers(&options.headers)?;
        debug!(method = %options.method, url = %url, "dermalytics request");

        let mut req = self.client.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "dermalytics request failed");
            Error::network_with_context(e.to_string(), ErrorContext::new())
        })?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still classifies by status alone
            let body = response.text().await.unwrap_or_default();
            let err = classify_error(status.as_u16(), &body);
            warn!(status = status.as_u16(), kind = %err.kind(), "dermalytics API error");
            return Err(err);
        }

        let invalid_format = |details: String| {
            Error::api_with_context(
                "Invalid response format from server",
                ErrorContext::new()
                    .with_status(status.as_u16())
                    .with_details(details)
                    .with_source("response"),
            )
        };
        let body = response
            .text()
            .await
            .map_err(|e| invalid_format(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "dermalytics response");
        serde_json::from_str(&body).map_err(|e| invalid_format(e.to_string()))
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
