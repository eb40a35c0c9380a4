use crate::client::validation::{validate_api_key, validate_ingredient_name, validate_ingredients};
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, RequestOptions};
use crate::types::{AnalyzeRequest, Ingredient, ProductAnalysis};
use crate::Result;
use std::sync::Arc;
use tracing::debug;
use url::form_urlencoded;

/// Client for the Dermalytics ingredient-safety API.
///
/// Construction validates the configuration and performs no network I/O.
/// Each domain call is a single round trip; nothing is retried or cached.
/// Clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct DermalyticsClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl DermalyticsClient {
    /// Create a client from explicit configuration.
    ///
    /// Fails with a validation error when the API key is empty after trimming
    /// or cannot be sent as a header value.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_key = validate_api_key(&config.api_key)?;
        let transport = HttpTransport::new(&config, api_key)?;
        debug!(base_url = transport.base_url(), "dermalytics client created");
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    pub fn builder() -> crate::client::DermalyticsClientBuilder {
        crate::client::DermalyticsClientBuilder::new()
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Get detailed information about a specific ingredient.
    ///
    /// The name is trimmed and sent as a single percent-encoded path segment.
    pub async fn get_ingredient(&self, name: &str) -> Result<Ingredient> {
        let name = validate_ingredient_name(name)?;
        let path = format!("/ingredients/{}", encode_path_segment(name));
        self.transport.request(&path, RequestOptions::get()).await
    }

    /// Analyze a complete product formulation.
    ///
    /// Ingredient names are forwarded in order and unmodified; all safety
    /// computation happens server-side.
    pub async fn analyze<S: AsRef<str>>(&self, ingredients: &[S]) -> Result<ProductAnalysis> {
        validate_ingredients(ingredients)?;
        let options = RequestOptions::post().with_json(&AnalyzeRequest::new(ingredients))?;
        self.transport.request("/analyze", options).await
    }

    /// Escape hatch for endpoints without a dedicated method.
    ///
    /// `path` is appended verbatim to the base URL and must already be encoded.
    pub async fn request<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.transport.request(path, options).await
    }
}

/// Percent-encode `segment` so it stays a single path segment.
///
/// Spaces become `%20` rather than the form-encoding `+`.
pub(crate) fn encode_path_segment(segment: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so every '+' left is a space
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
