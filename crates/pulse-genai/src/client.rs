//! HTTP client for the generative-model REST API.
//!
//! Wraps `reqwest` with endpoint construction, API-key header handling, and
//! typed response deserialization. Non-2xx responses are decoded into the
//! API's structured error envelope where possible and surfaced as
//! [`GenAiError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GenAiError;
use crate::types::{ApiErrorBody, GenerateRequest, GenerateResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the generative-model REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`GenAiClient::new`]
/// for production or [`GenAiClient::with_base_url`] to point at a mock
/// server in tests. Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct GenAiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl std::fmt::Debug for GenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[redacted]")
            .finish()
    }
}

impl GenAiClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GenAiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GenAiError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GenAiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("trustpulse/0.1 (market-intelligence)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // endpoint path appends to the root rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GenAiError::Api {
            status: 0,
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Issues one `generateContent` call against `model`.
    ///
    /// # Errors
    ///
    /// - [`GenAiError::Api`] if the API returns a non-2xx status.
    /// - [`GenAiError::Http`] on network failure or timeout.
    /// - [`GenAiError::Deserialize`] if the response body does not match the
    ///   expected shape.
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenAiError> {
        let url = self.endpoint_url(model)?;

        let response = self
            .client
            .post(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map_or_else(|_| body.clone(), |e| e.error.message);
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| GenAiError::Deserialize {
            context: format!("generateContent(model={model})"),
            source: e,
        })
    }

    /// Issues a generate call and returns the first text part.
    ///
    /// # Errors
    ///
    /// Propagates [`GenAiClient::generate`] errors, plus
    /// [`GenAiError::EmptyResponse`] when no candidate carries text.
    pub async fn generate_text(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<String, GenAiError> {
        let response = self.generate(model, request).await?;
        response
            .text()
            .map(ToOwned::to_owned)
            .ok_or(GenAiError::EmptyResponse)
    }

    /// Builds the full endpoint URL for `model`.
    fn endpoint_url(&self, model: &str) -> Result<Url, GenAiError> {
        let path = format!("v1beta/models/{model}:generateContent");
        self.base_url.join(&path).map_err(|e| GenAiError::Api {
            status: 0,
            message: format!("invalid model name '{model}': {e}"),
        })
    }
}
