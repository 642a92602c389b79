//! HTTP transport for storefront API communication.
//!
//! This module provides the [`HttpClient`] type for issuing JSON requests to
//! the fixed API origin. Each user action maps to at most one round trip;
//! there is no retry loop, no backoff, and no request overlap by design.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::errors::StoreError;
use crate::config::StoreConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON HTTP client for the storefront API.
///
/// The client handles:
/// - URL construction from the configured base origin
/// - Default headers including User-Agent and Accept
/// - Decoding response bodies into typed envelopes
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// SDK configuration (base origin, user agent prefix).
    config: StoreConfig,
    /// Fully formed User-Agent header value.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured API origin.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Tienda Storefront SDK v{SDK_VERSION}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            user_agent,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the User-Agent header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a GET request and decodes the JSON response.
    ///
    /// Query parameters are appended to the URL by reqwest with proper
    /// encoding.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] if the request could not complete
    /// and [`StoreError::Malformed`] if the body is not the expected shape.
    pub async fn get_json<R>(&self, path: &str, query: &[(&str, &str)]) -> Result<R, StoreError>
    where
        R: DeserializeOwned,
    {
        let url = self.config.base_url().join(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(StoreError::Transport)?;

        Self::decode(response).await
    }

    /// Sends a POST request with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] if the request could not complete
    /// and [`StoreError::Malformed`] if the body is not the expected shape.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, StoreError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.base_url().join(path);
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(StoreError::Transport)?;

        Self::decode(response).await
    }

    /// Reads the response body and decodes it into the expected envelope.
    ///
    /// Status codes are not branched on: the server signals outcome through
    /// the `success` discriminator in the body, and flows branch on that.
    async fn decode<R>(response: reqwest::Response) -> Result<R, StoreError>
    where
        R: DeserializeOwned,
    {
        let text = response.text().await.map_err(StoreError::Transport)?;
        serde_json::from_str(&text).map_err(StoreError::Malformed)
    }
}
