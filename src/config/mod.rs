//! Configuration types for the storefront SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StoreConfig`]: The main configuration struct holding all SDK settings
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`ApiBaseUrl`]: A validated base URL newtype
//!
//! # Example
//!
//! ```rust
//! use tienda_sdk::{StoreConfig, ApiBaseUrl};
//!
//! let config = StoreConfig::builder()
//!     .base_url(ApiBaseUrl::new("http://localhost:3000/api").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::ApiBaseUrl;

use crate::error::ConfigError;

/// Configuration for the storefront SDK.
///
/// Holds the fixed API origin every request targets, plus optional client
/// identification settings.
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use tienda_sdk::{StoreConfig, ApiBaseUrl};
///
/// let config = StoreConfig::builder()
///     .base_url(ApiBaseUrl::new("http://localhost:3000/api").unwrap())
///     .user_agent_prefix("MiTienda/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MiTienda/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct StoreConfig {
    base_url: ApiBaseUrl,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// The only required field is `base_url`.
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: ApiBaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StoreConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(StoreConfig {
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = StoreConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StoreConfig::builder()
            .base_url(ApiBaseUrl::new("http://localhost:3000/api").unwrap())
            .build()
            .unwrap();

        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.base_url().as_ref(), "http://localhost:3000/api");
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = StoreConfig::builder()
            .base_url(ApiBaseUrl::new("http://localhost:3000/api").unwrap())
            .user_agent_prefix("MiTienda/1.0")
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StoreConfig"));
    }
}
