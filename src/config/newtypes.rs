//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;

/// A validated base URL for the storefront API.
///
/// Every request the SDK issues targets this fixed origin. The value must
/// carry a scheme and a host; a trailing slash is stripped so paths can be
/// appended uniformly.
///
/// # Example
///
/// ```rust
/// use tienda_sdk::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("http://localhost:3000/api").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000/api");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
///
/// // Trailing slash is normalized away
/// let url = ApiBaseUrl::new("https://tienda.example.com/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://tienda.example.com/api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBaseUrl {
    /// Creates a new validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();
        while url.ends_with('/') {
            url.pop();
        }

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Joins a request path onto the base URL.
    ///
    /// The path may be given with or without a leading slash.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.url)
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
