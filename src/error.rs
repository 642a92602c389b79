//! Error types for SDK configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use tienda_sdk::{ApiBaseUrl, ConfigError};
//!
//! let result = ApiBaseUrl::new("not-a-url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://localhost:3000/api').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "bad url!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad url!"));
        assert!(message.contains("valid URL with scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let _: &dyn std::error::Error = &error;
    }
}
