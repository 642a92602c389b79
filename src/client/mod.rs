//! HTTP transport and error types for storefront API communication.
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the JSON HTTP client bound to the fixed API origin
//! - [`StoreError`]: unified error type for all flows
//! - [`RejectionCode`]: flow-assigned classification of server rejections
//! - [`ValidationError`]: local pre-network validation failures

mod errors;
mod http;

pub use errors::{RejectionCode, StoreError, ValidationError};
pub use http::{HttpClient, SDK_VERSION};
