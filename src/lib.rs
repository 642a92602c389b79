//! # Tienda Storefront SDK
//!
//! A Rust client SDK for a small storefront REST API, covering account
//! registration and login, a locally cached session record, product
//! listing, cart mutation, and order confirmation.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StoreConfig`] and [`StoreConfigBuilder`]
//! - A validated [`ApiBaseUrl`] newtype for the fixed API origin
//! - An injected [`SessionStore`] holding the cached [`CurrentUser`] record
//! - A synchronous access guard ([`require_login`]) for protected pages
//! - High-level async flows on [`StorefrontClient`], one per user action
//! - A formal error taxonomy ([`StoreError`], [`RejectionCode`]) over the
//!   server's `success`/`message` contract
//! - Pure view shaping and materialization ([`ProductListView`],
//!   [`CartView`]) separated from fetching
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tienda_sdk::{ApiBaseUrl, MemorySessionStore, StoreConfig, StorefrontClient};
//!
//! let config = StoreConfig::builder()
//!     .base_url(ApiBaseUrl::new("http://localhost:3000/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = StorefrontClient::new(config, Arc::new(MemorySessionStore::new()));
//! ```
//!
//! ## Flows
//!
//! Each flow performs at most one network round trip and returns a tagged
//! result; the embedding application dispatches notices and navigation from
//! the returned [`Outcome`]:
//!
//! ```rust,ignore
//! use tienda_sdk::{Credentials, StoreError};
//!
//! match client.login(&Credentials::new(email, password)).await {
//!     Ok(outcome) => {
//!         // Session is cached; navigate to outcome.goto (the service page)
//!     }
//!     Err(StoreError::Validation(e)) => {
//!         // Empty field; no request was made
//!     }
//!     Err(StoreError::Rejected { message, .. }) => {
//!         // Server refused; show the message
//!     }
//!     Err(e) if e.is_connectivity() => {
//!         // Tell the user to check the server
//!     }
//!     Err(e) => { /* session store failure */ }
//! }
//! ```
//!
//! ## Rendering
//!
//! Rendering is split into a pure shaping step and a materializing step so
//! the data logic is testable without a rendering environment:
//!
//! ```rust,ignore
//! use tienda_sdk::{render_product_list, ProductListView};
//!
//! let view = ProductListView::from_result(client.products("bebidas").await);
//! let html = render_product_list(&view); // fully replaces the container
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the session store is an injected dependency
//! - **Fail-fast validation**: config newtypes and forms validate locally
//!   before anything crosses the network
//! - **Navigation as data**: flows name target pages; callers navigate
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
mod storefront;
pub mod view;

// Re-export public types at crate root for convenience
pub use config::{ApiBaseUrl, StoreConfig, StoreConfigBuilder};
pub use error::ConfigError;
pub use storefront::{Outcome, StorefrontClient};

// Re-export session types
pub use session::{
    require_login, Access, CurrentUser, FileSessionStore, MemorySessionStore, Page, SessionError,
    SessionStore,
};

// Re-export client and error-taxonomy types
pub use client::{HttpClient, RejectionCode, StoreError, ValidationError};

// Re-export wire and view types
pub use api::{Cart, CartItem, Credentials, Product, RegistrationForm};
pub use view::{render_cart, render_product_list, CartView, ProductListView};
