//! Wire types for the storefront REST API.
//!
//! Request bodies and response envelopes exchanged with the server. Field
//! names on the wire follow the server's Spanish contract and are mapped to
//! English Rust fields via serde renames.
//!
//! Every response envelope carries the boolean `success` discriminator; an
//! absent or falsy `success` is treated as failure, with an optional
//! human-readable `message`.

mod auth;
mod cart;
mod orders;
mod products;

pub use auth::{Credentials, LoginResponse, RegistrationForm};
pub use cart::{AddToCartRequest, Cart, CartItem, CartResponse};
pub use orders::ConfirmOrderRequest;
pub use products::{Product, ProductsResponse};

use serde::Deserialize;

/// Generic acknowledgment envelope for mutating endpoints
/// (`/register`, `/carrito`, `/pedidos`).
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    /// The success discriminator. Absent means failure.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
}
