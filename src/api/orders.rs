//! Order confirmation wire types.
//!
//! Orders are server-owned; the client only posts a confirmation keyed by
//! user id and observes the success discriminator.

use serde::Serialize;

/// Request body for `POST /pedidos`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfirmOrderRequest {
    /// Identifier of the user whose cart is being confirmed.
    pub usuario_id: u64,
}
