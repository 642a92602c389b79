//! Shopping cart wire types.
//!
//! Cart state lives entirely on the server; the client posts additions and
//! re-fetches the aggregated view on every render. Nothing is cached locally.

use serde::{Deserialize, Serialize};

/// Request body for `POST /carrito`.
///
/// The storefront always adds a fixed quantity of one per selection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AddToCartRequest {
    /// Identifier of the logged-in user.
    pub usuario_id: u64,
    /// Identifier of the selected product.
    pub producto_id: u64,
    /// Quantity to add; the storefront fixes this at 1.
    pub cantidad: u32,
}

impl AddToCartRequest {
    /// Builds the fixed-quantity-one addition the storefront issues.
    #[must_use]
    pub const fn single(usuario_id: u64, producto_id: u64) -> Self {
        Self {
            usuario_id,
            producto_id,
            cantidad: 1,
        }
    }
}

/// A line in the user's cart, as aggregated by the server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Quantity of this product in the cart.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// Server-computed price for the line (unit price × quantity).
    pub subtotal: f64,
}

/// Response envelope for `GET /carrito/<usuario_id>`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartResponse {
    /// The success discriminator. Absent means failure.
    #[serde(default)]
    pub success: bool,
    /// Line items; empty for an empty cart.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Server-computed cart total.
    #[serde(default)]
    pub total: f64,
    /// Optional human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
}

/// The shaped cart a successful fetch produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    /// Line items in the cart.
    pub items: Vec<CartItem>,
    /// Server-computed total, displayed as received.
    pub total: f64,
}

impl Cart {
    /// Returns `true` if the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_addition_is_quantity_one() {
        let request = AddToCartRequest::single(7, 42);
        assert_eq!(request.cantidad, 1);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["usuario_id"], 7);
        assert_eq!(json["producto_id"], 42);
        assert_eq!(json["cantidad"], 1);
    }

    #[test]
    fn test_cart_item_deserializes_wire_names() {
        let item: CartItem =
            serde_json::from_str(r#"{"nombre":"Café","cantidad":2,"subtotal":25001}"#).unwrap();
        assert_eq!(item.name, "Café");
        assert_eq!(item.quantity, 2);
        assert!((item.subtotal - 25001.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cart_response_empty_cart() {
        let res: CartResponse =
            serde_json::from_str(r#"{"success":true,"items":[],"total":0}"#).unwrap();
        assert!(res.success);
        assert!(res.items.is_empty());
    }

    #[test]
    fn test_cart_response_failure_defaults() {
        let res: CartResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!res.success);
        assert!(res.items.is_empty());
        assert!(res.total.abs() < f64::EPSILON);
    }

    #[test]
    fn test_cart_is_empty() {
        let cart = Cart {
            items: vec![],
            total: 0.0,
        };
        assert!(cart.is_empty());
    }
}
