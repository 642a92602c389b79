//! Product catalog wire types.

use serde::{Deserialize, Deserializer, Serialize};

/// A server-owned catalog entry.
///
/// The client only reads products, never mutates them. `precio` arrives as a
/// JSON number or a numeric string depending on the backing store, so the
/// price field accepts both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Server-assigned product identifier.
    pub id: u64,

    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Short description shown on the card.
    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Unit price.
    #[serde(rename = "precio", deserialize_with = "lenient_price")]
    pub price: f64,

    /// Image URL, possibly broken; the renderer hides broken images.
    #[serde(rename = "imagen", default)]
    pub image: String,

    /// Category the product belongs to.
    #[serde(rename = "tipo", default)]
    pub category: String,
}

/// Response envelope for `GET /productos`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    /// The success discriminator. Absent means failure.
    #[serde(default)]
    pub success: bool,
    /// The filtered product set; empty on failure.
    #[serde(rename = "productos", default)]
    pub products: Vec<Product>,
    /// Optional human-readable outcome message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepts a price as a JSON number or a numeric string.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
