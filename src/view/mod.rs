//! View shaping and materialization.
//!
//! Rendering is split in two per-page steps the embedding application wires
//! together:
//!
//! 1. **Shape**: a flow result becomes a view-state enum
//!    ([`ProductListView`], [`CartView`]) via `from_result` — pure data, no
//!    rendering environment needed.
//! 2. **Materialize**: the view state becomes a complete HTML fragment
//!    string ([`render_product_list`], [`render_cart`]) that fully replaces
//!    the target container's contents on every call.

mod cart;
mod format;
mod products;

pub use cart::{render_cart, CartView};
pub use format::{escape_html, format_price};
pub use products::{render_product_list, ProductListView};
