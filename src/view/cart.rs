//! Cart view state and materializer.

use std::fmt::Write;

use crate::api::{Cart, CartItem};
use crate::client::StoreError;
use crate::view::format::{escape_html, format_price};

/// Shaped state of the cart page, ready to materialize.
#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    /// No user is cached; show the login prompt card.
    LoginRequired,
    /// The fetch is in flight.
    Loading,
    /// The fetch failed; holds the user-facing message.
    Error(String),
    /// The cart is empty.
    Empty,
    /// Line items followed by the total card.
    Items {
        /// Cart lines as the server aggregated them.
        lines: Vec<CartItem>,
        /// Server-computed total.
        total: f64,
    },
}

impl CartView {
    /// Shapes a cart-fetch result into view state.
    ///
    /// A [`StoreError::NotLoggedIn`] result becomes the login prompt rather
    /// than an error card.
    #[must_use]
    pub fn from_result(result: Result<Cart, StoreError>) -> Self {
        match result {
            Ok(cart) if cart.is_empty() => Self::Empty,
            Ok(cart) => Self::Items {
                lines: cart.items,
                total: cart.total,
            },
            Err(StoreError::NotLoggedIn { .. }) => Self::LoginRequired,
            Err(error) => Self::Error(error.to_string()),
        }
    }
}

/// Materializes the cart into an HTML fragment.
///
/// The returned fragment fully replaces the container's previous contents.
#[must_use]
pub fn render_cart(view: &CartView) -> String {
    match view {
        CartView::LoginRequired => {
            r#"<div class="card">Debes iniciar sesión para ver el carrito</div>"#.to_string()
        }
        CartView::Loading => r#"<div class="card">Cargando carrito...</div>"#.to_string(),
        CartView::Error(message) => {
            format!(r#"<div class="card">{}</div>"#, escape_html(message))
        }
        CartView::Empty => r#"<div class="card">No hay productos en el carrito.</div>"#.to_string(),
        CartView::Items { lines, total } => {
            let mut html = String::from(r#"<div class="cart-list">"#);
            for line in lines {
                let _ = write!(
                    html,
                    concat!(
                        r#"<div class="cart-item">"#,
                        "<div>{name} x {quantity}</div>",
                        "<div>${subtotal}</div>",
                        "</div>"
                    ),
                    name = escape_html(&line.name),
                    quantity = line.quantity,
                    subtotal = format_price(line.subtotal),
                );
            }
            let _ = write!(
                html,
                concat!(
                    "</div>",
                    r#"<div class="card"><div class="space-between">"#,
                    "<strong>Total</strong><strong>${total}</strong>",
                    "</div></div>"
                ),
                total = format_price(*total),
            );
            html
        }
    }
}
