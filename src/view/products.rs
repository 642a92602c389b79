//! Product listing view state and materializer.

use std::fmt::Write;

use crate::api::Product;
use crate::client::StoreError;
use crate::view::format::{escape_html, format_price};

/// Shaped state of the product listing, ready to materialize.
///
/// Built from a flow result with [`from_result`](Self::from_result); the
/// `Loading` state is what a container shows while the fetch is in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListView {
    /// The fetch is in flight.
    Loading,
    /// The fetch failed; holds the user-facing message.
    Error(String),
    /// The fetch succeeded but returned no products.
    Empty,
    /// One card per product.
    Products(Vec<Product>),
}

impl ProductListView {
    /// Shapes a product-fetch result into view state.
    #[must_use]
    pub fn from_result(result: Result<Vec<Product>, StoreError>) -> Self {
        match result {
            Ok(products) if products.is_empty() => Self::Empty,
            Ok(products) => Self::Products(products),
            Err(error) => Self::Error(error.to_string()),
        }
    }
}

/// Materializes the product listing into an HTML fragment.
///
/// The returned fragment fully replaces the container's previous contents;
/// calling this repeatedly with the same view yields the same markup.
#[must_use]
pub fn render_product_list(view: &ProductListView) -> String {
    match view {
        ProductListView::Loading => r#"<div class="card">Cargando productos...</div>"#.to_string(),
        ProductListView::Error(message) => {
            format!(r#"<div class="card">{}</div>"#, escape_html(message))
        }
        ProductListView::Empty => {
            r#"<div class="card">No hay productos disponibles</div>"#.to_string()
        }
        ProductListView::Products(products) => {
            let mut html = String::new();
            for product in products {
                let _ = write!(
                    html,
                    concat!(
                        r#"<div class="product">"#,
                        r#"<img src="{image}" alt="{name}" onerror="this.style.display='none'"/>"#,
                        "<strong>{name}</strong>",
                        r#"<div class="small">{description}</div>"#,
                        r#"<div class="space-between" style="margin-top:8px">"#,
                        r#"<div class="small"><strong>${price}</strong></div>"#,
                        r#"<button class="link-btn" onclick="addToCart({id})">Seleccionar</button>"#,
                        "</div></div>"
                    ),
                    image = escape_html(&product.image),
                    name = escape_html(&product.name),
                    description = escape_html(&product.description),
                    price = format_price(product.price),
                    id = product.id,
                );
            }
            html
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RejectionCode;

    fn sample_product(id: u64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            image: format!("img/{id}.png"),
            category: "bebidas".to_string(),
        }
    }

    #[test]
    fn test_from_result_maps_all_shapes() {
        assert_eq!(ProductListView::from_result(Ok(vec![])), ProductListView::Empty);

        let view = ProductListView::from_result(Ok(vec![sample_product(1, "Café", 100.0)]));
        assert!(matches!(view, ProductListView::Products(ref p) if p.len() == 1));

        let view = ProductListView::from_result(Err(StoreError::rejected(
            RejectionCode::ProductsFailed,
            None,
        )));
        assert_eq!(
            view,
            ProductListView::Error("Error al cargar productos".to_string())
        );
    }

    #[test]
    fn test_render_loading_and_empty_cards() {
        assert_eq!(
            render_product_list(&ProductListView::Loading),
            r#"<div class="card">Cargando productos...</div>"#
        );
        assert_eq!(
            render_product_list(&ProductListView::Empty),
            r#"<div class="card">No hay productos disponibles</div>"#
        );
    }

    #[test]
    fn test_render_one_card_per_product() {
        let view = ProductListView::Products(vec![
            sample_product(1, "Café", 12500.0),
            sample_product(2, "Té", 9900.5),
        ]);
        let html = render_product_list(&view);

        assert_eq!(html.matches(r#"<div class="product">"#).count(), 2);
        assert!(html.contains("<strong>Café</strong>"));
        assert!(html.contains("$12,500"));
        assert!(html.contains("$9,900.5"));
        assert!(html.contains("addToCart(1)"));
        assert!(html.contains("addToCart(2)"));
        // Broken-image fallback is wired on every card
        assert_eq!(html.matches("onerror").count(), 2);
    }

    #[test]
    fn test_render_escapes_server_text() {
        let mut product = sample_product(1, "<script>x</script>", 1.0);
        product.description = "a & b".to_string();
        let html = render_product_list(&ProductListView::Products(vec![product]));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_render_is_idempotent_per_view() {
        let view = ProductListView::Products(vec![sample_product(1, "Café", 100.0)]);
        assert_eq!(render_product_list(&view), render_product_list(&view));
    }
}
