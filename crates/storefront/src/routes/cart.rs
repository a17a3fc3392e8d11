//! Slide-over cart drawer.
//!
//! The drawer is not a routed screen; it overlays whatever screen is active
//! and is rendered into the page shell when open.

use askama::Template;

use rust_decimal::Decimal;

use tahaqiq_core::Price;

use crate::error::Result;
use crate::models::CartItem;
use crate::stores::CartStore;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id().as_i32(),
            name: item.product.name.clone(),
            brand: item.product.brand.clone(),
            image: item.product.image.clone(),
            quantity: item.quantity,
            price: item.product.unit_price().to_string(),
            line_price: item.line_price().to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::local(Decimal::ZERO).to_string(),
            item_count: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.cart_count(),
        }
    }
}

/// Cart drawer template.
#[derive(Template)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Render the drawer for the current cart contents.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn drawer(cart: &CartStore) -> Result<String> {
    Ok(CartDrawerTemplate {
        cart: CartView::from(cart),
    }
    .render()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&CartStore::new());
        assert!(view.is_empty());
        assert_eq!(view.subtotal, CartView::empty().subtotal);
        assert_eq!(view.subtotal, "GH₵0.00");
    }

    #[test]
    fn test_cart_view_lines() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product(1, "phones", "Apple", 100), 2);
        cart.add_to_cart(&product(2, "audio", "Sony", 25), 1);

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.items[0].line_price, "GH₵200.00");
        assert_eq!(view.subtotal, "GH₵225.00");
    }

    #[test]
    fn test_drawer_shows_empty_state() {
        let html = drawer(&CartStore::new()).unwrap();
        assert!(html.contains("Your cart is empty"));
        assert!(!html.contains("Proceed to Checkout"));
    }
}
