//! Checkout summary.
//!
//! Payment is simulated: placing the order always succeeds, clears the cart
//! and shows the confirmation page.

use askama::Template;

use crate::error::Result;

use super::cart::CartView;
use super::{RenderContext, Screen, ScreenKind};

/// Checkout page template.
#[derive(Template)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    /// Shipping is free, so the total equals the subtotal.
    pub total: String,
    pub email: Option<String>,
}

/// Render the checkout screen, or an empty-cart message.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(ctx: &RenderContext<'_>) -> Result<Screen> {
    let cart = CartView::from(ctx.cart);
    let total = ctx.cart.subtotal().to_string();

    let html = CheckoutTemplate {
        cart,
        total,
        email: ctx
            .auth
            .current_user()
            .map(|user| user.email.to_string()),
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Checkout,
        title: "Checkout".to_string(),
        html,
    })
}
