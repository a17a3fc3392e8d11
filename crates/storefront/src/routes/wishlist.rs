//! Wishlist page.

use askama::Template;

use crate::error::Result;
use crate::filters;

use super::products::ProductCardView;
use super::{RenderContext, Screen, ScreenKind};

/// Wishlist page template.
#[derive(Template)]
#[template(path = "wishlist/show.html")]
pub struct WishlistTemplate {
    pub products: Vec<ProductCardView>,
}

/// Render the wishlist, or an empty-state message.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(ctx: &RenderContext<'_>) -> Result<Screen> {
    let html = WishlistTemplate {
        products: ProductCardView::list(ctx.wishlist.items(), ctx.wishlist),
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Wishlist,
        title: "Wishlist".to_string(),
        html,
    })
}
