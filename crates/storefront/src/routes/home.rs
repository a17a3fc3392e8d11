//! Home page.

use askama::Template;

use crate::error::Result;
use crate::filters;

use super::products::ProductCardView;
use super::{RenderContext, Screen, ScreenKind};

/// Category tile for the home page.
#[derive(Clone)]
pub struct CategoryTileView {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// Deal of the day display data.
#[derive(Clone)]
pub struct DealView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: String,
}

/// Home page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub store_name: String,
    pub categories: Vec<CategoryTileView>,
    pub deal: Option<DealView>,
    pub featured: Vec<ProductCardView>,
}

/// Render the home page.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(ctx: &RenderContext<'_>) -> Result<Screen> {
    let products = ctx.catalog.list_products();

    let html = HomeTemplate {
        store_name: ctx.config.store_name.clone(),
        categories: ctx
            .catalog
            .list_categories()
            .iter()
            .map(|c| CategoryTileView {
                id: c.id.to_string(),
                name: c.name.clone(),
                image: c.image.clone(),
            })
            .collect(),
        deal: products.get(ctx.config.deal_index).map(|p| DealView {
            id: p.id.as_i32(),
            name: p.name.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            price: p.unit_price().to_string(),
        }),
        featured: ProductCardView::list(
            products.iter().take(ctx.config.featured_count),
            ctx.wishlist,
        ),
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Home,
        title: ctx.config.store_name.clone(),
        html,
    })
}
