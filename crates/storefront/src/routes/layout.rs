//! Page shell: header, cart drawer and footer around the active screen.

use askama::Template;

use crate::catalog::search::SearchBox;
use crate::error::Result;

use super::{RenderContext, Screen, cart};

/// Header category link.
pub struct NavLinkView {
    pub id: String,
    pub name: String,
}

/// Search suggestion display data.
pub struct SuggestionView {
    pub id: i32,
    pub name: String,
}

/// Header display data.
pub struct HeaderView {
    pub store_name: String,
    pub categories: Vec<NavLinkView>,
    pub status: &'static str,
    pub signed_in: bool,
    pub admin: bool,
    pub cart_count: u32,
    pub wishlist_count: usize,
    pub search_term: String,
    pub suggestions: Vec<SuggestionView>,
}

impl HeaderView {
    fn new(ctx: &RenderContext<'_>, search: &SearchBox) -> Self {
        let status = ctx.auth.status();
        Self {
            store_name: ctx.config.store_name.clone(),
            categories: ctx
                .catalog
                .list_categories()
                .iter()
                .map(|c| NavLinkView {
                    id: c.id.to_string(),
                    name: c.name.clone(),
                })
                .collect(),
            status: status.as_str(),
            signed_in: status.is_authenticated(),
            admin: ctx.auth.is_admin(),
            cart_count: ctx.cart.cart_count(),
            wishlist_count: ctx.wishlist.wishlist_count(),
            search_term: search.term().to_string(),
            suggestions: search
                .suggestions()
                .iter()
                .map(|p| SuggestionView {
                    id: p.id.as_i32(),
                    name: p.name.clone(),
                })
                .collect(),
        }
    }
}

/// Full page template.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct PageTemplate {
    pub title: String,
    pub page: &'static str,
    pub header: HeaderView,
    /// Pre-rendered screen HTML.
    pub content: String,
    /// Pre-rendered cart drawer, present only while it is open.
    pub drawer: Option<String>,
}

/// Wrap a rendered screen in the page shell.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn page(
    ctx: &RenderContext<'_>,
    screen: Screen,
    search: &SearchBox,
    cart_open: bool,
) -> Result<String> {
    let drawer = if cart_open {
        Some(cart::drawer(ctx.cart)?)
    } else {
        None
    };

    let title = if screen.title == ctx.config.store_name {
        screen.title
    } else {
        format!("{} | {}", screen.title, ctx.config.store_name)
    };

    Ok(PageTemplate {
        title,
        page: ctx.view.page(),
        header: HeaderView::new(ctx, search),
        content: screen.html,
        drawer,
    }
    .render()?)
}
