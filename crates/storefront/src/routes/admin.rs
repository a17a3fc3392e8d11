//! Admin dashboard.
//!
//! Only reachable with an admin session; [`super::render`] substitutes the
//! login screen for everyone else.

use askama::Template;

use crate::error::Result;

use super::{RenderContext, Screen, ScreenKind};

/// A dashboard feature tile.
pub struct FeatureView {
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: [FeatureView; 6] = [
    FeatureView {
        title: "Product Management",
        description: "Add, edit, and organize all your products and categories. Manage inventory levels and pricing.",
    },
    FeatureView {
        title: "Order Management",
        description: "View and process incoming orders, update shipping statuses, and handle returns or refunds.",
    },
    FeatureView {
        title: "Customer Management",
        description: "Access customer profiles, view order history, and manage communication.",
    },
    FeatureView {
        title: "Analytics & Reports",
        description: "Track sales performance, monitor site traffic, and generate reports to gain business insights.",
    },
    FeatureView {
        title: "Promotions & Discounts",
        description: "Create and manage coupon codes, schedule sales, and set up special offers.",
    },
    FeatureView {
        title: "Content Management",
        description: "Update static pages like 'About Us' or 'Contact', and manage blog posts or news.",
    },
];

/// Catalog figures shown above the tiles.
pub struct StatsView {
    pub products: usize,
    pub categories: usize,
}

/// Admin dashboard template.
#[derive(Template)]
#[template(path = "admin/index.html")]
pub struct AdminTemplate<'a> {
    pub admin_email: String,
    pub stats: StatsView,
    pub features: &'a [FeatureView],
}

/// Render the dashboard.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(ctx: &RenderContext<'_>) -> Result<Screen> {
    let html = AdminTemplate {
        admin_email: ctx
            .auth
            .current_user()
            .map(|user| user.email.to_string())
            .unwrap_or_default(),
        stats: StatsView {
            products: ctx.catalog.list_products().len(),
            categories: ctx.catalog.list_categories().len(),
        },
        features: &FEATURES,
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Admin,
        title: "Admin Dashboard".to_string(),
        html,
    })
}
