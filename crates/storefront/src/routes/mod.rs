//! Screen renderers.
//!
//! Each screen is a pure function of the current [`View`], the stores, the
//! catalog and the screen's own transient state. Renderers never mutate
//! stores; user actions go through [`crate::state::Storefront`].
//!
//! # Dispatch
//!
//! ```text
//! home, unknown        -> home::render
//! category             -> collections::render
//! product              -> products::render
//! checkout             -> checkout::render
//! order-confirmation   -> pages::order_confirmation
//! wishlist             -> wishlist::render
//! login                -> auth::login
//! signup               -> auth::signup
//! account              -> account::render
//! admin                -> admin::render if admin, else auth::login
//! faq / policy / about / contact -> pages::*
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod collections;
pub mod home;
pub mod layout;
pub mod pages;
pub mod products;
pub mod wishlist;

use crate::catalog::CatalogSource;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::router::View;
use crate::stores::{AuthStore, CartStore, WishlistStore};

pub use account::AccountTab;
pub use auth::LoginForm;
pub use collections::CategoryListing;
pub use products::ProductForm;

/// Which screen a render produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Home,
    Category,
    Product,
    Checkout,
    OrderConfirmation,
    Wishlist,
    Login,
    Signup,
    Account,
    Admin,
    Faq,
    Policy,
    About,
    Contact,
}

/// A rendered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub kind: ScreenKind,
    /// Document title for the page shell.
    pub title: String,
    /// Rendered HTML of the main content area.
    pub html: String,
}

/// Transient state owned by the active screen.
///
/// Rebuilt from scratch on every navigation, so filters and form selections
/// never leak from one screen to the next.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocalState {
    #[default]
    Empty,
    Category(CategoryListing),
    Product(ProductForm),
    Login(LoginForm),
    Account(AccountTab),
    Contact {
        submitted: bool,
    },
}

impl LocalState {
    /// Fresh state for `view`.
    #[must_use]
    pub fn for_view(view: &View, catalog: &dyn CatalogSource, config: &StorefrontConfig) -> Self {
        match view {
            View::Category { category } => Self::Category(CategoryListing::new(
                category.clone(),
                catalog.products_in_category(&category.id),
                config.price_ceiling,
            )),
            View::Product { product } => Self::Product(ProductForm::new(product)),
            // The admin view falls back to the login screen for non-admins.
            View::Login | View::Admin => Self::Login(LoginForm::default()),
            View::Account => Self::Account(AccountTab::default()),
            View::Contact => Self::Contact { submitted: false },
            View::Home
            | View::Checkout
            | View::OrderConfirmation
            | View::Faq
            | View::Wishlist
            | View::Signup
            | View::Policy
            | View::About
            | View::Unknown => Self::Empty,
        }
    }
}

/// Everything a renderer may read.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub view: &'a View,
    pub local: &'a LocalState,
    pub cart: &'a CartStore,
    pub wishlist: &'a WishlistStore,
    pub auth: &'a AuthStore,
    pub catalog: &'a dyn CatalogSource,
    pub config: &'a StorefrontConfig,
}

/// Render the screen for the current view.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn render(ctx: &RenderContext<'_>) -> Result<Screen> {
    match ctx.view {
        View::Home => home::render(ctx),
        View::Unknown => {
            tracing::debug!("Unknown view, rendering home");
            home::render(ctx)
        }
        View::Category { category } => collections::render(ctx, category),
        View::Product { product } => products::render(ctx, product),
        View::Checkout => checkout::render(ctx),
        View::OrderConfirmation => pages::order_confirmation(),
        View::Wishlist => wishlist::render(ctx),
        View::Login => auth::login(ctx),
        View::Signup => auth::signup(),
        View::Account => account::render(ctx),
        View::Admin => {
            if ctx.auth.is_admin() {
                admin::render(ctx)
            } else {
                tracing::warn!(status = %ctx.auth.status(), "Admin view requires admin role");
                auth::login(ctx)
            }
        }
        View::Faq => pages::faq(),
        View::Policy => pages::policy(),
        View::About => pages::about(ctx),
        View::Contact => pages::contact(ctx),
    }
}
