//! Current-view state.
//!
//! Navigation is a single primitive: replace the current [`View`]. There is
//! no history stack. Every navigation resets the scroll position to the top.
//!
//! # View Tags
//!
//! ```text
//! home                 - Landing page (also the fallback for unknown tags)
//! category             - Category listing, carries the Category
//! product              - Product detail, carries the Product
//! checkout             - Checkout form and order summary
//! order-confirmation   - Shown after an order is placed
//! wishlist             - Saved products
//! login / signup       - Mock authentication forms
//! account              - Account overview (session required)
//! admin                - Admin dashboard (admin role required)
//! faq / policy / about / contact - Static pages
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::models::{Category, Product};
use crate::stores::{SubscriptionId, Subscribers};

/// The active screen and the data it needs.
///
/// Serialized as `{"page": "<tag>", ...payload}`. Any unrecognized tag
/// deserializes to [`View::Unknown`], which renders as home.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Category {
        category: Category,
    },
    Product {
        product: Box<Product>,
    },
    Checkout,
    OrderConfirmation,
    Faq,
    Wishlist,
    Admin,
    Login,
    Signup,
    Account,
    Policy,
    About,
    Contact,
    #[serde(other)]
    Unknown,
}

impl View {
    /// Category view for `category`.
    #[must_use]
    pub fn category(category: &Category) -> Self {
        Self::Category {
            category: category.clone(),
        }
    }

    /// Product detail view for `product`.
    #[must_use]
    pub fn product(product: &Product) -> Self {
        Self::Product {
            product: Box::new(product.clone()),
        }
    }

    /// The view's tag, as it appears on the wire.
    #[must_use]
    pub const fn page(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Category { .. } => "category",
            Self::Product { .. } => "product",
            Self::Checkout => "checkout",
            Self::OrderConfirmation => "order-confirmation",
            Self::Faq => "faq",
            Self::Wishlist => "wishlist",
            Self::Admin => "admin",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Account => "account",
            Self::Policy => "policy",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Unknown => "unknown",
        }
    }
}

/// Emitted after every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigated {
    pub page: &'static str,
}

/// Holds the current view and the page scroll position.
#[derive(Debug, Default)]
pub struct Router {
    current: View,
    scroll_offset: u32,
    subscribers: Subscribers<Navigated>,
}

impl Router {
    /// A router on the home view, scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active view.
    #[must_use]
    pub const fn current(&self) -> &View {
        &self.current
    }

    /// Replace the active view and scroll to the top.
    #[instrument(skip(self, view), fields(page = view.page()))]
    pub fn navigate_to(&mut self, view: View) {
        let page = view.page();
        self.current = view;
        self.scroll_offset = 0;
        tracing::debug!("Navigated");
        self.subscribers.notify(&Navigated { page });
    }

    /// Vertical scroll offset in pixels.
    #[must_use]
    pub const fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Record that the user scrolled.
    pub const fn scroll_to(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    /// Register for navigation events.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Navigated) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Stop receiving navigation events.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::catalog::tests::{category, product};

    #[test]
    fn test_starts_on_home_at_top() {
        let router = Router::new();
        assert_eq!(router.current(), &View::Home);
        assert_eq!(router.scroll_offset(), 0);
    }

    #[test]
    fn test_navigate_replaces_view_and_resets_scroll() {
        let mut router = Router::new();
        router.scroll_to(640);
        router.navigate_to(View::category(&category("phones", "Phones")));

        assert_eq!(router.current().page(), "category");
        assert_eq!(router.scroll_offset(), 0);
    }

    #[test]
    fn test_navigation_to_same_view_still_notifies() {
        let pages = Rc::new(RefCell::new(Vec::new()));
        let mut router = Router::new();
        let sink = Rc::clone(&pages);
        router.subscribe(move |nav| sink.borrow_mut().push(nav.page));

        router.navigate_to(View::Faq);
        router.navigate_to(View::Faq);
        router.navigate_to(View::Home);

        assert_eq!(*pages.borrow(), vec!["faq", "faq", "home"]);
    }

    #[test]
    fn test_wire_shape_carries_payload() {
        let view = View::product(&product(4, "laptops", "Dell", 900));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["page"], "product");
        assert_eq!(json["product"]["id"], 4);

        let back: View = serde_json::from_value(json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn test_unrecognized_tag_parses_as_unknown() {
        let view: View = serde_json::from_str(r#"{"page": "flash-sale"}"#).unwrap();
        assert_eq!(view, View::Unknown);

        let view: View = serde_json::from_str(r#"{"page": "order-confirmation"}"#).unwrap();
        assert_eq!(view, View::OrderConfirmation);
    }
}
