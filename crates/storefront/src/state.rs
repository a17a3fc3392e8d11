//! Application shell.
//!
//! [`Storefront`] owns every store, the router and the transient UI state,
//! and exposes one method per user action. Each action runs to completion
//! synchronously, so its effects are visible to the next render.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use tahaqiq_core::{CategoryId, Email, ProductId, Role};

use crate::catalog::CatalogSource;
use crate::catalog::search::SearchBox;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::router::{Navigated, Router, View};
use crate::routes::{self, AccountTab, LocalState, ProductForm, RenderContext, Screen, layout};
use crate::models::Product;
use crate::stores::{AuthStore, CartStore, SubscriptionId, WishlistStore};

/// The running storefront of a single client.
pub struct Storefront {
    catalog: Arc<dyn CatalogSource>,
    config: StorefrontConfig,
    cart: CartStore,
    wishlist: WishlistStore,
    auth: AuthStore,
    router: Router,
    search: SearchBox,
    cart_open: bool,
    local: LocalState,
}

impl Storefront {
    /// A fresh guest session on the home page.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogSource>, config: StorefrontConfig) -> Self {
        let search = SearchBox::new(config.search_limit);
        Self {
            catalog,
            config,
            cart: CartStore::new(),
            wishlist: WishlistStore::new(),
            auth: AuthStore::new(),
            router: Router::new(),
            search,
            cart_open: false,
            local: LocalState::Empty,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogSource {
        self.catalog.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access, for subscribing to cart changes.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// Mutable access, for subscribing to wishlist changes.
    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// Mutable access, for subscribing to session changes.
    pub const fn auth_mut(&mut self) -> &mut AuthStore {
        &mut self.auth
    }

    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Record that the user scrolled the page.
    pub const fn scroll_to(&mut self, offset: u32) {
        self.router.scroll_to(offset);
    }

    /// Register for navigation events.
    pub fn subscribe_navigation<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Navigated) + 'static,
    {
        self.router.subscribe(callback)
    }

    /// Stop receiving navigation events.
    pub fn unsubscribe_navigation(&mut self, id: SubscriptionId) -> bool {
        self.router.unsubscribe(id)
    }

    #[must_use]
    pub const fn view(&self) -> &View {
        self.router.current()
    }

    #[must_use]
    pub const fn search(&self) -> &SearchBox {
        &self.search
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// State of the active screen.
    #[must_use]
    pub const fn local(&self) -> &LocalState {
        &self.local
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show `view`, scrolled to the top with fresh screen state.
    #[instrument(skip_all, fields(page = view.page()))]
    pub fn navigate_to(&mut self, view: View) {
        self.router.navigate_to(view);
        self.local = LocalState::for_view(self.router.current(), self.catalog.as_ref(), &self.config);
    }

    /// Navigate to a category by ID. Returns `false` if it doesn't exist.
    pub fn open_category(&mut self, id: &CategoryId) -> bool {
        let Some(view) = self.catalog.category(id).map(View::category) else {
            tracing::debug!(category = %id, "Unknown category");
            return false;
        };
        self.navigate_to(view);
        true
    }

    /// Navigate to a product by ID. Returns `false` if it doesn't exist.
    pub fn open_product(&mut self, id: ProductId) -> bool {
        let Some(view) = self.catalog.product(id).map(View::product) else {
            tracing::debug!(product = %id, "Unknown product");
            return false;
        };
        self.navigate_to(view);
        true
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub const fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// The drawer's checkout button.
    pub fn checkout_from_cart(&mut self) {
        self.navigate_to(View::Checkout);
        self.cart_open = false;
    }

    /// Add a catalog product to the cart. Returns `false` for unknown IDs.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) -> bool {
        match self.catalog.product(id) {
            Some(product) => {
                self.cart.add_to_cart(product, quantity);
                true
            }
            None => {
                tracing::debug!(product = %id, "Unknown product");
                false
            }
        }
    }

    /// The drawer's `+` button.
    pub fn increment_cart_item(&mut self, id: ProductId) {
        if let Some(quantity) = self.cart.item(id).map(|item| item.quantity) {
            self.cart.update_quantity(id, i64::from(quantity) + 1);
        }
    }

    /// The drawer's `-` button. Decrementing a single unit removes the line.
    pub fn decrement_cart_item(&mut self, id: ProductId) {
        if let Some(quantity) = self.cart.item(id).map(|item| item.quantity) {
            self.cart.update_quantity(id, i64::from(quantity) - 1);
        }
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove_from_cart(id);
    }

    /// Simulated payment: always succeeds unless there is nothing to buy.
    ///
    /// Returns whether an order was placed.
    #[instrument(skip(self))]
    pub fn place_order(&mut self) -> bool {
        if self.cart.is_empty() {
            tracing::debug!("Ignoring order for an empty cart");
            return false;
        }
        tracing::info!(
            items = self.cart.cart_count(),
            total = %self.cart.subtotal(),
            "Order placed"
        );
        self.cart.clear_cart();
        self.navigate_to(View::OrderConfirmation);
        true
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Flip a product's wishlist membership.
    ///
    /// Returns the new membership, or `None` for unknown IDs.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> Option<bool> {
        let product = self.catalog.product(id)?;
        Some(self.wishlist.toggle(product))
    }

    // =========================================================================
    // Product detail
    // =========================================================================

    pub fn set_product_quantity(&mut self, quantity: i64) {
        if let Some((_, form)) = self.product_form() {
            form.set_quantity(quantity);
        }
    }

    pub fn select_color(&mut self, color: &str) -> bool {
        self.product_form()
            .is_some_and(|(product, form)| form.select_color(product, color))
    }

    pub fn select_storage(&mut self, storage: &str) -> bool {
        self.product_form()
            .is_some_and(|(product, form)| form.select_storage(product, storage))
    }

    /// Add the product on screen with the selected quantity.
    pub fn add_selected_to_cart(&mut self) -> bool {
        match (self.router.current(), &self.local) {
            (View::Product { product }, LocalState::Product(form))
                if form.product() == product.id =>
            {
                self.cart.add_to_cart(product, form.quantity());
                true
            }
            _ => false,
        }
    }

    /// Add the product on screen and go straight to checkout.
    pub fn buy_now(&mut self) -> bool {
        let added = self.add_selected_to_cart();
        if added {
            self.navigate_to(View::Checkout);
        }
        added
    }

    // =========================================================================
    // Category filters
    // =========================================================================

    pub fn toggle_brand(&mut self, brand: &str) {
        if let LocalState::Category(listing) = &mut self.local {
            listing.toggle_brand(brand);
        }
    }

    pub fn set_price_ceiling(&mut self, max_price: Decimal) {
        if let LocalState::Category(listing) = &mut self.local {
            listing.set_max_price(max_price);
        }
    }

    // =========================================================================
    // Header search
    // =========================================================================

    pub fn set_search_term(&mut self, term: &str) {
        self.search.set_term(term, self.catalog.as_ref());
    }

    /// A click outside the suggestion panel.
    pub fn dismiss_search(&mut self) {
        self.search.dismiss();
    }

    /// Open a suggested product, clearing the search box.
    pub fn select_search_result(&mut self, id: ProductId) -> bool {
        match self.search.select(id) {
            Some(product) => {
                self.navigate_to(View::product(&product));
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn set_login_type(&mut self, role: Role) {
        if let LocalState::Login(form) = &mut self.local {
            form.set_role(role);
        }
    }

    /// Sign in with the login form's selected role and go home.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidEmail` if `email` is malformed. The message
    /// is also shown on the login form.
    pub fn submit_login(&mut self, email: &str) -> Result<()> {
        let role = match &self.local {
            LocalState::Login(form) => form.role(),
            _ => Role::default(),
        };
        let email = match Email::parse(email) {
            Ok(email) => email,
            Err(err) => {
                let err = AppError::from(err);
                if let LocalState::Login(form) = &mut self.local {
                    form.reject(email, err.user_message());
                }
                return Err(err);
            }
        };
        self.auth.login(email, role);
        self.navigate_to(View::Home);
        Ok(())
    }

    /// Register a customer and go home.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidEmail` if `email` is malformed.
    pub fn submit_signup(&mut self, email: &str, name: &str) -> Result<()> {
        let email = Email::parse(email)?;
        self.auth.sign_up(email, name.trim());
        self.navigate_to(View::Home);
        Ok(())
    }

    /// End the session and go home.
    pub fn logout(&mut self) {
        self.auth.logout();
        self.navigate_to(View::Home);
    }

    pub fn select_account_tab(&mut self, tab: AccountTab) {
        if let LocalState::Account(active) = &mut self.local {
            *active = tab;
        }
    }

    // =========================================================================
    // Contact
    // =========================================================================

    /// Mock contact form submission. Always succeeds.
    pub fn submit_contact(&mut self) {
        if let LocalState::Contact { submitted } = &mut self.local {
            *submitted = true;
            tracing::info!("Contact message received");
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The product on screen and its form, when the form belongs to it.
    fn product_form(&mut self) -> Option<(&Product, &mut ProductForm)> {
        match (self.router.current(), &mut self.local) {
            (View::Product { product }, LocalState::Product(form))
                if form.product() == product.id =>
            {
                Some((product, form))
            }
            _ => None,
        }
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            view: self.router.current(),
            local: &self.local,
            cart: &self.cart,
            wishlist: &self.wishlist,
            auth: &self.auth,
            catalog: self.catalog.as_ref(),
            config: &self.config,
        }
    }

    /// Render the active screen.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render(&self) -> Result<Screen> {
        routes::render(&self.context())
    }

    /// Render the active screen inside the full page shell.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render_page(&self) -> Result<String> {
        let ctx = self.context();
        let screen = routes::render(&ctx)?;
        layout::page(&ctx, screen, &self.search, self.cart_open)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::catalog::tests::{category, product};
    use crate::models::Variants;
    use crate::routes::ScreenKind;

    fn storefront() -> Storefront {
        let mut phone = product(1, "phones", "Apple", 12_000);
        phone.variants = Variants {
            color: Some(vec!["Black".to_string(), "Silver".to_string()]),
            storage: Some(vec!["128GB".to_string(), "256GB".to_string()]),
        };
        let catalog = StaticCatalog::from_parts(
            vec![
                phone,
                product(2, "phones", "Samsung", 9_000),
                product(3, "audio", "Sony", 1_500),
            ],
            vec![category("phones", "Phones"), category("audio", "Audio")],
        )
        .unwrap();
        Storefront::new(Arc::new(catalog), StorefrontConfig::default())
    }

    #[test]
    fn test_starts_as_guest_on_home() {
        let store = storefront();
        assert_eq!(store.view(), &View::Home);
        assert!(!store.auth().status().is_authenticated());
        assert_eq!(store.render().unwrap().kind, ScreenKind::Home);
    }

    #[test]
    fn test_navigation_resets_screen_state() {
        let mut store = storefront();
        assert!(store.open_category(&CategoryId::new("phones")));
        store.toggle_brand("Apple");
        let LocalState::Category(listing) = store.local() else {
            panic!("expected category state");
        };
        assert_eq!(listing.visible().len(), 1);

        store.navigate_to(View::Home);
        store.open_category(&CategoryId::new("phones"));
        let LocalState::Category(listing) = store.local() else {
            panic!("expected category state");
        };
        assert_eq!(listing.visible().len(), 2);
    }

    #[test]
    fn test_product_form_flows_into_cart() {
        let mut store = storefront();
        assert!(store.open_product(ProductId::new(1)));
        store.set_product_quantity(3);
        assert!(store.select_color("Silver"));
        assert!(!store.select_storage("2TB"));
        assert!(store.buy_now());

        assert_eq!(store.view(), &View::Checkout);
        assert_eq!(store.cart().cart_count(), 3);
    }

    #[test]
    fn test_form_actions_ignored_off_screen() {
        let mut store = storefront();
        assert!(!store.add_selected_to_cart());
        assert!(!store.select_color("Black"));
        store.toggle_brand("Apple");
        assert_eq!(store.local(), &LocalState::Empty);
    }

    #[test]
    fn test_form_for_another_product_is_not_reused() {
        let mut store = storefront();
        assert!(store.open_product(ProductId::new(1)));
        store.set_product_quantity(7);

        let galaxy = store.catalog().product(ProductId::new(2)).unwrap().clone();
        store.router.navigate_to(View::product(&galaxy));

        let html = store.render().unwrap().html;
        assert!(html.contains(r#"value="1""#));
        assert!(!html.contains("Black"));
        assert!(!store.select_color("Black"));
        store.set_product_quantity(4);
        assert!(!store.add_selected_to_cart());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_navigation_subscribers_and_scroll() {
        let pages = Rc::new(RefCell::new(Vec::new()));
        let mut store = storefront();
        let sink = Rc::clone(&pages);
        let id = store.subscribe_navigation(move |nav| sink.borrow_mut().push(nav.page));

        store.scroll_to(320);
        assert_eq!(store.router().scroll_offset(), 320);
        store.open_product(ProductId::new(3));
        assert_eq!(store.router().scroll_offset(), 0);

        assert!(store.unsubscribe_navigation(id));
        store.navigate_to(View::Home);
        assert_eq!(*pages.borrow(), vec!["product"]);
    }

    #[test]
    fn test_drawer_decrement_removes_last_unit() {
        let mut store = storefront();
        let id = ProductId::new(2);
        store.add_to_cart(id, 1);
        store.increment_cart_item(id);
        assert_eq!(store.cart().item(id).unwrap().quantity, 2);
        store.decrement_cart_item(id);
        store.decrement_cart_item(id);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_checkout_from_cart_closes_drawer() {
        let mut store = storefront();
        store.open_cart();
        store.checkout_from_cart();
        assert!(!store.is_cart_open());
        assert_eq!(store.view(), &View::Checkout);
    }

    #[test]
    fn test_place_order_on_empty_cart_is_ignored() {
        let mut store = storefront();
        store.navigate_to(View::Checkout);
        assert!(!store.place_order());
        assert_eq!(store.view(), &View::Checkout);
    }

    #[test]
    fn test_invalid_login_stays_on_form() {
        let mut store = storefront();
        store.navigate_to(View::Login);
        store.set_login_type(Role::Admin);
        assert!(store.submit_login("not-an-email").is_err());

        assert_eq!(store.view(), &View::Login);
        let LocalState::Login(form) = store.local() else {
            panic!("expected login state");
        };
        assert_eq!(form.email(), "not-an-email");
        assert!(form.error().is_some());
        assert_eq!(form.role(), Role::Admin);
    }

    #[test]
    fn test_admin_login_unlocks_dashboard() {
        let mut store = storefront();
        store.navigate_to(View::Login);
        store.set_login_type(Role::Admin);
        store.submit_login("boss@tahaqiq.com").unwrap();
        assert_eq!(store.view(), &View::Home);

        store.navigate_to(View::Admin);
        assert_eq!(store.render().unwrap().kind, ScreenKind::Admin);

        store.logout();
        assert_eq!(store.view(), &View::Home);
        store.navigate_to(View::Admin);
        assert_eq!(store.render().unwrap().kind, ScreenKind::Login);
    }

    #[test]
    fn test_search_selection_opens_product() {
        let mut store = storefront();
        store.set_search_term("sam");
        assert_eq!(store.search().suggestions().len(), 1);
        assert!(store.select_search_result(ProductId::new(2)));
        assert_eq!(store.search().term(), "");
        assert!(matches!(store.view(), View::Product { product } if product.id == ProductId::new(2)));
    }

    #[test]
    fn test_account_tabs() {
        let mut store = storefront();
        store.submit_signup("ama@example.com", "Ama").unwrap();
        store.navigate_to(View::Account);
        assert!(store.render().unwrap().html.contains("You have no recent orders."));

        store.select_account_tab(AccountTab::Profile);
        let html = store.render().unwrap().html;
        assert!(html.contains("Profile Settings"));
        assert!(html.contains(r#"value="ama@example.com""#));
    }

    #[test]
    fn test_contact_submission() {
        let mut store = storefront();
        store.navigate_to(View::Contact);
        store.submit_contact();
        assert!(store.render().unwrap().html.contains("Thank you for your message"));
    }

    #[test]
    fn test_page_shell_includes_drawer_only_when_open() {
        let mut store = storefront();
        assert!(!store.render_page().unwrap().contains("Shopping Cart"));
        store.open_cart();
        assert!(store.render_page().unwrap().contains("Shopping Cart"));
    }
}
