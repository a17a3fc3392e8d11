//! Wishlist store.

use tracing::instrument;

use tahaqiq_core::ProductId;

use super::observer::{SubscriptionId, Subscribers};
use crate::models::Product;

/// Change applied to the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added(ProductId),
    Removed(ProductId),
}

/// Saved products, unique by ID, in the order they were saved.
#[derive(Debug, Default)]
pub struct WishlistStore {
    items: Vec<Product>,
    subscribers: Subscribers<WishlistChange>,
}

impl WishlistStore {
    /// An empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `product` unless it is already saved.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if self.is_in_wishlist(product.id) {
            return;
        }
        self.items.push(product.clone());
        tracing::debug!("Added to wishlist");
        self.subscribers.notify(&WishlistChange::Added(product.id));
    }

    /// Remove a saved product if present.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        if self.items.len() == before {
            return;
        }
        tracing::debug!("Removed from wishlist");
        self.subscribers.notify(&WishlistChange::Removed(id));
    }

    /// Remove `product` if saved, save it otherwise.
    ///
    /// Returns whether the product is saved afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.is_in_wishlist(product.id) {
            self.remove_from_wishlist(product.id);
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    /// Whether `id` is saved.
    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Saved products in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.items.len()
    }

    /// Register for change notifications.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&WishlistChange) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Stop receiving change notifications.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
