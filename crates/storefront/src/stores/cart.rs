//! Shopping cart store.

use rust_decimal::Decimal;
use tracing::instrument;

use tahaqiq_core::{Price, ProductId};

use super::observer::{SubscriptionId, Subscribers};
use crate::models::{CartItem, Product};

/// Change applied to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was inserted.
    ItemAdded { id: ProductId, quantity: u32 },
    /// An existing line's quantity changed.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// A line was removed.
    ItemRemoved { id: ProductId },
    /// Every line was removed.
    Cleared,
}

/// Cart lines keyed by product ID, in insertion order.
///
/// Every line has `quantity >= 1`. State lives for the session only.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    subscribers: Subscribers<CartChange>,
}

impl CartStore {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`.
    ///
    /// Accumulates onto an existing line for the same product; otherwise a new
    /// line is appended. Adding zero is a no-op.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            tracing::debug!("Ignoring add of zero quantity");
            return;
        }

        let change = if let Some(item) = self.item_mut(product.id) {
            item.quantity = item.quantity.checked_add(quantity).unwrap_or_else(|| {
                tracing::warn!(quantity, "Cart quantity capped at u32::MAX");
                u32::MAX
            });
            CartChange::QuantityChanged {
                id: product.id,
                quantity: item.quantity,
            }
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity,
            });
            CartChange::ItemAdded {
                id: product.id,
                quantity,
            }
        };

        tracing::debug!(?change, "Cart updated");
        self.subscribers.notify(&change);
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or below removes the line. Unknown IDs are ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity) else {
            if quantity <= 0 {
                self.remove_from_cart(id);
            } else {
                tracing::warn!("Cart quantity capped at u32::MAX");
                self.set_quantity(id, u32::MAX);
            }
            return;
        };

        if quantity == 0 {
            self.remove_from_cart(id);
        } else {
            self.set_quantity(id, quantity);
        }
    }

    /// Remove a line if present.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: ProductId) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            tracing::debug!("Product not in cart");
            return;
        }

        tracing::debug!("Removed from cart");
        self.subscribers.notify(&CartChange::ItemRemoved { id });
    }

    /// Remove every line.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        tracing::debug!("Cart cleared");
        self.subscribers.notify(&CartChange::Cleared);
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for `id`, if any.
    #[must_use]
    pub fn item(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines, saturating at `u32::MAX`.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Sum of price times quantity over all lines.
    ///
    /// Saturates at [`Decimal::MAX`] rather than overflowing.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(CartItem::line_total)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or_else(|| {
                tracing::warn!(lines = self.items.len(), "Cart total overflowed, saturating");
                Decimal::MAX
            })
    }

    /// [`CartStore::total_price`] in the storefront currency.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        Price::local(self.total_price())
    }

    /// Register for change notifications.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CartChange) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Stop receiving change notifications.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn item_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        let Some(item) = self.item_mut(id) else {
            tracing::debug!("Product not in cart");
            return;
        };
        if item.quantity == quantity {
            return;
        }
        item.quantity = quantity;
        self.subscribers
            .notify(&CartChange::QuantityChanged { id, quantity });
    }
}
