//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tahaqiq_core::{Price, ProductId};

use super::Product;

/// One line in the cart: a product and how many of it.
///
/// The cart store keeps `quantity >= 1`; a line whose quantity would drop
/// to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Product ID of this line.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price multiplied by quantity.
    ///
    /// Saturates at [`Decimal::MAX`] when the product does not fit.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or_else(|| {
                tracing::warn!(
                    product_id = %self.product.id,
                    quantity = self.quantity,
                    "Line total overflowed, saturating"
                );
                Decimal::MAX
            })
    }

    /// Line total in the storefront currency.
    #[must_use]
    pub fn line_price(&self) -> Price {
        Price::local(self.line_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;

    #[test]
    fn test_line_total_multiplies_price() {
        let item = CartItem {
            product: product(1, "phones", "Apple", 250),
            quantity: 3,
        };
        assert_eq!(item.line_total(), Decimal::from(750));
        assert_eq!(item.line_price().to_string(), "GH₵750.00");
    }

    #[test]
    fn test_line_total_saturates_on_overflow() {
        let mut p = product(1, "phones", "Apple", 1);
        p.price = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
        let item = CartItem {
            product: p,
            quantity: 1_000_000_000,
        };
        assert_eq!(item.line_total(), Decimal::MAX);
    }
}
