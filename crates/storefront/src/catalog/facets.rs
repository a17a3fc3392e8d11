//! Brand facets and price filtering for the category screen.

use rust_decimal::Decimal;

use crate::models::Product;

/// Distinct brands among `products`, in order of first appearance.
#[must_use]
pub fn brand_facets(products: &[Product]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for product in products {
        if !brands.contains(&product.brand) {
            brands.push(product.brand.clone());
        }
    }
    brands
}

/// Filter selected on the category screen.
///
/// A product matches when its brand is selected (an empty selection means
/// any brand) and its price is within `0..=max_price`. The lower bound is
/// fixed at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected_brands: Vec<String>,
    max_price: Decimal,
}

impl CategoryFilter {
    /// A filter with no brand selection and the given price ceiling.
    #[must_use]
    pub const fn new(max_price: Decimal) -> Self {
        Self {
            selected_brands: Vec::new(),
            max_price,
        }
    }

    /// Brands currently selected, in the order they were checked.
    #[must_use]
    pub fn selected_brands(&self) -> &[String] {
        &self.selected_brands
    }

    /// Whether `brand` is checked.
    #[must_use]
    pub fn is_selected(&self, brand: &str) -> bool {
        self.selected_brands.iter().any(|b| b == brand)
    }

    /// Upper price bound (inclusive).
    #[must_use]
    pub const fn max_price(&self) -> Decimal {
        self.max_price
    }

    /// Check `brand` if unchecked, uncheck it otherwise.
    pub fn toggle_brand(&mut self, brand: &str) {
        if let Some(pos) = self.selected_brands.iter().position(|b| b == brand) {
            self.selected_brands.remove(pos);
        } else {
            self.selected_brands.push(brand.to_string());
        }
    }

    /// Replace the selection with exactly `brands`.
    pub fn select_brands<I, S>(&mut self, brands: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_brands.clear();
        for brand in brands {
            let brand = brand.into();
            if !self.selected_brands.contains(&brand) {
                self.selected_brands.push(brand);
            }
        }
    }

    /// Move the price ceiling. Negative values clamp to zero.
    pub fn set_max_price(&mut self, max_price: Decimal) {
        self.max_price = max_price.max(Decimal::ZERO);
    }

    /// Whether `product` passes both conditions.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let brand_match = self.selected_brands.is_empty() || self.is_selected(&product.brand);
        let price_match = product.price >= Decimal::ZERO && product.price <= self.max_price;
        brand_match && price_match
    }

    /// Products that pass the filter, in input order.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;

    fn sample() -> Vec<Product> {
        vec![product(1, "phones", "X", 50), product(2, "phones", "Y", 150)]
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_brand_facets_keep_first_appearance_order() {
        let products = vec![
            product(1, "phones", "Samsung", 10),
            product(2, "phones", "Apple", 10),
            product(3, "phones", "Samsung", 10),
            product(4, "phones", "Google", 10),
        ];
        assert_eq!(brand_facets(&products), vec!["Samsung", "Apple", "Google"]);
        assert!(brand_facets(&[]).is_empty());
    }

    #[test]
    fn test_brand_and_price_are_a_conjunction() {
        let products = sample();
        let mut filter = CategoryFilter::new(Decimal::from(100));

        filter.select_brands(["X"]);
        assert_eq!(ids(&filter.apply(&products)), vec![1]);

        filter.select_brands(Vec::<String>::new());
        assert_eq!(ids(&filter.apply(&products)), vec![1]);

        filter.select_brands(["Y"]);
        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let filter = CategoryFilter::new(Decimal::from(150));
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2]);
    }

    #[test]
    fn test_toggle_brand_checks_and_unchecks() {
        let mut filter = CategoryFilter::new(Decimal::from(1000));
        filter.toggle_brand("X");
        filter.toggle_brand("Y");
        assert_eq!(filter.selected_brands(), ["X", "Y"]);

        filter.toggle_brand("X");
        assert_eq!(filter.selected_brands(), ["Y"]);
        assert!(!filter.is_selected("X"));
    }

    #[test]
    fn test_negative_ceiling_clamps_to_zero() {
        let mut filter = CategoryFilter::new(Decimal::from(100));
        filter.set_max_price(Decimal::from(-5));
        assert_eq!(filter.max_price(), Decimal::ZERO);
        assert!(filter.apply(&sample()).is_empty());
    }
}
