//! Category screen with brand facets and a price ceiling.

use askama::Template;
use rust_decimal::Decimal;

use crate::catalog::facets::{CategoryFilter, brand_facets};
use crate::error::Result;
use crate::filters;
use crate::models::{Category, Product};

use super::products::ProductCardView;
use super::{LocalState, RenderContext, Screen, ScreenKind};

/// The category screen's products and filter.
///
/// The filtered result is cached and only recomputed when the filter
/// changes, never on a plain re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    category: Category,
    products: Vec<Product>,
    brands: Vec<String>,
    ceiling: Decimal,
    filter: CategoryFilter,
    visible: Vec<Product>,
}

impl CategoryListing {
    /// Listing for `category` with no brand selected and the slider at
    /// `ceiling`.
    #[must_use]
    pub fn new(category: Category, products: Vec<Product>, ceiling: Decimal) -> Self {
        let filter = CategoryFilter::new(ceiling);
        let visible = filter.apply(&products);
        Self {
            brands: brand_facets(&products),
            category,
            products,
            ceiling,
            filter,
            visible,
        }
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Brands available as facets, in catalog order.
    #[must_use]
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Upper end of the price slider.
    #[must_use]
    pub const fn ceiling(&self) -> Decimal {
        self.ceiling
    }

    /// Products passing the current filter.
    #[must_use]
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        self.filter.toggle_brand(brand);
        self.recompute();
    }

    pub fn set_max_price(&mut self, max_price: Decimal) {
        self.filter.set_max_price(max_price.min(self.ceiling));
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = self.filter.apply(&self.products);
        tracing::debug!(
            category = %self.category.id,
            visible = self.visible.len(),
            "Category filter applied"
        );
    }
}

/// A brand checkbox.
pub struct BrandOption {
    pub name: String,
    pub checked: bool,
}

/// Category page template.
#[derive(Template)]
#[template(path = "collections/show.html")]
pub struct CollectionShowTemplate {
    pub name: String,
    pub brands: Vec<BrandOption>,
    pub max_price: Decimal,
    pub ceiling: Decimal,
    pub products: Vec<ProductCardView>,
}

/// Render the category screen.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(ctx: &RenderContext<'_>, category: &Category) -> Result<Screen> {
    let fallback;
    let listing = match ctx.local {
        LocalState::Category(listing) if listing.category.id == category.id => listing,
        _ => {
            fallback = CategoryListing::new(
                category.clone(),
                ctx.catalog.products_in_category(&category.id),
                ctx.config.price_ceiling,
            );
            &fallback
        }
    };

    let html = CollectionShowTemplate {
        name: category.name.clone(),
        brands: listing
            .brands()
            .iter()
            .map(|b| BrandOption {
                name: b.clone(),
                checked: listing.filter().is_selected(b),
            })
            .collect(),
        max_price: listing.filter().max_price(),
        ceiling: listing.ceiling(),
        products: ProductCardView::list(listing.visible(), ctx.wishlist),
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Category,
        title: category.name.clone(),
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{category, product};

    fn listing() -> CategoryListing {
        CategoryListing::new(
            category("phones", "Phones"),
            vec![
                product(1, "phones", "Apple", 12_000),
                product(2, "phones", "Samsung", 9_000),
                product(3, "phones", "Apple", 6_000),
                product(4, "phones", "Google", 4_000),
            ],
            Decimal::from(50_000),
        )
    }

    fn ids(listing: &CategoryListing) -> Vec<i32> {
        listing.visible().iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_new_listing_shows_everything() {
        let listing = listing();
        assert_eq!(ids(&listing), vec![1, 2, 3, 4]);
        assert_eq!(listing.brands(), ["Apple", "Samsung", "Google"]);
    }

    #[test]
    fn test_brand_and_price_combine() {
        let mut listing = listing();
        listing.toggle_brand("Apple");
        assert_eq!(ids(&listing), vec![1, 3]);

        listing.set_max_price(Decimal::from(10_000));
        assert_eq!(ids(&listing), vec![3]);

        listing.toggle_brand("Apple");
        assert_eq!(ids(&listing), vec![2, 3, 4]);
    }

    #[test]
    fn test_price_cannot_exceed_ceiling() {
        let mut listing = listing();
        listing.set_max_price(Decimal::from(90_000));
        assert_eq!(listing.filter().max_price(), Decimal::from(50_000));
    }

    #[test]
    fn test_no_match_is_empty() {
        let mut listing = listing();
        listing.toggle_brand("Nokia");
        assert!(listing.visible().is_empty());
    }
}
