//! Product detail screen and the product card shared by listings.

use askama::Template;

use tahaqiq_core::ProductId;

use crate::error::Result;
use crate::filters;
use crate::models::Product;
use crate::stores::WishlistStore;

use super::{LocalState, RenderContext, Screen, ScreenKind};

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub image: String,
    pub rating: f32,
    pub review_count: u32,
    pub wishlisted: bool,
}

impl ProductCardView {
    /// Card for `product`, with the heart filled if it is wishlisted.
    #[must_use]
    pub fn new(product: &Product, wishlist: &WishlistStore) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.unit_price().to_string(),
            image: product.image.clone(),
            rating: product.rating,
            review_count: product.review_count,
            wishlisted: wishlist.is_in_wishlist(product.id),
        }
    }

    /// Cards for a list of products.
    #[must_use]
    pub fn list<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        wishlist: &WishlistStore,
    ) -> Vec<Self> {
        products
            .into_iter()
            .map(|p| Self::new(p, wishlist))
            .collect()
    }
}

/// Selections on the product detail screen, bound to one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    product: ProductId,
    quantity: u32,
    color: Option<String>,
    storage: Option<String>,
}

impl ProductForm {
    /// Quantity 1 with the first color and storage option preselected.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product: product.id,
            quantity: 1,
            color: product.variants.default_color().map(str::to_string),
            storage: product.variants.default_storage().map(str::to_string),
        }
    }

    /// The product these selections belong to.
    #[must_use]
    pub const fn product(&self) -> ProductId {
        self.product
    }

    /// Selected quantity, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected color, if the product has colors.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Selected storage, if the product has storage options.
    #[must_use]
    pub fn storage(&self) -> Option<&str> {
        self.storage.as_deref()
    }

    /// Set the quantity input, clamping to at least 1.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
    }

    /// Select a color. Options the product doesn't offer are ignored.
    pub fn select_color(&mut self, product: &Product, color: &str) -> bool {
        if product.id != self.product {
            return false;
        }
        let offered = product
            .variants
            .color
            .as_ref()
            .is_some_and(|colors| colors.iter().any(|c| c == color));
        if offered {
            self.color = Some(color.to_string());
        }
        offered
    }

    /// Select a storage size. Options the product doesn't offer are ignored.
    pub fn select_storage(&mut self, product: &Product, storage: &str) -> bool {
        if product.id != self.product {
            return false;
        }
        let offered = product
            .variants
            .storage
            .as_ref()
            .is_some_and(|sizes| sizes.iter().any(|s| s == storage));
        if offered {
            self.storage = Some(storage.to_string());
        }
        offered
    }
}

/// A variant option button.
pub struct OptionView {
    pub label: String,
    pub selected: bool,
}

/// A breadcrumb link back to the product's category.
pub struct CrumbView {
    pub id: String,
    pub name: String,
}

/// Product detail template.
#[derive(Template)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub rating: f32,
    pub review_count: u32,
    pub long_description: String,
    pub image: String,
    pub category: Option<CrumbView>,
    pub colors: Vec<OptionView>,
    pub storage: Vec<OptionView>,
    pub quantity: u32,
    pub wishlisted: bool,
    pub in_cart: u32,
    pub specs: Vec<(String, String)>,
}

fn options(all: Option<&Vec<String>>, selected: Option<&str>) -> Vec<OptionView> {
    all.map(|values| {
        values
            .iter()
            .map(|v| OptionView {
                label: v.clone(),
                selected: Some(v.as_str()) == selected,
            })
            .collect()
    })
    .unwrap_or_default()
}

/// Render the product detail screen.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(ctx: &RenderContext<'_>, product: &Product) -> Result<Screen> {
    let fallback;
    let form = match ctx.local {
        LocalState::Product(form) if form.product() == product.id => form,
        _ => {
            fallback = ProductForm::new(product);
            &fallback
        }
    };

    let category = ctx.catalog.category(&product.category).map(|c| CrumbView {
        id: c.id.to_string(),
        name: c.name.clone(),
    });

    let html = ProductShowTemplate {
        id: product.id.as_i32(),
        name: product.name.clone(),
        price: product.unit_price().to_string(),
        rating: product.rating,
        review_count: product.review_count,
        long_description: product.long_description.clone(),
        image: product.image.clone(),
        category,
        colors: options(product.variants.color.as_ref(), form.color()),
        storage: options(product.variants.storage.as_ref(), form.storage()),
        quantity: form.quantity(),
        wishlisted: ctx.wishlist.is_in_wishlist(product.id),
        in_cart: ctx.cart.item(product.id).map_or(0, |item| item.quantity),
        specs: product
            .specs
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Product,
        title: product.name.clone(),
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;
    use crate::models::Variants;

    fn phone() -> Product {
        let mut p = product(1, "phones", "Apple", 100);
        p.variants = Variants {
            color: Some(vec!["Black".to_string(), "Blue".to_string()]),
            storage: Some(vec!["128GB".to_string(), "256GB".to_string()]),
        };
        p
    }

    #[test]
    fn test_form_preselects_first_options() {
        let form = ProductForm::new(&phone());
        assert_eq!(form.quantity(), 1);
        assert_eq!(form.color(), Some("Black"));
        assert_eq!(form.storage(), Some("128GB"));

        let plain = ProductForm::new(&product(2, "audio", "Sony", 10));
        assert_eq!(plain.color(), None);
        assert_eq!(plain.storage(), None);
    }

    #[test]
    fn test_form_ignores_unknown_options() {
        let p = phone();
        let mut form = ProductForm::new(&p);
        assert!(form.select_color(&p, "Blue"));
        assert!(!form.select_color(&p, "Gold"));
        assert!(!form.select_storage(&p, "1TB"));
        assert!(!form.select_color(&product(9, "phones", "Apple", 100), "Black"));
        assert_eq!(form.color(), Some("Blue"));
        assert_eq!(form.storage(), Some("128GB"));
    }

    #[test]
    fn test_form_quantity_never_below_one() {
        let mut form = ProductForm::new(&phone());
        form.set_quantity(3);
        assert_eq!(form.quantity(), 3);
        form.set_quantity(0);
        assert_eq!(form.quantity(), 1);
        assert_eq!(form.product(), ProductId::new(1));
        form.set_quantity(-4);
        assert_eq!(form.quantity(), 1);
    }
}
