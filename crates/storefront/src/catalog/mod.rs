//! Read-only product catalog.
//!
//! The catalog is an external data source as far as the storefront is
//! concerned: it is loaded once at startup, validated, and only ever queried.
//!
//! # Modules
//!
//! - [`facets`] - Brand facets and the category screen's filter
//! - [`search`] - Header search suggestions

pub mod facets;
pub mod search;

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use tahaqiq_core::{CategoryId, ProductId};

use crate::models::{Category, Product};

pub use facets::{CategoryFilter, brand_facets};
pub use search::SearchBox;

/// Catalog bundled with the binary, used when no catalog path is configured.
const SEED_CATALOG: &str = include_str!("../../content/catalog.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    #[error("duplicate category id {0}")]
    DuplicateCategory(CategoryId),

    #[error("product {product} references unknown category {category}")]
    UnknownCategory {
        product: ProductId,
        category: CategoryId,
    },

    #[error("product {product} is invalid: {reason}")]
    InvalidProduct { product: ProductId, reason: String },
}

/// Read access to the static catalog.
///
/// Both listings are in catalog order and never change for the lifetime of
/// the process.
pub trait CatalogSource: Send + Sync {
    /// All products, in catalog order.
    fn list_products(&self) -> &[Product];

    /// All categories, in catalog order.
    fn list_categories(&self) -> &[Category];

    /// Look up a product by ID.
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.list_products().iter().find(|p| p.id == id)
    }

    /// Look up a category by ID.
    fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.list_categories().iter().find(|c| &c.id == id)
    }

    /// Products belonging to a category, in catalog order.
    fn products_in_category(&self, id: &CategoryId) -> Vec<Product> {
        self.list_products()
            .iter()
            .filter(|p| &p.category == id)
            .cloned()
            .collect()
    }
}

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// In-memory catalog backed by validated vectors.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl StaticCatalog {
    /// Build a catalog from in-memory records.
    ///
    /// # Errors
    ///
    /// Returns an error if IDs repeat, a product references a missing
    /// category, or a product's price or rating is out of range.
    pub fn from_parts(
        products: Vec<Product>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        validate(&products, &categories)?;
        Ok(Self {
            products,
            categories,
        })
    }

    /// Parse and validate a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and the validation
    /// errors of [`StaticCatalog::from_parts`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_parts(doc.products, doc.categories)
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// errors of [`StaticCatalog::from_json`].
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog bundled with the storefront.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document itself is invalid.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_CATALOG)
    }
}

impl CatalogSource for StaticCatalog {
    fn list_products(&self) -> &[Product] {
        &self.products
    }

    fn list_categories(&self) -> &[Category] {
        &self.categories
    }
}

fn validate(products: &[Product], categories: &[Category]) -> Result<(), CatalogError> {
    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(&category.id) {
            return Err(CatalogError::DuplicateCategory(category.id.clone()));
        }
    }

    let mut product_ids = HashSet::new();
    for product in products {
        if !product_ids.insert(product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }
        if !category_ids.contains(&product.category) {
            return Err(CatalogError::UnknownCategory {
                product: product.id,
                category: product.category.clone(),
            });
        }
        if product.price < Decimal::ZERO {
            return Err(CatalogError::InvalidProduct {
                product: product.id,
                reason: format!("negative price {}", product.price),
            });
        }
        if !(0.0..=5.0).contains(&product.rating) {
            return Err(CatalogError::InvalidProduct {
                product: product.id,
                reason: format!("rating {} outside 0-5", product.rating),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    /// Minimal product for tests.
    pub fn product(id: i32, category: &str, brand: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("{brand} Model {id}"),
            category: CategoryId::new(category),
            brand: brand.to_string(),
            price: Decimal::from(price),
            description: String::new(),
            long_description: String::new(),
            image: String::new(),
            rating: 4.0,
            review_count: 10,
            specs: std::collections::BTreeMap::new(),
            variants: crate::models::Variants::default(),
        }
    }

    pub fn category(id: &str, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = StaticCatalog::seed().unwrap();
        assert!(!catalog.list_products().is_empty());
        assert!(!catalog.list_categories().is_empty());
        let phones = catalog.products_in_category(&CategoryId::new("phones"));
        assert!(phones.iter().all(|p| p.category.as_str() == "phones"));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = StaticCatalog::from_parts(
            vec![product(1, "phones", "Apple", 100), product(2, "audio", "Sony", 50)],
            vec![category("phones", "Phones"), category("audio", "Audio")],
        )
        .unwrap();

        assert_eq!(catalog.product(ProductId::new(2)).unwrap().brand, "Sony");
        assert!(catalog.product(ProductId::new(9)).is_none());
        assert_eq!(
            catalog.category(&CategoryId::new("audio")).unwrap().name,
            "Audio"
        );
    }

    #[test]
    fn test_rejects_duplicate_product_ids() {
        let result = StaticCatalog::from_parts(
            vec![product(1, "phones", "Apple", 100), product(1, "phones", "Google", 80)],
            vec![category("phones", "Phones")],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateProduct(id)) if id.as_i32() == 1));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = StaticCatalog::from_parts(
            vec![product(1, "tablets", "Apple", 100)],
            vec![category("phones", "Phones")],
        );
        assert!(matches!(result, Err(CatalogError::UnknownCategory { .. })));
    }

    #[test]
    fn test_rejects_negative_price_and_bad_rating() {
        let cats = vec![category("phones", "Phones")];
        let negative = product(1, "phones", "Apple", -1);
        assert!(matches!(
            StaticCatalog::from_parts(vec![negative], cats.clone()),
            Err(CatalogError::InvalidProduct { .. })
        ));

        let mut overrated = product(2, "phones", "Apple", 10);
        overrated.rating = 5.5;
        assert!(matches!(
            StaticCatalog::from_parts(vec![overrated], cats),
            Err(CatalogError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(
            StaticCatalog::from_json("{\"categories\": []"),
            Err(CatalogError::Parse(_))
        ));
    }
}
