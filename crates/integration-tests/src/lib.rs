//! Integration tests for the Tahaqiq storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tahaqiq-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - End-to-end shopper journeys through `Storefront`
//! - `view_routing` - View wire format, dispatch and guards
//! - `seed_catalog` - The bundled catalog and category filtering over it

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tahaqiq_core::ProductId;
use tahaqiq_storefront::Storefront;
use tahaqiq_storefront::catalog::{CatalogSource, StaticCatalog};
use tahaqiq_storefront::config::StorefrontConfig;
use tahaqiq_storefront::models::Product;

/// Seed catalog product IDs used across tests.
pub mod ids {
    use tahaqiq_core::ProductId;

    pub const IPHONE: ProductId = ProductId::new(1);
    pub const GALAXY: ProductId = ProductId::new(2);
    pub const PIXEL: ProductId = ProductId::new(3);
    pub const AIRPODS: ProductId = ProductId::new(7);
}

/// The bundled catalog.
///
/// # Panics
///
/// Panics if the bundled catalog is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn seed_catalog() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::seed().expect("bundled catalog should be valid"))
}

/// A guest storefront over the bundled catalog with default configuration.
#[must_use]
pub fn seeded_storefront() -> Storefront {
    Storefront::new(seed_catalog(), StorefrontConfig::default())
}

/// Look up a seed product.
///
/// # Panics
///
/// Panics if `id` is not in the bundled catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn seed_product(id: ProductId) -> Product {
    seed_catalog()
        .product(id)
        .cloned()
        .expect("product should be in the seed catalog")
}
