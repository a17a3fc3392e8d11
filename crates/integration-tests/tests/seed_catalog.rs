//! The bundled catalog and category filtering over it.

use rust_decimal::Decimal;

use tahaqiq_core::CategoryId;
use tahaqiq_integration_tests::{seed_catalog, seeded_storefront};
use tahaqiq_storefront::catalog::CatalogSource;
use tahaqiq_storefront::catalog::facets::brand_facets;
use tahaqiq_storefront::routes::LocalState;

#[test]
fn test_every_category_has_products() {
    let catalog = seed_catalog();
    for category in catalog.list_categories() {
        assert!(
            !catalog.products_in_category(&category.id).is_empty(),
            "{} should have products",
            category.id
        );
    }
}

#[test]
fn test_phone_brand_facets() {
    let catalog = seed_catalog();
    let phones = catalog.products_in_category(&CategoryId::new("phones"));
    assert_eq!(brand_facets(&phones), ["Apple", "Samsung", "Google"]);
}

#[test]
fn test_category_filter_is_brand_and_price() {
    let mut store = seeded_storefront();
    assert!(store.open_category(&CategoryId::new("phones")));
    store.toggle_brand("Apple");
    store.toggle_brand("Google");
    store.set_price_ceiling(Decimal::new(10_000, 0));

    let LocalState::Category(listing) = store.local() else {
        panic!("category screen should own a listing");
    };
    let names: Vec<_> = listing.visible().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Pixel 8"]);

    let html = store.render().expect("category should render").html;
    assert!(html.contains("Pixel 8"));
    assert!(!html.contains("iPhone 15 Pro"));
}

#[test]
fn test_filter_with_no_matches_renders_empty_state() {
    let mut store = seeded_storefront();
    assert!(store.open_category(&CategoryId::new("audio")));
    store.set_price_ceiling(Decimal::ZERO);

    let html = store.render().expect("category should render").html;
    assert!(html.contains("No products match your filters."));
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut store = seeded_storefront();
    assert!(!store.open_category(&CategoryId::new("drones")));
}
