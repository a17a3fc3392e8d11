//! Catalog records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tahaqiq_core::{CategoryId, Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Foreign key into the category set.
    pub category: CategoryId,
    pub brand: String,
    /// Unit price in cedis. Never negative.
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    /// Average review score, 0 to 5.
    pub rating: f32,
    pub review_count: u32,
    /// Attribute name to display value, e.g. `"Display" -> "6.1\" OLED"`.
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    #[serde(default)]
    pub variants: Variants,
}

impl Product {
    /// Unit price in the storefront currency.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::local(self.price)
    }
}

/// Selectable options shown on the product detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variants {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Vec<String>>,
}

impl Variants {
    /// First color option, selected by default.
    #[must_use]
    pub fn default_color(&self) -> Option<&str> {
        self.color.as_ref()?.first().map(String::as_str)
    }

    /// First storage option, selected by default.
    #[must_use]
    pub fn default_storage(&self) -> Option<&str> {
        self.storage.as_ref()?.first().map(String::as_str)
    }
}

/// A browsable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display image reference.
    #[serde(default)]
    pub image: String,
}
