//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_NAME` - Brand shown in the header and footer (default: Tahaqiq Tech)
//! - `STOREFRONT_CATALOG_PATH` - JSON catalog file (default: bundled seed catalog)
//! - `STOREFRONT_PRICE_CEILING` - Max of the category price slider (default: 50000)
//! - `STOREFRONT_SEARCH_LIMIT` - Header search suggestions shown (default: 5)
//! - `STOREFRONT_FEATURED_COUNT` - Featured products on the home page (default: 6)
//! - `STOREFRONT_DEAL_INDEX` - Catalog position of the deal of the day (default: 3)
//! - `STOREFRONT_LOG_JSON` - Emit logs as JSON lines (default: false)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::search::DEFAULT_SUGGESTION_LIMIT;

const DEFAULT_STORE_NAME: &str = "Tahaqiq Tech";
const DEFAULT_PRICE_CEILING: i64 = 50_000;
const DEFAULT_FEATURED_COUNT: usize = 6;
const DEFAULT_DEAL_INDEX: usize = 3;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Store name shown in the header and footer
    pub store_name: String,
    /// Catalog file to load instead of the bundled seed
    pub catalog_path: Option<PathBuf>,
    /// Upper end of the category price slider, also its initial value
    pub price_ceiling: Decimal,
    /// Maximum header search suggestions
    pub search_limit: usize,
    /// Number of products in the home page's featured grid
    pub featured_count: usize,
    /// Catalog position of the home page's deal of the day
    pub deal_index: usize,
    /// Emit logs as JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            catalog_path: None,
            price_ceiling: Decimal::from(DEFAULT_PRICE_CEILING),
            search_limit: DEFAULT_SUGGESTION_LIMIT,
            featured_count: DEFAULT_FEATURED_COUNT,
            deal_index: DEFAULT_DEAL_INDEX,
            json_logs: false,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let price_ceiling: Decimal =
            parse_or("STOREFRONT_PRICE_CEILING", &lookup, defaults.price_ceiling)?;
        if price_ceiling < Decimal::ZERO {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_PRICE_CEILING".to_string(),
                "must not be negative".to_string(),
            ));
        }

        Ok(Self {
            store_name: lookup("STOREFRONT_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.store_name),
            catalog_path: lookup("STOREFRONT_CATALOG_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            price_ceiling,
            search_limit: parse_or("STOREFRONT_SEARCH_LIMIT", &lookup, defaults.search_limit)?,
            featured_count: parse_or(
                "STOREFRONT_FEATURED_COUNT",
                &lookup,
                defaults.featured_count,
            )?,
            deal_index: parse_or("STOREFRONT_DEAL_INDEX", &lookup, defaults.deal_index)?,
            json_logs: parse_or("STOREFRONT_LOG_JSON", &lookup, defaults.json_logs)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if present, otherwise use `default`.
fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
