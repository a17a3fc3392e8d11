//! Tahaqiq Tech storefront renderer.
//!
//! Loads the catalog, builds a fresh guest session and writes the requested
//! page to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Home page
//! tahaqiq-storefront
//!
//! # A category or product
//! tahaqiq-storefront --category phones
//! tahaqiq-storefront --product 4
//!
//! # Any view, in its wire format
//! tahaqiq-storefront --view '{"page": "faq"}'
//!
//! # Only the screen, without header and footer
//! tahaqiq-storefront --fragment --view '{"page": "checkout"}'
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tahaqiq_core::{CategoryId, ProductId};
use tahaqiq_storefront::Storefront;
use tahaqiq_storefront::catalog::{CatalogSource, StaticCatalog};
use tahaqiq_storefront::config::StorefrontConfig;
use tahaqiq_storefront::router::View;

#[derive(Parser)]
#[command(name = "tahaqiq-storefront")]
#[command(author, version, about = "Render Tahaqiq Tech storefront pages")]
struct Cli {
    /// View to render, as JSON (e.g. '{"page": "faq"}')
    #[arg(long, conflicts_with_all = ["category", "product"])]
    view: Option<String>,

    /// Category ID to render
    #[arg(long, conflicts_with = "product")]
    category: Option<String>,

    /// Product ID to render
    #[arg(long)]
    product: Option<i32>,

    /// Catalog file, overriding `STOREFRONT_CATALOG_PATH`
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print only the screen, without the page shell
    #[arg(long)]
    fragment: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing isn't up yet; fall back to the default subscriber.
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = run(cli, config) {
        tracing::error!("Render failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `EnvFilter`.
///
/// Defaults to info level for our crate if `RUST_LOG` is not set. Logs go to
/// stderr so stdout carries only the rendered page.
fn init_tracing(config: &StorefrontConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tahaqiq_storefront=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli, mut config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
    }

    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::load(path)?,
        None => StaticCatalog::seed()?,
    };
    let catalog: Arc<dyn CatalogSource> = Arc::new(catalog);

    let mut storefront = Storefront::new(catalog, config);

    if let Some(json) = cli.view {
        let view: View = serde_json::from_str(&json)?;
        storefront.navigate_to(view);
    } else if let Some(id) = cli.category {
        if !storefront.open_category(&CategoryId::new(id.as_str())) {
            return Err(format!("no category with id {id}").into());
        }
    } else if let Some(id) = cli.product {
        if !storefront.open_product(ProductId::new(id)) {
            return Err(format!("no product with id {id}").into());
        }
    }

    let html = if cli.fragment {
        storefront.render()?.html
    } else {
        storefront.render_page()?
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
