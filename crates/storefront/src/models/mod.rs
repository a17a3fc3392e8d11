//! Domain models for the storefront.
//!
//! Catalog records are immutable and owned by the catalog source; cart lines
//! and users are owned by their stores.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use product::{Category, Product, Variants};
pub use user::User;
