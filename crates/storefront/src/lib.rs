//! Tahaqiq Tech storefront library.
//!
//! Client-side state for a single shopper: the cart, wishlist and session
//! stores, the view router, and the Askama screens rendered from them. The
//! product catalog is a read-only source loaded once at startup.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod router;
pub mod routes;
pub mod state;
pub mod stores;

pub use state::Storefront;
