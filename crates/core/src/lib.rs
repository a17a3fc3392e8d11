//! Tahaqiq Core - Shared types library.
//!
//! This crate provides the types shared by the storefront state model:
//! - `storefront` - Catalog, stores, view router and screen rendering
//! - `integration-tests` - End-to-end flows over the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no rendering, no mutable
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
