//! Client-side state containers.
//!
//! Each store owns one slice of session state, exposes mutators, and
//! notifies its subscribers synchronously after every effective change.
//! Derived values (counts, totals) are computed on read.

pub mod auth;
pub mod cart;
pub mod observer;
pub mod wishlist;

pub use auth::{AuthStore, SessionChange};
pub use cart::{CartChange, CartStore};
pub use observer::{SubscriptionId, Subscribers};
pub use wishlist::{WishlistChange, WishlistStore};
