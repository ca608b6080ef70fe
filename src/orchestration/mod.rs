//! Wiring of catalog, preferences, session and stores for one shopper.

pub mod storefront;

pub use storefront::{CheckoutError, Storefront, StorefrontError};
