//! Domain types for the StyleSwipe shop core.
//!
//! This module provides:
//! - Lossless price handling via the Decimal wrapper
//! - Identifiers: ProductId, EntryId, OrderSerial, TimeMs
//! - Products and the raw catalog entries they are built from
//! - Preference sets and orders

pub mod decimal;
pub mod order;
pub mod preferences;
pub mod primitives;
pub mod product;

pub use decimal::Decimal;
pub use order::Order;
pub use preferences::PreferenceSet;
pub use primitives::{EntryId, OrderSerial, ProductId, TimeMs};
pub use product::{Product, RawProduct};
