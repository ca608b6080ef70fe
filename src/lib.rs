pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;
pub mod preferences;
pub mod store;

pub use catalog::{
    CatalogSource, DataSourceError, FileCatalogSource, HttpCatalogSource, MockCatalogSource,
    ProductCatalog,
};
pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{Decimal, EntryId, Order, PreferenceSet, Product, ProductId, TimeMs};
pub use engine::{SessionStatus, SwipeDirection, SwipeOutcome, SwipeSession};
pub use error::AppError;
pub use orchestration::Storefront;
pub use preferences::{InMemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
