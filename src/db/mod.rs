//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite connection options (WAL, busy timeout)
//! - Key/value repository backing preference persistence

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, init_memory_db};
pub use repo::Repository;
