//! Item Catalog Database Library
//!
//! This library provides a trait-based abstraction for catalog database
//! operations, with a synchronous SQLite implementation.
//!
//! # Features
//!
//! - `sqlite-sync` (default) - Synchronous SQLite using rusqlite (for CLI)
//!
//! # Example
//!
//! ```no_run
//! use horadric_idb::{CatalogRepository, PropertyOwner, SqliteDb};
//!
//! let db = SqliteDb::open("catalog.db").unwrap();
//! db.init().unwrap();
//!
//! // Properties stored for unique item 42
//! let props = db.get_properties(PropertyOwner::Unique, 42).unwrap();
//! ```

pub mod repository;
pub mod shared;
pub mod types;

#[cfg(feature = "sqlite-sync")]
pub mod sqlite;

// Re-export types
pub use types::*;

// Re-export repository trait
pub use repository::{CatalogRepository, RepoError, RepoResult};

// Re-export implementations
#[cfg(feature = "sqlite-sync")]
pub use sqlite::{SqliteDb, DEFAULT_DB_PATH};
