//! Command handlers for horadric CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod codec;
pub mod compat;
pub mod configure;
pub mod import;

use anyhow::{Context, Result};
use horadric::PropertyCodec;
use horadric_idb::{CatalogRepository, SqliteDb};
use std::fs;
use std::path::Path;

/// Open (creating if needed) and initialize the catalog database
pub fn open_catalog(path: &Path) -> Result<SqliteDb> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }

    let db = SqliteDb::open(path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    db.init().context("Failed to initialize database schema")?;
    tracing::debug!(path = %path.display(), "Opened catalog database");
    Ok(db)
}

/// Build the standard property codec
pub fn standard_codec() -> Result<PropertyCodec> {
    PropertyCodec::standard().context("Failed to build property codec")
}
