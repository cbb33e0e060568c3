//! Repository trait for catalog database operations.
//!
//! This trait defines the interface for all database backends.

use horadric::{BaseItemCandidate, CompatibilityEdge, ObservedStat, Property, RunewordRecipe, TypeNode};

use crate::types::*;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Trait for catalog database operations (synchronous)
pub trait CatalogRepository {
    /// Initialize the database schema
    fn init(&self) -> RepoResult<()>;

    // === Item types ===

    /// Insert or update item type rows, returns rows written
    fn upsert_item_types(&self, types: &[TypeNode]) -> RepoResult<usize>;

    /// All item types ordered by code
    fn list_item_types(&self) -> RepoResult<Vec<TypeNode>>;

    // === Base items ===

    fn upsert_base_items(&self, bases: &[BaseItemCandidate]) -> RepoResult<usize>;

    /// All base items ordered by id
    fn list_base_items(&self) -> RepoResult<Vec<BaseItemCandidate>>;

    /// Look up a base item by code
    fn get_base_item(&self, code: &str) -> RepoResult<Option<BaseItemCandidate>>;

    // === Runewords ===

    fn upsert_runewords(&self, recipes: &[RunewordRecipe]) -> RepoResult<usize>;

    /// All runewords ordered by id
    fn list_runewords(&self) -> RepoResult<Vec<RunewordRecipe>>;

    // === Properties ===

    /// Replace an owner's property list (delete then insert, one transaction)
    fn replace_properties(
        &self,
        owner: PropertyOwner,
        owner_id: i64,
        props: &[Property],
    ) -> RepoResult<usize>;

    /// An owner's properties in stored order
    fn get_properties(&self, owner: PropertyOwner, owner_id: i64) -> RepoResult<Vec<Property>>;

    // === Compatibility ===

    /// Clear the compatibility table and insert a fresh edge set (one transaction)
    fn rebuild_compatibility(&self, edges: &[CompatibilityEdge]) -> RepoResult<usize>;

    /// Compatibility rows joined with base items, optionally for one runeword
    fn list_compatibility(&self, recipe_id: Option<i64>) -> RepoResult<Vec<CompatibilityRow>>;

    // === Stat registry ===

    /// Insert or update observed stat codes
    fn upsert_stats(&self, stats: &[ObservedStat]) -> RepoResult<usize>;

    /// Stored stat codes ordered by code
    fn list_stats(&self) -> RepoResult<Vec<ObservedStat>>;

    // === Statistics ===

    /// Get database statistics
    fn stats(&self) -> RepoResult<DbStats>;
}
