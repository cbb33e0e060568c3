//! Runeword compatibility commands

use anyhow::{Context, Result};
use horadric::{compute_compatibility, AncestorClosure};
use horadric_idb::{CatalogRepository, CompatibilityRow};
use std::path::PathBuf;

use super::open_catalog;
use crate::cli::CompatFormat;
use crate::config;

/// Recompute compatibility from stored types, bases and runewords.
/// Returns the number of edges written.
pub fn rebuild(db: &impl CatalogRepository) -> Result<usize> {
    let types = db.list_item_types().context("Failed to load item types")?;
    let bases = db.list_base_items().context("Failed to load base items")?;
    let recipes = db.list_runewords().context("Failed to load runewords")?;

    let closure = AncestorClosure::build(&types);
    let edges = compute_compatibility(&recipes, &bases, &closure);

    db.rebuild_compatibility(&edges)
        .context("Failed to rebuild compatibility table")
}

/// Handle `resolve`
pub fn resolve(database: Option<PathBuf>) -> Result<()> {
    let db_path = config::resolve_database(database)?;
    let db = open_catalog(&db_path)?;

    let edges = rebuild(&db)?;
    let stats = db.stats()?;
    println!(
        "Resolved {} compatibility edges ({} runewords, {} base items, {} item types)",
        edges, stats.runeword_count, stats.base_item_count, stats.item_type_count
    );
    Ok(())
}

/// Handle `compat`
pub fn list(database: Option<PathBuf>, recipe: Option<i64>, format: CompatFormat) -> Result<()> {
    let db_path = config::resolve_database(database)?;
    let db = open_catalog(&db_path)?;
    let rows = db.list_compatibility(recipe)?;

    match format {
        CompatFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
            println!("{}", json);
        }
        CompatFormat::Table => {
            if rows.is_empty() {
                println!("No compatible base items found.");
            } else {
                print_table(&rows);
            }
        }
    }

    Ok(())
}

fn print_table(rows: &[CompatibilityRow]) {
    let name_width = rows
        .iter()
        .map(|r| r.base_item_name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:>6}  {:<8}  {:<name_width$}  {:<10}  {:>7}",
        "Recipe", "Code", "Name", "Category", "Sockets"
    );
    println!("{}", "-".repeat(6 + 2 + 8 + 2 + name_width + 2 + 10 + 2 + 7));
    for row in rows {
        println!(
            "{:>6}  {:<8}  {:<name_width$}  {:<10}  {:>3}/{:<3}",
            row.recipe_id,
            row.base_item_code,
            row.base_item_name,
            row.category,
            row.required_sockets,
            row.max_sockets
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horadric::{BaseItemCandidate, RunewordRecipe, RunewordRequirement, TypeNode};
    use horadric_idb::SqliteDb;

    fn base(id: i64, code: &str, item_type: &str, sockets: u32) -> BaseItemCandidate {
        BaseItemCandidate {
            id,
            code: code.to_string(),
            name: code.to_uppercase(),
            category: "weapon".to_string(),
            primary_type: item_type.to_string(),
            secondary_type: None,
            max_sockets: sockets,
        }
    }

    fn recipe(id: i64, valid: &[&str], sockets: u32) -> RunewordRecipe {
        RunewordRecipe {
            id,
            name: format!("rw{}", id),
            requirement: RunewordRequirement {
                valid_types: valid.iter().map(|s| s.to_string()).collect(),
                excluded_types: Vec::new(),
                required_sockets: sockets,
            },
        }
    }

    #[test]
    fn test_rebuild_from_database() {
        let db = SqliteDb::open_in_memory().unwrap();
        db.init().unwrap();
        db.upsert_item_types(&[
            TypeNode::new("weap", None, None),
            TypeNode::new("axe", Some("weap"), None),
        ])
        .unwrap();
        db.upsert_base_items(&[base(1, "hax", "axe", 2), base(2, "axe", "axe", 4)])
            .unwrap();
        db.upsert_runewords(&[recipe(7, &["weap"], 3)]).unwrap();

        assert_eq!(rebuild(&db).unwrap(), 1);
        let rows = db.list_compatibility(None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].base_item_code, "axe");

        // Running again replaces rather than accumulates
        assert_eq!(rebuild(&db).unwrap(), 1);
        assert_eq!(db.stats().unwrap().compat_count, 1);
    }

    #[test]
    fn test_print_table_does_not_panic() {
        print_table(&[CompatibilityRow {
            recipe_id: 7,
            base_item_id: 2,
            base_item_code: "axe".into(),
            base_item_name: "Axe".into(),
            category: "weapon".into(),
            max_sockets: 4,
            required_sockets: 3,
        }]);
    }
}
