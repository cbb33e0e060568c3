//! SQLite implementation using rusqlite (synchronous).
//!
//! This implementation is used by the CLI tool.

use crate::repository::*;
use crate::shared::{queries, schema};
use crate::types::*;
use horadric::{
    BaseItemCandidate, CompatibilityEdge, ObservedStat, Property, RunewordRecipe,
    RunewordRequirement, TypeNode,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Default database location
pub const DEFAULT_DB_PATH: &str = "share/catalog.db";

/// SQLite-backed catalog database
pub struct SqliteDb {
    conn: Connection,
}

fn db_err(e: rusqlite::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

fn row_to_base_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<BaseItemCandidate> {
    Ok(BaseItemCandidate {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        category: row.get(3)?,
        primary_type: row.get(4)?,
        secondary_type: row.get(5)?,
        max_sockets: row.get(6)?,
    })
}

impl SqliteDb {
    /// Open or create the database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    fn is_migration_applied(&self, version: &str) -> RepoResult<bool> {
        let applied = self
            .conn
            .query_row(
                "SELECT 1 FROM schema_migrations WHERE version = ?1",
                params![version],
                |_| Ok(true),
            )
            .optional()
            .map_err(db_err)?;
        Ok(applied.unwrap_or(false))
    }

    fn mark_migration_applied(&self, version: &str) -> RepoResult<()> {
        self.conn
            .execute(
                "INSERT OR IGNORE INTO schema_migrations (version) VALUES (?1)",
                params![version],
            )
            .map_err(db_err)?;
        Ok(())
    }

    fn run_migrations(&self) -> RepoResult<()> {
        if !self.is_migration_applied("0001_catalog_schema")? {
            self.conn
                .execute_batch(schema::CATALOG_SCHEMA)
                .map_err(db_err)?;
            self.mark_migration_applied("0001_catalog_schema")?;
            tracing::info!("SQLite: Applied migration 0001_catalog_schema");
        }

        // Create indexes after all migrations
        self.conn.execute_batch(schema::INDEXES).map_err(db_err)?;

        Ok(())
    }

    fn count(&self, sql: &str) -> RepoResult<i64> {
        self.conn.query_row(sql, [], |row| row.get(0)).map_err(db_err)
    }
}

impl CatalogRepository for SqliteDb {
    fn init(&self) -> RepoResult<()> {
        self.conn
            .execute(schema::MIGRATIONS_TABLE, [])
            .map_err(db_err)?;

        self.run_migrations()
    }

    fn upsert_item_types(&self, types: &[TypeNode]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;
        {
            let mut stmt = tx.prepare(queries::UPSERT_ITEM_TYPE).map_err(db_err)?;
            for node in types {
                stmt.execute(params![node.code, node.equiv1, node.equiv2])
                    .map_err(db_err)?;
            }
        }
        tx.commit().map_err(db_err)?;
        Ok(types.len())
    }

    fn list_item_types(&self) -> RepoResult<Vec<TypeNode>> {
        let mut stmt = self.conn.prepare(queries::LIST_ITEM_TYPES).map_err(db_err)?;
        let types = stmt
            .query_map([], |row| {
                Ok(TypeNode {
                    code: row.get(0)?,
                    equiv1: row.get(1)?,
                    equiv2: row.get(2)?,
                })
            })
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(types)
    }

    fn upsert_base_items(&self, bases: &[BaseItemCandidate]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;
        {
            let mut stmt = tx.prepare(queries::UPSERT_BASE_ITEM).map_err(db_err)?;
            for base in bases {
                stmt.execute(params![
                    base.id,
                    base.code,
                    base.name,
                    base.category,
                    base.primary_type,
                    base.secondary_type,
                    base.max_sockets
                ])
                .map_err(db_err)?;
            }
        }
        tx.commit().map_err(db_err)?;
        Ok(bases.len())
    }

    fn list_base_items(&self) -> RepoResult<Vec<BaseItemCandidate>> {
        let sql = format!(
            "SELECT {} FROM base_items ORDER BY id",
            queries::BASE_ITEM_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let bases = stmt
            .query_map([], row_to_base_item)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(bases)
    }

    fn get_base_item(&self, code: &str) -> RepoResult<Option<BaseItemCandidate>> {
        let sql = format!(
            "SELECT {} FROM base_items WHERE code = ?1",
            queries::BASE_ITEM_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql).map_err(db_err)?;
        let base = stmt
            .query_row(params![code], row_to_base_item)
            .optional()
            .map_err(db_err)?;
        Ok(base)
    }

    fn upsert_runewords(&self, recipes: &[RunewordRecipe]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;
        {
            let mut stmt = tx.prepare(queries::UPSERT_RUNEWORD).map_err(db_err)?;
            for recipe in recipes {
                let req = &recipe.requirement;
                let valid = serde_json::to_string(&req.valid_types)?;
                let excluded = serde_json::to_string(&req.excluded_types)?;
                stmt.execute(params![
                    recipe.id,
                    recipe.name,
                    valid,
                    excluded,
                    req.required_sockets
                ])
                .map_err(db_err)?;
            }
        }
        tx.commit().map_err(db_err)?;
        Ok(recipes.len())
    }

    fn list_runewords(&self) -> RepoResult<Vec<RunewordRecipe>> {
        let mut stmt = self.conn.prepare(queries::LIST_RUNEWORDS).map_err(db_err)?;
        let rows: Vec<(i64, String, String, String, u32)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;

        rows.into_iter()
            .map(|(id, name, valid, excluded, rune_count)| {
                Ok(RunewordRecipe {
                    id,
                    name,
                    requirement: RunewordRequirement {
                        valid_types: serde_json::from_str(&valid)?,
                        excluded_types: serde_json::from_str(&excluded)?,
                        required_sockets: rune_count,
                    },
                })
            })
            .collect()
    }

    fn replace_properties(
        &self,
        owner: PropertyOwner,
        owner_id: i64,
        props: &[Property],
    ) -> RepoResult<usize> {
        let owner_kind = owner.to_string();
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;
        tx.execute(queries::DELETE_PROPERTIES, params![owner_kind, owner_id])
            .map_err(db_err)?;
        {
            let mut stmt = tx.prepare(queries::INSERT_PROPERTY).map_err(db_err)?;
            for (position, prop) in props.iter().enumerate() {
                stmt.execute(params![
                    owner_kind,
                    owner_id,
                    position as i64,
                    prop.code,
                    prop.param,
                    prop.min,
                    prop.max,
                    prop.display_text,
                    prop.has_range
                ])
                .map_err(db_err)?;
            }
        }
        tx.commit().map_err(db_err)?;
        Ok(props.len())
    }

    fn get_properties(&self, owner: PropertyOwner, owner_id: i64) -> RepoResult<Vec<Property>> {
        let mut stmt = self.conn.prepare(queries::GET_PROPERTIES).map_err(db_err)?;
        let props = stmt
            .query_map(params![owner.to_string(), owner_id], |row| {
                Ok(Property {
                    code: row.get(0)?,
                    param: row.get(1)?,
                    min: row.get(2)?,
                    max: row.get(3)?,
                    display_text: row.get(4)?,
                    has_range: row.get(5)?,
                })
            })
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(props)
    }

    fn rebuild_compatibility(&self, edges: &[CompatibilityEdge]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;
        let cleared = tx.execute(queries::CLEAR_COMPAT, []).map_err(db_err)?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(queries::INSERT_COMPAT).map_err(db_err)?;
            for edge in edges {
                inserted += stmt
                    .execute(params![
                        edge.recipe_id,
                        edge.base_item_id,
                        edge.required_sockets
                    ])
                    .map_err(db_err)?;
            }
        }
        tx.commit().map_err(db_err)?;
        tracing::debug!(cleared, inserted, "Rebuilt runeword compatibility table");
        Ok(inserted)
    }

    fn list_compatibility(&self, recipe_id: Option<i64>) -> RepoResult<Vec<CompatibilityRow>> {
        let mut stmt = self.conn.prepare(queries::LIST_COMPAT).map_err(db_err)?;
        let rows = stmt
            .query_map(params![recipe_id], |row| {
                Ok(CompatibilityRow {
                    recipe_id: row.get(0)?,
                    base_item_id: row.get(1)?,
                    base_item_code: row.get(2)?,
                    base_item_name: row.get(3)?,
                    category: row.get(4)?,
                    max_sockets: row.get(5)?,
                    required_sockets: row.get(6)?,
                })
            })
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(rows)
    }

    fn upsert_stats(&self, stats: &[ObservedStat]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;
        {
            let mut stmt = tx.prepare(queries::UPSERT_STAT).map_err(db_err)?;
            for stat in stats {
                stmt.execute(params![stat.code, stat.sample_text, stat.seeded])
                    .map_err(db_err)?;
            }
        }
        tx.commit().map_err(db_err)?;
        Ok(stats.len())
    }

    fn list_stats(&self) -> RepoResult<Vec<ObservedStat>> {
        let mut stmt = self.conn.prepare(queries::LIST_STATS).map_err(db_err)?;
        let stats = stmt
            .query_map([], |row| {
                Ok(ObservedStat {
                    code: row.get(0)?,
                    sample_text: row.get(1)?,
                    seeded: row.get(2)?,
                })
            })
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(stats)
    }

    fn stats(&self) -> RepoResult<DbStats> {
        Ok(DbStats {
            item_type_count: self.count(queries::COUNT_ITEM_TYPES)?,
            base_item_count: self.count(queries::COUNT_BASE_ITEMS)?,
            runeword_count: self.count(queries::COUNT_RUNEWORDS)?,
            property_count: self.count(queries::COUNT_PROPERTIES)?,
            compat_count: self.count(queries::COUNT_COMPAT)?,
            stat_count: self.count(queries::COUNT_STATS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> SqliteDb {
        let db = SqliteDb::open_in_memory().unwrap();
        db.init().unwrap();
        db
    }

    fn sword() -> BaseItemCandidate {
        BaseItemCandidate {
            id: 1,
            code: "crs".to_string(),
            name: "Crystal Sword".to_string(),
            category: "weapon".to_string(),
            primary_type: "swor".to_string(),
            secondary_type: None,
            max_sockets: 6,
        }
    }

    fn targe() -> BaseItemCandidate {
        BaseItemCandidate {
            id: 2,
            code: "pa1".to_string(),
            name: "Targe".to_string(),
            category: "armor".to_string(),
            primary_type: "ashd".to_string(),
            secondary_type: Some("pala".to_string()),
            max_sockets: 4,
        }
    }

    fn spirit() -> RunewordRecipe {
        RunewordRecipe {
            id: 10,
            name: "Spirit".to_string(),
            requirement: RunewordRequirement {
                valid_types: vec!["swor".to_string(), "shie".to_string()],
                excluded_types: vec![],
                required_sockets: 4,
            },
        }
    }

    #[test]
    fn test_init_creates_tables() {
        let db = setup_db();
        assert_eq!(db.stats().unwrap(), DbStats::default());
    }

    #[test]
    fn test_init_is_idempotent() {
        let db = setup_db();
        db.init().unwrap();
        let applied: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_item_types_upsert_and_list() {
        let db = setup_db();
        db.upsert_item_types(&[
            TypeNode::new("swor", Some("mele"), None),
            TypeNode::new("mele", Some("weap"), None),
        ])
        .unwrap();
        db.upsert_item_types(&[TypeNode::new("swor", Some("weap"), Some("mele"))])
            .unwrap();

        let types = db.list_item_types().unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[1], TypeNode::new("swor", Some("weap"), Some("mele")));
    }

    #[test]
    fn test_base_items_round_trip() {
        let db = setup_db();
        db.upsert_base_items(&[sword(), targe()]).unwrap();

        let bases = db.list_base_items().unwrap();
        assert_eq!(bases, vec![sword(), targe()]);
        assert_eq!(db.get_base_item("pa1").unwrap(), Some(targe()));
        assert_eq!(db.get_base_item("nope").unwrap(), None);
    }

    #[test]
    fn test_runewords_round_trip_type_lists() {
        let db = setup_db();
        db.upsert_runewords(&[spirit()]).unwrap();
        assert_eq!(db.list_runewords().unwrap(), vec![spirit()]);
    }

    #[test]
    fn test_replace_properties_keeps_order_and_replaces() {
        let db = setup_db();
        let mut first = Property::new("res-fire", 30, 30);
        first.display_text = "Fire Resist +30%".to_string();
        let mut second = Property::with_param("skill", "Teleport", 1, 3);
        second.display_text = "+1-3 To Teleport".to_string();
        second.has_range = true;

        db.replace_properties(PropertyOwner::Unique, 7, &[first.clone(), second.clone()])
            .unwrap();
        assert_eq!(
            db.get_properties(PropertyOwner::Unique, 7).unwrap(),
            vec![first.clone(), second]
        );

        db.replace_properties(PropertyOwner::Unique, 7, &[first.clone()])
            .unwrap();
        assert_eq!(db.get_properties(PropertyOwner::Unique, 7).unwrap(), vec![first]);

        // Same id under another owner kind is separate
        assert!(db.get_properties(PropertyOwner::SetItem, 7).unwrap().is_empty());
    }

    #[test]
    fn test_rebuild_compatibility_replaces_previous_edges() {
        let db = setup_db();
        db.upsert_base_items(&[sword(), targe()]).unwrap();
        db.upsert_runewords(&[spirit()]).unwrap();

        let first = [
            CompatibilityEdge { recipe_id: 10, base_item_id: 1, required_sockets: 4 },
            CompatibilityEdge { recipe_id: 10, base_item_id: 2, required_sockets: 4 },
        ];
        let second = [CompatibilityEdge { recipe_id: 10, base_item_id: 2, required_sockets: 4 }];

        assert_eq!(db.rebuild_compatibility(&first).unwrap(), 2);
        assert_eq!(db.rebuild_compatibility(&second).unwrap(), 1);

        let rows = db.list_compatibility(None).unwrap();
        assert_eq!(
            rows,
            vec![CompatibilityRow {
                recipe_id: 10,
                base_item_id: 2,
                base_item_code: "pa1".to_string(),
                base_item_name: "Targe".to_string(),
                category: "armor".to_string(),
                max_sockets: 4,
                required_sockets: 4,
            }]
        );
    }

    #[test]
    fn test_list_compatibility_filters_by_recipe() {
        let db = setup_db();
        db.upsert_base_items(&[sword()]).unwrap();
        db.rebuild_compatibility(&[
            CompatibilityEdge { recipe_id: 10, base_item_id: 1, required_sockets: 4 },
            CompatibilityEdge { recipe_id: 11, base_item_id: 1, required_sockets: 2 },
        ])
        .unwrap();

        assert_eq!(db.list_compatibility(None).unwrap().len(), 2);
        let only = db.list_compatibility(Some(11)).unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].required_sockets, 2);
    }

    #[test]
    fn test_stats_upsert_and_counts() {
        let db = setup_db();
        let stats = [
            ObservedStat {
                code: "res-fire".to_string(),
                sample_text: "Fire Resist +{value}%".to_string(),
                seeded: true,
            },
            ObservedStat {
                code: "item_extrablood".to_string(),
                sample_text: "item_extrablood: 5".to_string(),
                seeded: false,
            },
        ];
        db.upsert_stats(&stats).unwrap();
        db.upsert_stats(&stats).unwrap();

        let listed = db.list_stats().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].code, "item_extrablood");
        assert!(!listed[0].seeded);

        let counts = db.stats().unwrap();
        assert_eq!(counts.stat_count, 2);
        assert_eq!(counts.compat_count, 0);
    }
}
