//! Shared SQL constants for database implementations.

/// SQLite schema definitions
pub mod schema {
    /// Migrations bookkeeping table
    pub const MIGRATIONS_TABLE: &str = r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY NOT NULL,
            applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
    "#;

    /// Migration 0001: catalog tables
    pub const CATALOG_SCHEMA: &str = r#"
        CREATE TABLE IF NOT EXISTS item_types (
            code TEXT PRIMARY KEY NOT NULL,
            equiv1 TEXT,
            equiv2 TEXT
        );

        CREATE TABLE IF NOT EXISTS base_items (
            id INTEGER PRIMARY KEY NOT NULL,
            code TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            item_type TEXT NOT NULL,
            item_type2 TEXT,
            max_sockets INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS runewords (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            valid_item_types TEXT NOT NULL DEFAULT '[]',
            excluded_item_types TEXT NOT NULL DEFAULT '[]',
            rune_count INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS properties (
            owner_kind TEXT NOT NULL,
            owner_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            code TEXT NOT NULL,
            param TEXT NOT NULL DEFAULT '',
            min INTEGER NOT NULL DEFAULT 0,
            max INTEGER NOT NULL DEFAULT 0,
            display_text TEXT NOT NULL DEFAULT '',
            has_range BOOLEAN NOT NULL DEFAULT FALSE,
            PRIMARY KEY (owner_kind, owner_id, position)
        );

        CREATE TABLE IF NOT EXISTS runeword_compat (
            recipe_id INTEGER NOT NULL REFERENCES runewords(id) ON DELETE CASCADE,
            base_item_id INTEGER NOT NULL REFERENCES base_items(id) ON DELETE CASCADE,
            required_sockets INTEGER NOT NULL,
            PRIMARY KEY (recipe_id, base_item_id)
        );

        CREATE TABLE IF NOT EXISTS stats (
            code TEXT PRIMARY KEY NOT NULL,
            sample_text TEXT NOT NULL DEFAULT '',
            seeded BOOLEAN NOT NULL DEFAULT FALSE
        );
    "#;

    /// Index definitions (use after table creation)
    pub const INDEXES: &str = r#"
        CREATE INDEX IF NOT EXISTS idx_properties_code ON properties(code);
        CREATE INDEX IF NOT EXISTS idx_runeword_compat_base ON runeword_compat(base_item_id);
        CREATE INDEX IF NOT EXISTS idx_base_items_item_type ON base_items(item_type);
    "#;
}

/// Common SQL queries
pub mod queries {
    pub const UPSERT_ITEM_TYPE: &str = r#"INSERT INTO item_types (code, equiv1, equiv2)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(code) DO UPDATE SET equiv1 = excluded.equiv1, equiv2 = excluded.equiv2"#;

    pub const LIST_ITEM_TYPES: &str = "SELECT code, equiv1, equiv2 FROM item_types ORDER BY code";

    pub const UPSERT_BASE_ITEM: &str = r#"INSERT INTO base_items
        (id, code, name, category, item_type, item_type2, max_sockets)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        ON CONFLICT(id) DO UPDATE SET
            code = excluded.code,
            name = excluded.name,
            category = excluded.category,
            item_type = excluded.item_type,
            item_type2 = excluded.item_type2,
            max_sockets = excluded.max_sockets"#;

    pub const BASE_ITEM_COLUMNS: &str =
        "id, code, name, category, item_type, item_type2, max_sockets";

    pub const UPSERT_RUNEWORD: &str = r#"INSERT INTO runewords
        (id, name, valid_item_types, excluded_item_types, rune_count)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            valid_item_types = excluded.valid_item_types,
            excluded_item_types = excluded.excluded_item_types,
            rune_count = excluded.rune_count"#;

    pub const LIST_RUNEWORDS: &str = r#"SELECT id, name, valid_item_types, excluded_item_types, rune_count
        FROM runewords ORDER BY id"#;

    pub const DELETE_PROPERTIES: &str =
        "DELETE FROM properties WHERE owner_kind = ?1 AND owner_id = ?2";

    pub const INSERT_PROPERTY: &str = r#"INSERT INTO properties
        (owner_kind, owner_id, position, code, param, min, max, display_text, has_range)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"#;

    pub const GET_PROPERTIES: &str = r#"SELECT code, param, min, max, display_text, has_range
        FROM properties
        WHERE owner_kind = ?1 AND owner_id = ?2
        ORDER BY position"#;

    pub const CLEAR_COMPAT: &str = "DELETE FROM runeword_compat";

    pub const INSERT_COMPAT: &str = r#"INSERT OR IGNORE INTO runeword_compat
        (recipe_id, base_item_id, required_sockets)
        VALUES (?1, ?2, ?3)"#;

    pub const LIST_COMPAT: &str = r#"SELECT c.recipe_id, c.base_item_id, b.code, b.name, b.category,
            b.max_sockets, c.required_sockets
        FROM runeword_compat c
        JOIN base_items b ON b.id = c.base_item_id
        WHERE (?1 IS NULL OR c.recipe_id = ?1)
        ORDER BY c.recipe_id, b.name"#;

    pub const UPSERT_STAT: &str = r#"INSERT INTO stats (code, sample_text, seeded)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(code) DO UPDATE SET
            sample_text = CASE WHEN excluded.sample_text = '' THEN stats.sample_text ELSE excluded.sample_text END,
            seeded = excluded.seeded"#;

    pub const LIST_STATS: &str = "SELECT code, sample_text, seeded FROM stats ORDER BY code";

    pub const COUNT_ITEM_TYPES: &str = "SELECT COUNT(*) FROM item_types";
    pub const COUNT_BASE_ITEMS: &str = "SELECT COUNT(*) FROM base_items";
    pub const COUNT_RUNEWORDS: &str = "SELECT COUNT(*) FROM runewords";
    pub const COUNT_PROPERTIES: &str = "SELECT COUNT(*) FROM properties";
    pub const COUNT_COMPAT: &str = "SELECT COUNT(*) FROM runeword_compat";
    pub const COUNT_STATS: &str = "SELECT COUNT(*) FROM stats";
}
