//! Catalog import command
//!
//! Reads a JSON document of already-cleaned item text, turns every line into
//! a structured property and stores the result. Lines are parsed in parallel
//! across owners; database writes stay on the calling thread.

use anyhow::{Context, Result};
use horadric::{
    combine_all_attributes, BaseItemCandidate, Property, PropertyCodec, RunewordRecipe,
    RunewordRequirement, StatRegistry, TypeNode,
};
use horadric_idb::{CatalogRepository, PropertyOwner};
use rayon::prelude::*;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::{compat, open_catalog, standard_codec};
use crate::config;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportDocument {
    pub item_types: Vec<TypeNode>,
    pub base_items: Vec<BaseItemEntry>,
    pub runes: Vec<RuneEntry>,
    pub runewords: Vec<RunewordEntry>,
    pub uniques: Vec<NamedItemEntry>,
    pub set_items: Vec<NamedItemEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseItemEntry {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub item_type: String,
    #[serde(default)]
    pub item_type2: Option<String>,
    #[serde(default)]
    pub max_sockets: u32,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl BaseItemEntry {
    fn candidate(&self) -> BaseItemCandidate {
        BaseItemCandidate {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            primary_type: self.item_type.clone(),
            secondary_type: self.item_type2.clone().filter(|t| !t.trim().is_empty()),
            max_sockets: self.max_sockets,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneEntry {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunewordEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub valid_item_types: Vec<String>,
    #[serde(default)]
    pub excluded_item_types: Vec<String>,
    #[serde(default)]
    pub rune_count: u32,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl RunewordEntry {
    fn recipe(&self) -> RunewordRecipe {
        RunewordRecipe {
            id: self.id,
            name: self.name.clone(),
            requirement: RunewordRequirement {
                valid_types: self.valid_item_types.clone(),
                excluded_types: self.excluded_item_types.clone(),
                required_sockets: self.rune_count,
            },
        }
    }
}

/// Unique or set item
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedItemEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Counts reported after an import
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub item_types: usize,
    pub base_items: usize,
    pub runes: usize,
    pub runewords: usize,
    pub uniques: usize,
    pub set_items: usize,
    pub properties: usize,
    pub raw_lines: usize,
    pub unknown_bases: usize,
    pub new_codes: Vec<String>,
    pub edges: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Import complete")?;
        writeln!(f, "  Item types:   {}", self.item_types)?;
        writeln!(f, "  Base items:   {}", self.base_items)?;
        writeln!(f, "  Runes:        {}", self.runes)?;
        writeln!(f, "  Runewords:    {}", self.runewords)?;
        writeln!(f, "  Uniques:      {}", self.uniques)?;
        writeln!(f, "  Set items:    {}", self.set_items)?;
        writeln!(f, "  Properties:   {}", self.properties)?;
        writeln!(f, "  Raw lines:    {}", self.raw_lines)?;
        if self.unknown_bases > 0 {
            writeln!(f, "  Unknown base: {}", self.unknown_bases)?;
        }
        writeln!(f, "  New codes:    {}", self.new_codes.len())?;
        for code in &self.new_codes {
            writeln!(f, "    {}", code)?;
        }
        write!(f, "  Compat edges: {}", self.edges)
    }
}

/// Handle `import`
pub fn handle(input: &Path, database: Option<PathBuf>) -> Result<()> {
    let doc = load_document(input)?;
    let db_path = config::resolve_database(database)?;
    let db = open_catalog(&db_path)?;
    let codec = standard_codec()?;

    let summary = import_document(&db, &codec, &doc)?;
    println!("{}", summary);
    println!("Database: {}", db_path.display());
    Ok(())
}

pub fn load_document(path: &Path) -> Result<ImportDocument> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse import document {}", path.display()))
}

/// Store every category of the document, then rebuild compatibility
pub fn import_document(
    db: &impl CatalogRepository,
    codec: &PropertyCodec,
    doc: &ImportDocument,
) -> Result<ImportSummary> {
    let registry = StatRegistry::seeded();
    let mut summary = ImportSummary::default();

    summary.item_types = db
        .upsert_item_types(&doc.item_types)
        .context("Failed to store item types")?;

    let bases: Vec<BaseItemCandidate> = doc.base_items.iter().map(BaseItemEntry::candidate).collect();
    summary.base_items = db
        .upsert_base_items(&bases)
        .context("Failed to store base items")?;
    let parsed: Vec<_> = doc
        .base_items
        .par_iter()
        .map(|e| (e.id, build_properties(codec, &registry, &e.lines, &e.properties)))
        .collect();
    store(db, PropertyOwner::BaseItem, parsed, &mut summary)?;

    let parsed: Vec<_> = doc
        .runes
        .par_iter()
        .map(|e| (e.id, build_properties(codec, &registry, &e.lines, &e.properties)))
        .collect();
    store(db, PropertyOwner::Rune, parsed, &mut summary)?;
    summary.runes = doc.runes.len();

    let recipes: Vec<RunewordRecipe> = doc.runewords.iter().map(RunewordEntry::recipe).collect();
    summary.runewords = db
        .upsert_runewords(&recipes)
        .context("Failed to store runewords")?;
    let parsed: Vec<_> = doc
        .runewords
        .par_iter()
        .map(|e| (e.id, build_properties(codec, &registry, &e.lines, &e.properties)))
        .collect();
    store(db, PropertyOwner::Runeword, parsed, &mut summary)?;

    summary.uniques = import_named(db, codec, &registry, PropertyOwner::Unique, &doc.uniques, &mut summary)?;
    summary.set_items = import_named(db, codec, &registry, PropertyOwner::SetItem, &doc.set_items, &mut summary)?;

    db.upsert_stats(&registry.snapshot())
        .context("Failed to store stat registry")?;
    summary.new_codes = registry.discovered().into_iter().map(|s| s.code).collect();

    summary.edges = compat::rebuild(db)?;

    tracing::info!(
        properties = summary.properties,
        raw = summary.raw_lines,
        new_codes = summary.new_codes.len(),
        edges = summary.edges,
        "Import finished"
    );

    Ok(summary)
}

fn import_named(
    db: &impl CatalogRepository,
    codec: &PropertyCodec,
    registry: &StatRegistry,
    owner: PropertyOwner,
    entries: &[NamedItemEntry],
    summary: &mut ImportSummary,
) -> Result<usize> {
    for entry in entries {
        let Some(base) = entry.base_code.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };
        if db.get_base_item(base)?.is_none() {
            tracing::warn!(%owner, id = entry.id, name = %entry.name, base, "Unknown base item code");
            summary.unknown_bases += 1;
        }
    }

    let parsed: Vec<_> = entries
        .par_iter()
        .map(|e| (e.id, build_properties(codec, registry, &e.lines, &e.properties)))
        .collect();
    store(db, owner, parsed, summary)?;
    Ok(entries.len())
}

fn store(
    db: &impl CatalogRepository,
    owner: PropertyOwner,
    parsed: Vec<(i64, Vec<Property>)>,
    summary: &mut ImportSummary,
) -> Result<()> {
    for (owner_id, props) in parsed {
        summary.raw_lines += props.iter().filter(|p| p.is_raw()).count();
        summary.properties += db
            .replace_properties(owner, owner_id, &props)
            .with_context(|| format!("Failed to store properties for {} {}", owner, owner_id))?;
    }
    Ok(())
}

/// Parse one owner's lines, append its structured properties, canonicalize
/// and enrich. Every resulting code is reported to the registry.
pub fn build_properties(
    codec: &PropertyCodec,
    registry: &StatRegistry,
    lines: &[String],
    structured: &[Property],
) -> Vec<Property> {
    let mut props: Vec<Property> = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| codec.reverse_translate(l))
        .collect();
    props.extend(structured.iter().cloned());

    let mut props = combine_all_attributes(&props, codec);
    for prop in &mut props {
        codec.enrich(prop);
        registry.observe(prop);
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use horadric_idb::SqliteDb;
    use std::io::Write;

    const DOC: &str = r#"{
        "itemTypes": [
            {"code": "weap"},
            {"code": "mele", "equiv1": "weap"},
            {"code": "swor", "equiv1": "mele"},
            {"code": "armo"},
            {"code": "tors", "equiv1": "armo"}
        ],
        "baseItems": [
            {"id": 1, "code": "lsd", "name": "Long Sword", "category": "weapon",
             "itemType": "swor", "maxSockets": 4, "lines": ["+10 To Strength"]},
            {"id": 2, "code": "lea", "name": "Leather Armor", "category": "armor",
             "itemType": "tors", "maxSockets": 2}
        ],
        "runes": [
            {"id": 1, "code": "r01", "name": "El Rune", "lines": ["+1 To Light Radius"]}
        ],
        "runewords": [
            {"id": 10, "name": "Steel", "validItemTypes": ["swor"], "runeCount": 2,
             "lines": ["+20% Increased Attack Speed", "Knockback"]},
            {"id": 11, "name": "Stealth", "validItemTypes": ["tors"], "runeCount": 2,
             "lines": ["+6 To Dexterity"]},
            {"id": 12, "name": "Broken", "validItemTypes": ["nope"], "runeCount": 3}
        ],
        "uniques": [
            {"id": 100, "name": "Rixot's Keen", "baseCode": "ssd",
             "lines": ["+5 To Strength", "+5 To Dexterity", "+5 To Vitality", "+5 To Energy",
                       "Something Nobody Knows"],
             "properties": [{"code": "crafted-only", "min": 1, "max": 1}]}
        ],
        "setItems": [
            {"id": 200, "name": "Sigon's Shelter", "baseCode": "lea", "lines": ["Fire Resist +30%"]}
        ]
    }"#;

    fn import_sample() -> (SqliteDb, ImportSummary) {
        let db = SqliteDb::open_in_memory().unwrap();
        db.init().unwrap();
        let codec = PropertyCodec::standard().unwrap();
        let doc: ImportDocument = serde_json::from_str(DOC).unwrap();
        let summary = import_document(&db, &codec, &doc).unwrap();
        (db, summary)
    }

    #[test]
    fn test_import_counts() {
        let (_db, summary) = import_sample();
        assert_eq!(summary.item_types, 5);
        assert_eq!(summary.base_items, 2);
        assert_eq!(summary.runes, 1);
        assert_eq!(summary.runewords, 3);
        assert_eq!(summary.uniques, 1);
        assert_eq!(summary.set_items, 1);
        assert_eq!(summary.unknown_bases, 1);
        assert_eq!(summary.raw_lines, 1);
        assert_eq!(summary.new_codes, vec!["crafted-only".to_string()]);
        assert_eq!(summary.edges, 2);
    }

    #[test]
    fn test_unique_properties_are_combined_and_stored() {
        let (db, _) = import_sample();
        let props = db.get_properties(PropertyOwner::Unique, 100).unwrap();
        let codes: Vec<&str> = props.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec![horadric::ALL_STATS_CODE, "raw", "crafted-only"]);
        assert_eq!(props[0].min, 5);
        assert_eq!(props[1].display_text, "Something Nobody Knows");
    }

    #[test]
    fn test_compatibility_rows_after_import() {
        let (db, _) = import_sample();
        let rows = db.list_compatibility(Some(10)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].base_item_code, "lsd");

        let rows = db.list_compatibility(Some(12)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_reimport_replaces_properties() {
        let (db, _) = import_sample();
        let codec = PropertyCodec::standard().unwrap();
        let doc: ImportDocument = serde_json::from_str(DOC).unwrap();
        import_document(&db, &codec, &doc).unwrap();

        let props = db.get_properties(PropertyOwner::SetItem, 200).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].code, "res-fire");
        assert_eq!(props[0].min, 30);
    }

    #[test]
    fn test_build_properties_keeps_simple_per_level_text() {
        let codec = PropertyCodec::standard().unwrap();
        let registry = StatRegistry::seeded();
        let line = "+49 To Strength (Based On Character Level)".to_string();

        let props = build_properties(&codec, &registry, &[line.clone()], &[]);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].code, "str/lvl");
        assert_eq!(props[0].display_text, line);
    }

    #[test]
    fn test_build_properties_alias_is_not_new() {
        let codec = PropertyCodec::standard().unwrap();
        let registry = StatRegistry::seeded();

        build_properties(&codec, &registry, &[], &[Property::new("fireresist", 30, 30)]);
        assert!(registry.discovered().is_empty());
    }

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();

        let doc = load_document(file.path()).unwrap();
        assert_eq!(doc.item_types.len(), 5);
        assert_eq!(doc.runewords[0].recipe().requirement.required_sockets, 2);
        assert_eq!(doc.uniques[0].properties.len(), 1);
    }

    #[test]
    fn test_load_document_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_document(file.path()).is_err());
    }

    #[test]
    fn test_empty_document_imports_nothing() {
        let db = SqliteDb::open_in_memory().unwrap();
        db.init().unwrap();
        let codec = PropertyCodec::standard().unwrap();
        let summary = import_document(&db, &codec, &ImportDocument::default()).unwrap();
        assert_eq!(summary, ImportSummary::default());
    }
}
