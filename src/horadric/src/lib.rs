//! # horadric
//!
//! Item catalog core - property text codec and runeword compatibility.
//!
//! This library provides functionality to:
//! - Render structured item properties (affixes) as display text
//! - Recover structured properties from scraped display text
//! - Collapse the four primary attributes into a single "all attributes" property
//! - Compute which base items each runeword can be made in
//!
//! ## Example
//!
//! ```
//! use horadric::{Property, PropertyCodec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = PropertyCodec::standard()?;
//!
//! let prop = codec.reverse_translate("Fire Resist +30%");
//! assert_eq!(prop.code, "res-fire");
//! assert_eq!((prop.min, prop.max), (30, 30));
//!
//! assert_eq!(codec.translate(&Property::new("res-fire", 30, 30)), "Fire Resist +30%");
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod codec;
pub mod hierarchy;
pub mod property;
pub mod reference;
pub mod registry;

// Re-export commonly used items
#[doc(inline)]
pub use canonical::{combine_all_attributes, ALL_STATS_CODE};
#[doc(inline)]
pub use codec::{CodecError, PropertyCodec};
#[doc(inline)]
pub use hierarchy::{
    compute_compatibility, AncestorClosure, BaseItemCandidate, CompatibilityEdge,
    RunewordRecipe, RunewordRequirement, TypeNode,
};
#[doc(inline)]
pub use property::{canonical_code, is_fixed_value_code, Property, RAW_CODE};
#[doc(inline)]
pub use registry::{ObservedStat, StatRegistry};

// Reference data (templates, skill tabs, classes, per-level stats)
#[doc(inline)]
pub use reference::{
    per_level_stat_text, skill_tab_by_number, template_for, CharacterClass, DisplayTemplate,
    SkillTab, SkillTabTable, CODE_ALIASES, DISPLAY_TEMPLATES, PER_LEVEL_STATS, SKILL_TABS,
};
