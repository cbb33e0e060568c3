//! Reference data for item properties
//!
//! Hardcoded tables that drive the property codec: display templates, code
//! aliases, skill tabs with their owning classes, and the stats that scale
//! with character level. None of this data changes at runtime.

mod per_level;
mod skilltabs;
mod templates;

pub use per_level::{per_level_stat_text, PER_LEVEL_STATS, PER_LEVEL_DIVISOR};
pub use skilltabs::{skill_tab_by_number, CharacterClass, SkillTab, SkillTabTable, SKILL_TABS};
pub use templates::{template_for, DisplayTemplate, CODE_ALIASES, DISPLAY_TEMPLATES};
