//! Item property (affix) model
//!
//! A property is one modifier instance on an item: a stat code, an optional
//! parameter (skill name, skill tab number, ...) and a numeric min/max pair.

use serde::{Deserialize, Serialize};

use crate::reference::CODE_ALIASES;

/// Code given to text that no template recognised
pub const RAW_CODE: &str = "raw";

/// Codes whose min/max fields never describe a rolled range.
///
/// - Skill procs and charges: min is the chance (or charge count), max is the skill level
/// - Fixed damage adds: min/max are the damage band itself
/// - Sunder flags: min/max carry no meaning
static FIXED_VALUE_CODES: phf::Set<&'static str> = phf::phf_set! {
    "hit-skill",
    "att-skill",
    "gethit-skill",
    "kill-skill",
    "death-skill",
    "levelup-skill",
    "charged",
    "dmg-norm",
    "dmg-fire",
    "dmg-ltng",
    "dmg-cold",
    "dmg-mag",
    "dmg-pois",
    "pierce-immunity-cold",
    "pierce-immunity-fire",
    "pierce-immunity-light",
    "pierce-immunity-poison",
    "pierce-immunity-damage",
    "pierce-immunity-magic",
};

/// Resolve an alias code (e.g. `fireresist`) to its canonical code (`res-fire`).
///
/// Codes that are not aliases are returned unchanged.
pub fn canonical_code(code: &str) -> &str {
    CODE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(code)
}

/// Whether a code belongs to the fixed-value set (aliases resolved)
pub fn is_fixed_value_code(code: &str) -> bool {
    FIXED_VALUE_CODES.contains(canonical_code(code))
}

/// Iterate the fixed-value codes
pub fn fixed_value_codes() -> impl Iterator<Item = &'static str> {
    FIXED_VALUE_CODES.iter().copied()
}

/// One affix on an item
///
/// Wire shape: `{code, param?, min, max, displayText?, hasRange?}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param: String,
    #[serde(default)]
    pub min: i32,
    #[serde(default)]
    pub max: i32,
    /// Derived: rendered text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_text: String,
    /// Derived: whether min/max describe a rolled range
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_range: bool,
}

impl Property {
    /// Create a property without a parameter
    pub fn new(code: impl Into<String>, min: i32, max: i32) -> Self {
        Self {
            code: code.into(),
            min,
            max,
            ..Default::default()
        }
    }

    /// Create a property carrying a parameter (skill name, tab number, ...)
    pub fn with_param(code: impl Into<String>, param: impl Into<String>, min: i32, max: i32) -> Self {
        Self {
            code: code.into(),
            param: param.into(),
            min,
            max,
            ..Default::default()
        }
    }

    /// Create an unrecognised-text property
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            code: RAW_CODE.to_string(),
            display_text: text.into(),
            ..Default::default()
        }
    }

    /// Whether this property is unrecognised text
    pub fn is_raw(&self) -> bool {
        self.code == RAW_CODE
    }

    /// Compute the range flag from the code and the current min/max
    pub fn compute_has_range(&self) -> bool {
        self.min != self.max && !is_fixed_value_code(&self.code)
    }

    /// Refresh `has_range` from the current fields
    pub fn update_has_range(&mut self) {
        self.has_range = self.compute_has_range();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_range_for_rolled_stat() {
        assert!(Property::new("str", 10, 20).compute_has_range());
        assert!(!Property::new("str", 10, 10).compute_has_range());
    }

    #[test]
    fn test_fixed_value_codes_never_report_range() {
        for code in fixed_value_codes() {
            let prop = Property::new(code, 5, 17);
            assert!(!prop.compute_has_range(), "{code} reported a range");
        }
    }

    #[test]
    fn test_fixed_value_set_is_exact() {
        assert_eq!(fixed_value_codes().count(), 19);
        assert!(is_fixed_value_code("hit-skill"));
        assert!(is_fixed_value_code("dmg-fire"));
        assert!(is_fixed_value_code("pierce-immunity-cold"));
        assert!(!is_fixed_value_code("dmg%"));
        assert!(!is_fixed_value_code("dmg-min"));
        assert!(!is_fixed_value_code("aura"));
    }

    #[test]
    fn test_canonical_code() {
        assert_eq!(canonical_code("fireresist"), "res-fire");
        assert_eq!(canonical_code("strength"), "str");
        assert_eq!(canonical_code("res-fire"), "res-fire");
        assert_eq!(canonical_code("made-up"), "made-up");
    }

    #[test]
    fn test_wire_shape_omits_empty_fields() {
        let prop = Property::new("res-fire", 30, 30);
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json, serde_json::json!({"code": "res-fire", "min": 30, "max": 30}));

        let mut ranged = Property::with_param("skill", "Teleport", 1, 3);
        ranged.display_text = "+1-3 To Teleport".to_string();
        ranged.update_has_range();
        let json = serde_json::to_value(&ranged).unwrap();
        assert_eq!(json["param"], "Teleport");
        assert_eq!(json["displayText"], "+1-3 To Teleport");
        assert_eq!(json["hasRange"], true);
    }

    #[test]
    fn test_wire_shape_deserialize_minimal() {
        let prop: Property = serde_json::from_str(r#"{"code":"ac","min":5,"max":10}"#).unwrap();
        assert_eq!(prop, Property::new("ac", 5, 10));
    }

    #[test]
    fn test_raw_property() {
        let prop = Property::raw("Some odd text");
        assert!(prop.is_raw());
        assert_eq!(prop.display_text, "Some odd text");
    }
}
