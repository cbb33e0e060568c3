//! Shared types for the catalog database.

use serde::{Deserialize, Serialize};

/// What a stored property list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyOwner {
    Unique,
    SetItem,
    Runeword,
    Rune,
    BaseItem,
}

impl PropertyOwner {
    pub const ALL: &'static [PropertyOwner] = &[
        PropertyOwner::Unique,
        PropertyOwner::SetItem,
        PropertyOwner::Runeword,
        PropertyOwner::Rune,
        PropertyOwner::BaseItem,
    ];
}

impl std::fmt::Display for PropertyOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unique => write!(f, "unique"),
            Self::SetItem => write!(f, "set_item"),
            Self::Runeword => write!(f, "runeword"),
            Self::Rune => write!(f, "rune"),
            Self::BaseItem => write!(f, "base_item"),
        }
    }
}

impl std::str::FromStr for PropertyOwner {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unique" => Ok(Self::Unique),
            "set_item" => Ok(Self::SetItem),
            "runeword" => Ok(Self::Runeword),
            "rune" => Ok(Self::Rune),
            "base_item" => Ok(Self::BaseItem),
            _ => Err(ParseError::InvalidOwnerKind(s.to_string())),
        }
    }
}

/// A runeword/base pairing joined with base item details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRow {
    pub recipe_id: i64,
    pub base_item_id: i64,
    pub base_item_code: String,
    pub base_item_name: String,
    pub category: String,
    pub max_sockets: u32,
    pub required_sockets: u32,
}

/// Database statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub item_type_count: i64,
    pub base_item_count: i64,
    pub runeword_count: i64,
    pub property_count: i64,
    pub compat_count: i64,
    pub stat_count: i64,
}

/// Parse errors for string conversions
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid property owner: {0}")]
    InvalidOwnerKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_display_parse() {
        for owner in PropertyOwner::ALL {
            let parsed: PropertyOwner = owner.to_string().parse().unwrap();
            assert_eq!(parsed, *owner);
        }
        assert_eq!(PropertyOwner::SetItem.to_string(), "set_item");
    }

    #[test]
    fn test_owner_parse_rejects_unknown() {
        let err = "weapon".parse::<PropertyOwner>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid property owner: weapon");
    }

    #[test]
    fn test_owner_serde_matches_display() {
        let json = serde_json::to_string(&PropertyOwner::BaseItem).unwrap();
        assert_eq!(json, "\"base_item\"");
    }
}
