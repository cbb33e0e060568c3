//! Character classes and skill tabs
//!
//! Raw data refers to skill tabs by number (0-20, three per class). Tab names
//! repeat across classes, so the owning class is kept alongside the name.

use std::collections::HashMap;
use std::fmt;

/// Playable character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Amazon,
    Sorceress,
    Necromancer,
    Paladin,
    Barbarian,
    Druid,
    Assassin,
}

impl CharacterClass {
    /// All classes in skill tab order
    pub const ALL: &'static [CharacterClass] = &[
        CharacterClass::Amazon,
        CharacterClass::Sorceress,
        CharacterClass::Necromancer,
        CharacterClass::Paladin,
        CharacterClass::Barbarian,
        CharacterClass::Druid,
        CharacterClass::Assassin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Amazon => "Amazon",
            CharacterClass::Sorceress => "Sorceress",
            CharacterClass::Necromancer => "Necromancer",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Barbarian => "Barbarian",
            CharacterClass::Druid => "Druid",
            CharacterClass::Assassin => "Assassin",
        }
    }

    /// Case-insensitive lookup by class name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One skill tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTab {
    pub tab: u8,
    pub class: CharacterClass,
    pub name: &'static str,
}

impl SkillTab {
    /// Display form used in item text, e.g. `Fire Skills (Sorceress Only)`
    pub fn display_name(&self) -> String {
        format!("{} ({} Only)", self.name, self.class.name())
    }
}

/// All skill tabs in tab-number order
pub const SKILL_TABS: &[SkillTab] = &[
    SkillTab { tab: 0, class: CharacterClass::Amazon, name: "Bow And Crossbow Skills" },
    SkillTab { tab: 1, class: CharacterClass::Amazon, name: "Passive And Magic Skills" },
    SkillTab { tab: 2, class: CharacterClass::Amazon, name: "Javelin And Spear Skills" },
    SkillTab { tab: 3, class: CharacterClass::Sorceress, name: "Fire Skills" },
    SkillTab { tab: 4, class: CharacterClass::Sorceress, name: "Lightning Skills" },
    SkillTab { tab: 5, class: CharacterClass::Sorceress, name: "Cold Skills" },
    SkillTab { tab: 6, class: CharacterClass::Necromancer, name: "Curses" },
    SkillTab { tab: 7, class: CharacterClass::Necromancer, name: "Poison And Bone Skills" },
    SkillTab { tab: 8, class: CharacterClass::Necromancer, name: "Summoning Skills" },
    SkillTab { tab: 9, class: CharacterClass::Paladin, name: "Combat Skills" },
    SkillTab { tab: 10, class: CharacterClass::Paladin, name: "Offensive Auras" },
    SkillTab { tab: 11, class: CharacterClass::Paladin, name: "Defensive Auras" },
    SkillTab { tab: 12, class: CharacterClass::Barbarian, name: "Combat Skills" },
    SkillTab { tab: 13, class: CharacterClass::Barbarian, name: "Masteries" },
    SkillTab { tab: 14, class: CharacterClass::Barbarian, name: "Warcries" },
    SkillTab { tab: 15, class: CharacterClass::Druid, name: "Summoning Skills" },
    SkillTab { tab: 16, class: CharacterClass::Druid, name: "Shape Shifting Skills" },
    SkillTab { tab: 17, class: CharacterClass::Druid, name: "Elemental Skills" },
    SkillTab { tab: 18, class: CharacterClass::Assassin, name: "Traps" },
    SkillTab { tab: 19, class: CharacterClass::Assassin, name: "Shadow Disciplines" },
    SkillTab { tab: 20, class: CharacterClass::Assassin, name: "Martial Arts" },
];

/// Hand-curated spellings seen in scraped text, mapped to their tab
const TAB_NAME_VARIANTS: &[(&str, u8)] = &[
    ("bow skills", 0),
    ("bow and crossbow", 0),
    ("passive skills", 1),
    ("passive and magic", 1),
    ("javelin skills", 2),
    ("javelin and spear", 2),
    ("curse skills", 6),
    ("poison and bone", 7),
    ("poison & bone skills", 7),
    ("necromancer summoning skills", 8),
    ("paladin combat skills", 9),
    ("offensive aura skills", 10),
    ("defensive aura skills", 11),
    ("barbarian combat skills", 12),
    ("combat masteries", 13),
    ("war cries", 14),
    ("warcry skills", 14),
    ("druid summoning skills", 15),
    ("shapeshifting skills", 16),
    ("shape shifting", 16),
    ("elemental", 17),
    ("trap skills", 18),
    ("shadow discipline skills", 19),
    ("martial arts skills", 20),
];

/// Get a skill tab by number
pub fn skill_tab_by_number(tab: u8) -> Option<&'static SkillTab> {
    SKILL_TABS.iter().find(|t| t.tab == tab)
}

/// Skill tab lookup in both directions
///
/// Forward: tab number to tab. Inverse: case-insensitive name (or curated
/// variant) to candidate tab numbers, disambiguated by class when known.
#[derive(Debug, Clone)]
pub struct SkillTabTable {
    by_number: HashMap<u8, &'static SkillTab>,
    by_name: HashMap<String, Vec<u8>>,
}

impl SkillTabTable {
    /// Build the table from [`SKILL_TABS`] and the curated variants
    pub fn standard() -> Self {
        let mut by_number = HashMap::new();
        let mut by_name: HashMap<String, Vec<u8>> = HashMap::new();

        for tab in SKILL_TABS {
            by_number.insert(tab.tab, tab);
            by_name.entry(tab.name.to_lowercase()).or_default().push(tab.tab);
        }
        for (variant, tab) in TAB_NAME_VARIANTS {
            let numbers = by_name.entry((*variant).to_string()).or_default();
            if !numbers.contains(tab) {
                numbers.push(*tab);
            }
        }
        for numbers in by_name.values_mut() {
            numbers.sort_unstable();
        }

        Self { by_number, by_name }
    }

    /// Tab by number
    pub fn tab(&self, number: u8) -> Option<&'static SkillTab> {
        self.by_number.get(&number).copied()
    }

    /// Display name for a tab number, e.g. `Cold Skills (Sorceress Only)`
    pub fn display_name(&self, number: u8) -> Option<String> {
        self.tab(number).map(SkillTab::display_name)
    }

    /// Resolve a tab name to its number.
    ///
    /// With a class, only that class's tab matches. Without one, the lowest
    /// numbered tab with the name wins.
    pub fn resolve(&self, name: &str, class: Option<CharacterClass>) -> Option<u8> {
        let key = name.trim().to_lowercase();
        let candidates = self.by_name.get(&key)?;
        match class {
            Some(class) => candidates
                .iter()
                .copied()
                .find(|n| self.tab(*n).is_some_and(|t| t.class == class)),
            None => candidates.first().copied(),
        }
    }
}

impl Default for SkillTabTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_lookup() {
        assert_eq!(CharacterClass::from_name("sorceress"), Some(CharacterClass::Sorceress));
        assert_eq!(CharacterClass::from_name(" PALADIN "), Some(CharacterClass::Paladin));
        assert_eq!(CharacterClass::from_name("Warlock"), None);
    }

    #[test]
    fn test_tab_numbers_are_contiguous() {
        for (i, tab) in SKILL_TABS.iter().enumerate() {
            assert_eq!(tab.tab as usize, i);
            assert_eq!(tab.class, CharacterClass::ALL[i / 3]);
        }
    }

    #[test]
    fn test_display_name() {
        let table = SkillTabTable::standard();
        assert_eq!(
            table.display_name(3).as_deref(),
            Some("Fire Skills (Sorceress Only)")
        );
        assert_eq!(table.display_name(21), None);
    }

    #[test]
    fn test_resolve_case_insensitive() {
        let table = SkillTabTable::standard();
        assert_eq!(table.resolve("fire skills", None), Some(3));
        assert_eq!(table.resolve("WARCRIES", None), Some(14));
        assert_eq!(table.resolve("Teleport", None), None);
    }

    #[test]
    fn test_resolve_variants() {
        let table = SkillTabTable::standard();
        assert_eq!(table.resolve("War Cries", None), Some(14));
        assert_eq!(table.resolve("Shapeshifting Skills", None), Some(16));
        assert_eq!(table.resolve("Bow Skills", None), Some(0));
    }

    #[test]
    fn test_resolve_shared_name_by_class() {
        let table = SkillTabTable::standard();
        assert_eq!(table.resolve("Combat Skills", None), Some(9));
        assert_eq!(table.resolve("Combat Skills", Some(CharacterClass::Paladin)), Some(9));
        assert_eq!(table.resolve("Combat Skills", Some(CharacterClass::Barbarian)), Some(12));
        assert_eq!(table.resolve("Summoning Skills", Some(CharacterClass::Druid)), Some(15));
        assert_eq!(table.resolve("Combat Skills", Some(CharacterClass::Sorceress)), None);
    }
}
