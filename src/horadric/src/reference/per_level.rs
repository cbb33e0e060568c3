//! Stats that scale with character level
//!
//! Per-level codes store their magnitude in eighths of a point per level.
//! The stat text is what follows the numbers in item text, e.g.
//! `(0.5 Per Character Level) 0-49 To Strength (Based On Character Level)`.

/// Raw per-level values are stored in units of 1/8 per character level
pub const PER_LEVEL_DIVISOR: i32 = 8;

/// Per-level code -> stat text
pub static PER_LEVEL_STATS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "str/lvl" => "To Strength",
    "dex/lvl" => "To Dexterity",
    "vit/lvl" => "To Vitality",
    "enr/lvl" => "To Energy",
    "ac/lvl" => "To Defense",
    "ac%/lvl" => "% Enhanced Defense",
    "hp/lvl" => "To Life",
    "mana/lvl" => "To Mana",
    "att/lvl" => "To Attack Rating",
    "att%/lvl" => "% Bonus To Attack Rating",
    "dmg-max/lvl" => "To Maximum Damage",
    "dmg%/lvl" => "% Enhanced Maximum Damage",
    "res-fire/lvl" => "% Fire Resist",
    "res-cold/lvl" => "% Cold Resist",
    "res-ltng/lvl" => "% Lightning Resist",
    "res-pois/lvl" => "% Poison Resist",
    "abs-fire/lvl" => "Fire Absorb",
    "abs-cold/lvl" => "Cold Absorb",
    "abs-ltng/lvl" => "Lightning Absorb",
    "deadly/lvl" => "% Deadly Strike",
    "mag%/lvl" => "% Better Chance Of Getting Magic Items",
    "gold%/lvl" => "% Extra Gold From Monsters",
    "stam/lvl" => "Maximum Stamina",
};

/// Stat text for a per-level code
pub fn per_level_stat_text(code: &str) -> Option<&'static str> {
    PER_LEVEL_STATS.get(code).copied()
}
