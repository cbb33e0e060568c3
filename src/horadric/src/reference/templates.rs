//! Display templates for property codes
//!
//! Placeholders: `{value}`, `{min}`, `{max}`, `{param}`, `{skilltab}`.
//! A `+` directly before `{value}` is dropped when the value is negative.

use crate::property::canonical_code;

/// Format string for one property code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTemplate {
    pub code: &'static str,
    pub template: &'static str,
}

impl DisplayTemplate {
    pub const fn new(code: &'static str, template: &'static str) -> Self {
        Self { code, template }
    }
}

/// All display templates, one per canonical code
pub const DISPLAY_TEMPLATES: &[DisplayTemplate] = &[
    // ========================================================================
    // Defense
    // ========================================================================
    DisplayTemplate::new("ac", "+{value} Defense"),
    DisplayTemplate::new("ac%", "+{value}% Enhanced Defense"),
    DisplayTemplate::new("ac-miss", "+{value} Defense Vs. Missile"),
    DisplayTemplate::new("ac-hth", "+{value} Defense Vs. Melee"),
    DisplayTemplate::new("red-dmg", "Damage Reduced By {value}"),
    DisplayTemplate::new("red-dmg%", "Damage Reduced By {value}%"),
    DisplayTemplate::new("red-mag", "Magic Damage Reduced By {value}"),
    DisplayTemplate::new("block", "{value}% Increased Chance Of Blocking"),
    DisplayTemplate::new("thorns", "Attacker Takes Damage Of {value}"),
    // ========================================================================
    // Life, mana, stamina
    // ========================================================================
    DisplayTemplate::new("hp", "+{value} To Life"),
    DisplayTemplate::new("hp%", "Increase Maximum Life {value}%"),
    DisplayTemplate::new("mana", "+{value} To Mana"),
    DisplayTemplate::new("mana%", "Increase Maximum Mana {value}%"),
    DisplayTemplate::new("regen", "Replenish Life +{value}"),
    DisplayTemplate::new("regen-mana", "Regenerate Mana {value}%"),
    DisplayTemplate::new("stam", "+{value} Maximum Stamina"),
    DisplayTemplate::new("stamdrain", "{value}% Slower Stamina Drain"),
    DisplayTemplate::new("regen-stam", "Heal Stamina Plus {value}%"),
    DisplayTemplate::new("heal-kill", "+{value} Life After Each Kill"),
    DisplayTemplate::new("mana-kill", "+{value} To Mana After Each Kill"),
    DisplayTemplate::new("dmg-to-mana", "{value}% Damage Taken Goes To Mana"),
    DisplayTemplate::new("lifesteal", "{value}% Life Stolen Per Hit"),
    DisplayTemplate::new("manasteal", "{value}% Mana Stolen Per Hit"),
    // ========================================================================
    // Attributes
    // ========================================================================
    DisplayTemplate::new("str", "+{value} To Strength"),
    DisplayTemplate::new("dex", "+{value} To Dexterity"),
    DisplayTemplate::new("vit", "+{value} To Vitality"),
    DisplayTemplate::new("enr", "+{value} To Energy"),
    DisplayTemplate::new("all-stats", "+{value} To All Attributes"),
    // ========================================================================
    // Resistances and absorbs
    // ========================================================================
    DisplayTemplate::new("res-fire", "Fire Resist +{value}%"),
    DisplayTemplate::new("res-cold", "Cold Resist +{value}%"),
    DisplayTemplate::new("res-ltng", "Lightning Resist +{value}%"),
    DisplayTemplate::new("res-pois", "Poison Resist +{value}%"),
    DisplayTemplate::new("res-mag", "Magic Resist +{value}%"),
    DisplayTemplate::new("res-all", "All Resistances +{value}"),
    DisplayTemplate::new("res-fire-max", "+{value}% To Maximum Fire Resist"),
    DisplayTemplate::new("res-cold-max", "+{value}% To Maximum Cold Resist"),
    DisplayTemplate::new("res-ltng-max", "+{value}% To Maximum Lightning Resist"),
    DisplayTemplate::new("res-pois-max", "+{value}% To Maximum Poison Resist"),
    DisplayTemplate::new("res-all-max", "+{value}% To All Maximum Resistances"),
    DisplayTemplate::new("abs-fire%", "Fire Absorb {value}%"),
    DisplayTemplate::new("abs-cold%", "Cold Absorb {value}%"),
    DisplayTemplate::new("abs-ltng%", "Lightning Absorb {value}%"),
    DisplayTemplate::new("abs-fire", "+{value} Fire Absorb"),
    DisplayTemplate::new("abs-cold", "+{value} Cold Absorb"),
    DisplayTemplate::new("abs-ltng", "+{value} Lightning Absorb"),
    DisplayTemplate::new("abs-mag", "+{value} Magic Absorb"),
    DisplayTemplate::new("pois-len", "Poison Length Reduced By {value}%"),
    DisplayTemplate::new("half-freeze", "Half Freeze Duration"),
    DisplayTemplate::new("nofreeze", "Cannot Be Frozen"),
    // ========================================================================
    // Damage and attack rating
    // ========================================================================
    DisplayTemplate::new("dmg%", "+{value}% Enhanced Damage"),
    DisplayTemplate::new("dmg-min", "+{value} To Minimum Damage"),
    DisplayTemplate::new("dmg-max", "+{value} To Maximum Damage"),
    DisplayTemplate::new("dmg-norm", "Adds {min}-{max} Damage"),
    DisplayTemplate::new("dmg-fire", "Adds {min}-{max} Fire Damage"),
    DisplayTemplate::new("dmg-ltng", "Adds {min}-{max} Lightning Damage"),
    DisplayTemplate::new("dmg-cold", "Adds {min}-{max} Cold Damage"),
    DisplayTemplate::new("dmg-mag", "Adds {min}-{max} Magic Damage"),
    DisplayTemplate::new("dmg-pois", "Adds {min}-{max} Poison Damage"),
    DisplayTemplate::new("dmg-undead", "+{value}% Damage To Undead"),
    DisplayTemplate::new("dmg-demon", "+{value}% Damage To Demons"),
    DisplayTemplate::new("kick", "+{value} Kick Damage"),
    DisplayTemplate::new("att", "+{value} To Attack Rating"),
    DisplayTemplate::new("att%", "{value}% Bonus To Attack Rating"),
    DisplayTemplate::new("att-undead", "+{value} To Attack Rating Against Undead"),
    DisplayTemplate::new("att-demon", "+{value} To Attack Rating Against Demons"),
    DisplayTemplate::new("crush", "{value}% Chance Of Crushing Blow"),
    DisplayTemplate::new("deadly", "{value}% Deadly Strike"),
    DisplayTemplate::new("openwounds", "{value}% Chance Of Open Wounds"),
    DisplayTemplate::new("pierce", "{value}% Chance To Pierce"),
    DisplayTemplate::new("reduce-ac", "{value}% Target Defense"),
    DisplayTemplate::new("ignore-ac", "Ignore Target's Defense"),
    DisplayTemplate::new("noheal", "Prevent Monster Heal"),
    DisplayTemplate::new("knock", "Knockback"),
    DisplayTemplate::new("slow", "Slows Target By {value}%"),
    DisplayTemplate::new("freeze", "Freezes Target +{value}"),
    DisplayTemplate::new("howl", "Hit Causes Monster To Flee {value}%"),
    DisplayTemplate::new("stupidity", "Hit Blinds Target +{value}"),
    DisplayTemplate::new("rip", "Slain Monsters Rest In Peace"),
    // ========================================================================
    // Speed
    // ========================================================================
    DisplayTemplate::new("swing2", "+{value}% Increased Attack Speed"),
    DisplayTemplate::new("cast2", "+{value}% Faster Cast Rate"),
    DisplayTemplate::new("balance2", "+{value}% Faster Hit Recovery"),
    DisplayTemplate::new("block2", "+{value}% Faster Block Rate"),
    DisplayTemplate::new("move2", "+{value}% Faster Run/Walk"),
    // ========================================================================
    // Utility
    // ========================================================================
    DisplayTemplate::new("gold%", "{value}% Extra Gold From Monsters"),
    DisplayTemplate::new("mag%", "{value}% Better Chance Of Getting Magic Items"),
    DisplayTemplate::new("light", "+{value} To Light Radius"),
    DisplayTemplate::new("addxp", "+{value}% To Experience Gained"),
    DisplayTemplate::new("cheap", "Reduces All Vendor Prices {value}%"),
    DisplayTemplate::new("ease", "Requirements {value}%"),
    DisplayTemplate::new("dur%", "Increase Maximum Durability {value}%"),
    DisplayTemplate::new("rep-dur", "Repairs 1 Durability In {value} Seconds"),
    DisplayTemplate::new("sock", "Socketed ({value})"),
    DisplayTemplate::new("indestruct", "Indestructible"),
    DisplayTemplate::new("ethereal", "Ethereal (Cannot Be Repaired)"),
    // ========================================================================
    // Skills
    // ========================================================================
    DisplayTemplate::new("allskills", "+{value} To All Skills"),
    DisplayTemplate::new("ama", "+{value} To Amazon Skill Levels"),
    DisplayTemplate::new("sor", "+{value} To Sorceress Skill Levels"),
    DisplayTemplate::new("nec", "+{value} To Necromancer Skill Levels"),
    DisplayTemplate::new("pal", "+{value} To Paladin Skill Levels"),
    DisplayTemplate::new("bar", "+{value} To Barbarian Skill Levels"),
    DisplayTemplate::new("dru", "+{value} To Druid Skill Levels"),
    DisplayTemplate::new("ass", "+{value} To Assassin Skill Levels"),
    DisplayTemplate::new("fireskill", "+{value} To Fire Skills"),
    DisplayTemplate::new("skilltab", "+{value} To {skilltab}"),
    DisplayTemplate::new("skill", "+{value} To {param}"),
    DisplayTemplate::new("oskill", "+{value} To {param} (All Classes)"),
    DisplayTemplate::new("aura", "Level {value} {param} Aura When Equipped"),
    DisplayTemplate::new("charged", "Level {max} {param} ({min}/{min} Charges)"),
    DisplayTemplate::new("hit-skill", "{min}% Chance To Cast Level {max} {param} On Striking"),
    DisplayTemplate::new("att-skill", "{min}% Chance To Cast Level {max} {param} On Attack"),
    DisplayTemplate::new("gethit-skill", "{min}% Chance To Cast Level {max} {param} When Struck"),
    DisplayTemplate::new(
        "kill-skill",
        "{min}% Chance To Cast Level {max} {param} When You Kill An Enemy",
    ),
    DisplayTemplate::new("death-skill", "{min}% Chance To Cast Level {max} {param} When You Die"),
    DisplayTemplate::new(
        "levelup-skill",
        "{min}% Chance To Cast Level {max} {param} When You Level-Up",
    ),
    // ========================================================================
    // Elemental skill damage and resistance pierce
    // ========================================================================
    DisplayTemplate::new("extra-fire", "+{value}% To Fire Skill Damage"),
    DisplayTemplate::new("extra-cold", "+{value}% To Cold Skill Damage"),
    DisplayTemplate::new("extra-ltng", "+{value}% To Lightning Skill Damage"),
    DisplayTemplate::new("extra-pois", "+{value}% To Poison Skill Damage"),
    DisplayTemplate::new("pierce-fire", "{value}% To Enemy Fire Resistance"),
    DisplayTemplate::new("pierce-cold", "{value}% To Enemy Cold Resistance"),
    DisplayTemplate::new("pierce-ltng", "{value}% To Enemy Lightning Resistance"),
    DisplayTemplate::new("pierce-pois", "{value}% To Enemy Poison Resistance"),
    // ========================================================================
    // Sunder (immunity break) flags
    // ========================================================================
    DisplayTemplate::new("pierce-immunity-cold", "Monster Cold Immunity Is Sundered"),
    DisplayTemplate::new("pierce-immunity-fire", "Monster Fire Immunity Is Sundered"),
    DisplayTemplate::new("pierce-immunity-light", "Monster Lightning Immunity Is Sundered"),
    DisplayTemplate::new("pierce-immunity-poison", "Monster Poison Immunity Is Sundered"),
    DisplayTemplate::new("pierce-immunity-damage", "Monster Physical Immunity Is Sundered"),
    DisplayTemplate::new("pierce-immunity-magic", "Monster Magic Immunity Is Sundered"),
];

/// Alternate codes (stat-cost names seen in raw data) and the code they stand for
pub const CODE_ALIASES: &[(&str, &str)] = &[
    ("strength", "str"),
    ("dexterity", "dex"),
    ("vitality", "vit"),
    ("energy", "enr"),
    ("maxhp", "hp"),
    ("maxmana", "mana"),
    ("armorclass", "ac"),
    ("fireresist", "res-fire"),
    ("coldresist", "res-cold"),
    ("lightresist", "res-ltng"),
    ("poisonresist", "res-pois"),
    ("magicresist", "res-mag"),
    ("item_fastercastrate", "cast2"),
    ("item_fasterattackrate", "swing2"),
    ("item_fastergethitrate", "balance2"),
    ("item_fasterblockrate", "block2"),
    ("item_fastermovevelocity", "move2"),
    ("item_magicbonus", "mag%"),
    ("item_goldbonus", "gold%"),
    ("item_allskills", "allskills"),
    ("item_crushingblow", "crush"),
    ("item_deadlystrike", "deadly"),
    ("item_openwounds", "openwounds"),
    ("lifedrainmindam", "lifesteal"),
    ("manadrainmindam", "manasteal"),
];

/// Look up the template for a code (aliases resolved)
pub fn template_for(code: &str) -> Option<&'static DisplayTemplate> {
    let code = canonical_code(code);
    DISPLAY_TEMPLATES.iter().find(|t| t.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_lookup() {
        assert_eq!(
            template_for("res-fire").map(|t| t.template),
            Some("Fire Resist +{value}%")
        );
        assert_eq!(
            template_for("fireresist").map(|t| t.template),
            Some("Fire Resist +{value}%")
        );
        assert!(template_for("no-such-code").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut seen = HashSet::new();
        for t in DISPLAY_TEMPLATES {
            assert!(seen.insert(t.code), "duplicate code {}", t.code);
        }
    }

    #[test]
    fn test_template_text_is_unique() {
        let mut seen = HashSet::new();
        for t in DISPLAY_TEMPLATES {
            assert!(
                seen.insert(t.template.to_lowercase()),
                "duplicate template {:?}",
                t.template
            );
        }
    }

    #[test]
    fn test_aliases_point_at_templates() {
        for (alias, canonical) in CODE_ALIASES {
            assert!(template_for(alias).is_some(), "alias {alias} has no template");
            assert!(
                DISPLAY_TEMPLATES.iter().all(|t| t.code != *alias),
                "alias {alias} shadows a canonical code"
            );
            assert_ne!(alias, canonical);
        }
    }
}
