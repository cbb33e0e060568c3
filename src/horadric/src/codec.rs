//! Property codec
//!
//! Two-way translation between structured properties and display text.
//!
//! Forward rendering fills a code's template. Reverse parsing tries, in
//! order: the per-level matcher, exact fixed texts, then every template
//! pattern sorted most specific first. Text nothing recognises becomes a
//! `raw` property carrying the original text.

mod forward;
mod numeric;
mod per_level;
mod reverse;
mod template;

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::property::Property;
use crate::reference::{DisplayTemplate, SkillTabTable, DISPLAY_TEMPLATES, PER_LEVEL_STATS};

use per_level::PerLevelMatcher;
use reverse::{class_suffix_regex, compile, CompiledTemplate, ReversePattern};

/// Errors raised while building a codec from templates
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("template for {code} has an unterminated placeholder")]
    UnterminatedPlaceholder { code: String },

    #[error("template for {code} uses unknown placeholder {{{name}}}")]
    UnknownPlaceholder { code: String, name: String },

    #[error("duplicate template for code {0}")]
    DuplicateCode(String),

    #[error("fixed text {text:?} is shared by {first} and {second}")]
    DuplicateFixedText {
        text: String,
        first: String,
        second: String,
    },

    #[error("pattern for {code} failed to compile: {source}")]
    Pattern {
        code: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled template set with skill tab lookup
///
/// Immutable once built, so one codec can be shared across threads.
#[derive(Debug, Clone)]
pub struct PropertyCodec {
    templates: HashMap<&'static str, &'static str>,
    skill_tabs: SkillTabTable,
    fixed: HashMap<String, &'static str>,
    patterns: Vec<ReversePattern>,
    per_level: PerLevelMatcher,
    class_suffix: Regex,
}

impl PropertyCodec {
    /// Build a codec from a template table
    pub fn new(templates: &'static [DisplayTemplate], skill_tabs: SkillTabTable) -> Result<Self, CodecError> {
        let mut by_code = HashMap::with_capacity(templates.len());
        let mut fixed: HashMap<String, &'static str> = HashMap::new();
        let mut patterns = Vec::new();

        for template in templates {
            if by_code.insert(template.code, template.template).is_some() {
                return Err(CodecError::DuplicateCode(template.code.to_string()));
            }
            match compile(template)? {
                CompiledTemplate::Fixed { code, text } => {
                    if let Some(first) = fixed.insert(text.to_lowercase(), code) {
                        return Err(CodecError::DuplicateFixedText {
                            text: text.to_string(),
                            first: first.to_string(),
                            second: code.to_string(),
                        });
                    }
                }
                CompiledTemplate::Pattern(pattern) => patterns.push(pattern),
            }
        }
        patterns.sort_by(ReversePattern::specificity_order);

        tracing::debug!(
            templates = templates.len(),
            fixed = fixed.len(),
            patterns = patterns.len(),
            "Built property codec"
        );

        Ok(Self {
            templates: by_code,
            skill_tabs,
            fixed,
            patterns,
            per_level: PerLevelMatcher::new()?,
            class_suffix: class_suffix_regex()?,
        })
    }

    /// Codec over the built-in templates and skill tabs
    pub fn standard() -> Result<Self, CodecError> {
        Self::new(DISPLAY_TEMPLATES, SkillTabTable::standard())
    }

    /// Render one property as display text
    pub fn translate(&self, prop: &Property) -> String {
        self.render(prop)
    }

    /// Render a property list, dropping repeated lines but keeping first-seen order
    pub fn translate_all(&self, props: &[Property]) -> Vec<String> {
        let mut seen = HashSet::new();
        props
            .iter()
            .map(|p| self.render(p))
            .filter(|line| seen.insert(line.clone()))
            .collect()
    }

    /// Fill in the derived fields (`display_text`, `has_range`)
    pub fn enrich(&self, prop: &mut Property) {
        prop.display_text = self.render(prop);
        prop.update_has_range();
    }

    /// Recover a property from one line of display text.
    ///
    /// Never fails: unrecognised text comes back as a `raw` property.
    pub fn reverse_translate(&self, text: &str) -> Property {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return Property::raw(text);
        }

        if let Some(prop) = self.per_level.match_text(&cleaned) {
            return prop;
        }

        if let Some(code) = self.fixed.get(&cleaned.to_lowercase()) {
            return Property {
                code: (*code).to_string(),
                display_text: cleaned,
                ..Default::default()
            };
        }

        for pattern in &self.patterns {
            if let Some(prop) = self.match_pattern(pattern, &cleaned) {
                return prop;
            }
        }

        tracing::trace!(text = %cleaned, "No template matched");
        Property::raw(text)
    }

    /// Template text for a code (aliases are not resolved here)
    pub fn template(&self, code: &str) -> Option<&'static str> {
        self.templates.get(code).copied()
    }

    /// Skill tab table used for `{skilltab}`
    pub fn skill_tabs(&self) -> &SkillTabTable {
        &self.skill_tabs
    }

    /// Every code this codec can render without the fallback
    pub fn known_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied().chain(PER_LEVEL_STATS.keys().copied())
    }

    /// Pattern codes in the order reverse parsing tries them
    pub fn pattern_order(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.code)
    }

    /// Codes matched by exact text
    pub fn fixed_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fixed.values().copied()
    }
}

/// Trim and collapse runs of whitespace
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
