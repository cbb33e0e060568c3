//! Display text -> property matching

use std::cmp::Ordering;

use regex::Regex;

use super::numeric::parse_value;
use super::template::{tokenize, Placeholder, Segment};
use super::{CodecError, PropertyCodec};
use crate::property::Property;
use crate::reference::{CharacterClass, DisplayTemplate};

/// Compiled reverse matcher for one template with placeholders
#[derive(Debug, Clone)]
pub(crate) struct ReversePattern {
    pub(crate) code: &'static str,
    regex: Regex,
    slots: Vec<Placeholder>,
    literal_chars: usize,
}

/// Result of compiling one template
pub(crate) enum CompiledTemplate {
    /// No placeholders; matched by exact (case-insensitive) text
    Fixed { code: &'static str, text: &'static str },
    Pattern(ReversePattern),
}

pub(crate) fn compile(template: &DisplayTemplate) -> Result<CompiledTemplate, CodecError> {
    let segments = tokenize(template.code, template.template)?;

    if segments.iter().all(|s| matches!(s, Segment::Literal(_))) {
        return Ok(CompiledTemplate::Fixed {
            code: template.code,
            text: template.template,
        });
    }

    let mut source = String::from("(?i)^");
    let mut slots = Vec::new();
    let mut literal_chars = 0;

    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                literal_chars += text.chars().count();
                let before_value = matches!(segments.get(i + 1), Some(Segment::Slot(Placeholder::Value)));
                match text.strip_suffix('+') {
                    // Negative values render without the plus sign
                    Some(head) if before_value => {
                        source.push_str(&regex::escape(head));
                        source.push_str(r"\+?");
                    }
                    _ => source.push_str(&regex::escape(text)),
                }
            }
            Segment::Slot(slot) => {
                source.push_str(slot.capture_pattern());
                slots.push(*slot);
            }
        }
    }
    source.push('$');

    let regex = Regex::new(&source).map_err(|source| CodecError::Pattern {
        code: template.code.to_string(),
        source,
    })?;

    Ok(CompiledTemplate::Pattern(ReversePattern {
        code: template.code,
        regex,
        slots,
        literal_chars,
    }))
}

impl ReversePattern {
    fn validates_skill_tab(&self) -> bool {
        self.slots.contains(&Placeholder::SkillTab)
    }

    /// Most specific first: more literal text, then skill-tab validation,
    /// then longer template source, then code.
    pub(crate) fn specificity_order(a: &Self, b: &Self) -> Ordering {
        b.literal_chars
            .cmp(&a.literal_chars)
            .then_with(|| b.validates_skill_tab().cmp(&a.validates_skill_tab()))
            .then_with(|| b.regex.as_str().len().cmp(&a.regex.as_str().len()))
            .then_with(|| a.code.cmp(b.code))
    }
}

/// Build the `(Sorceress Only)` style suffix matcher
pub(crate) fn class_suffix_regex() -> Result<Regex, CodecError> {
    let names: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.name()).collect();
    let source = format!(r"(?i)\s*\(({})(?:\s+only)?\)\s*$", names.join("|"));
    Regex::new(&source).map_err(|source| CodecError::Pattern {
        code: "class-suffix".to_string(),
        source,
    })
}

impl PropertyCodec {
    /// Split a trailing class restriction off captured text
    pub(crate) fn strip_class_suffix<'t>(&self, text: &'t str) -> (&'t str, Option<CharacterClass>) {
        match self.class_suffix.captures(text) {
            Some(caps) => {
                let start = caps.get(0).map_or(text.len(), |m| m.start());
                let class = caps.get(1).and_then(|m| CharacterClass::from_name(m.as_str()));
                (text[..start].trim(), class)
            }
            None => (text.trim(), None),
        }
    }

    /// Try one pattern against cleaned text
    pub(crate) fn match_pattern(&self, pattern: &ReversePattern, text: &str) -> Option<Property> {
        let caps = pattern.regex.captures(text)?;
        let mut prop = Property {
            code: pattern.code.to_string(),
            display_text: text.to_string(),
            ..Default::default()
        };

        // A slot used twice must capture the same number both times
        let mut seen_min: Option<i32> = None;
        let mut seen_max: Option<i32> = None;

        for (i, slot) in pattern.slots.iter().enumerate() {
            let Some(m) = caps.get(i + 1) else {
                continue;
            };
            let captured = m.as_str();
            match slot {
                Placeholder::Value => {
                    let (min, max) = parse_value(captured)?;
                    prop.min = min;
                    prop.max = max;
                }
                Placeholder::Min => {
                    let value = captured.parse().ok()?;
                    if seen_min.replace(value).is_some_and(|prev| prev != value) {
                        return None;
                    }
                    prop.min = value;
                }
                Placeholder::Max => {
                    let value = captured.parse().ok()?;
                    if seen_max.replace(value).is_some_and(|prev| prev != value) {
                        return None;
                    }
                    prop.max = value;
                }
                Placeholder::Param => {
                    let (name, _) = self.strip_class_suffix(captured);
                    if name.is_empty() {
                        return None;
                    }
                    prop.param = name.to_string();
                }
                Placeholder::SkillTab => {
                    let (name, class) = self.strip_class_suffix(captured);
                    let tab = self.skill_tabs.resolve(name, class)?;
                    prop.param = tab.to_string();
                }
            }
        }

        prop.update_has_range();
        Some(prop)
    }
}
