//! Per-character-level stat text

use regex::Regex;

use super::CodecError;
use crate::property::Property;
use crate::reference::{PER_LEVEL_DIVISOR, PER_LEVEL_STATS};

/// Highest character level, used for the upper bound of the rendered range
const MAX_CHARACTER_LEVEL: i32 = 99;

/// Render a per-level stat from its raw (eighths) value
pub(crate) fn render(raw: i32, stat_text: &str) -> String {
    let per_level = f64::from(raw) / f64::from(PER_LEVEL_DIVISOR);
    let low = raw.div_euclid(PER_LEVEL_DIVISOR);
    let high = (i64::from(raw) * i64::from(MAX_CHARACTER_LEVEL)).div_euclid(i64::from(PER_LEVEL_DIVISOR));
    let sep = if stat_text.starts_with('%') { "" } else { " " };
    format!(
        "({} Per Character Level) {}-{}{}{} (Based On Character Level)",
        per_level, low, high, sep, stat_text
    )
}

/// Matcher for the two per-level text shapes
#[derive(Debug, Clone)]
pub(crate) struct PerLevelMatcher {
    scaled: Regex,
    simple: Regex,
}

impl PerLevelMatcher {
    pub(crate) fn new() -> Result<Self, CodecError> {
        let compile = |source: &str| {
            Regex::new(source).map_err(|source| CodecError::Pattern {
                code: "per-level".to_string(),
                source,
            })
        };
        Ok(Self {
            scaled: compile(
                r"(?i)^\(\s*\+?(-?\d+(?:\.\d+)?)\s+per\s+character\s+level\s*\)\s*\+?(-?\d+)-(-?\d+)\s*(.+?)\s*\(based\s+on\s+character\s+level\)$",
            )?,
            simple: compile(r"(?i)^([+-]?\d+)\s*(.+?)\s*\(based\s+on\s+character\s+level\)$")?,
        })
    }

    /// Recognise per-level text.
    ///
    /// The scaled form recovers the raw eighths value; the simple form keeps
    /// the literal number.
    pub(crate) fn match_text(&self, text: &str) -> Option<Property> {
        if let Some(caps) = self.scaled.captures(text) {
            let per_level: f64 = caps.get(1)?.as_str().parse().ok()?;
            caps.get(2)?.as_str().parse::<i32>().ok()?;
            caps.get(3)?.as_str().parse::<i32>().ok()?;
            let code = code_for_stat(caps.get(4)?.as_str())?;
            let raw = (per_level * f64::from(PER_LEVEL_DIVISOR)).round();
            if !raw.is_finite() || raw < f64::from(i32::MIN) || raw > f64::from(i32::MAX) {
                return None;
            }
            return Some(per_level_property(code, raw as i32, text));
        }

        let (code, value) = self.match_simple(text)?;
        Some(per_level_property(code, value, text))
    }

    fn match_simple(&self, text: &str) -> Option<(&'static str, i32)> {
        let caps = self.simple.captures(text)?;
        let value: i32 = caps.get(1)?.as_str().parse().ok()?;
        let code = code_for_stat(caps.get(2)?.as_str())?;
        Some((code, value))
    }

    /// Whether `text` is the simple form of `code` carrying `value`.
    ///
    /// The simple form stores the literal number rather than eighths, so it
    /// cannot be rendered back through [`render`].
    pub(crate) fn is_simple_form(&self, text: &str, code: &str, value: i32) -> bool {
        !text.is_empty() && self.match_simple(text) == Some((code, value))
    }
}

fn per_level_property(code: &str, value: i32, text: &str) -> Property {
    Property {
        code: code.to_string(),
        min: value,
        max: value,
        display_text: text.to_string(),
        ..Default::default()
    }
}

fn code_for_stat(stat_text: &str) -> Option<&'static str> {
    let stat_text = stat_text.trim();
    PER_LEVEL_STATS
        .entries()
        .find(|(_, text)| text.eq_ignore_ascii_case(stat_text))
        .map(|(code, _)| *code)
}
