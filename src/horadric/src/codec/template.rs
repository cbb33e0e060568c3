//! Template tokenizer

use super::CodecError;

/// A `{name}` slot inside a display template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placeholder {
    Value,
    Min,
    Max,
    Param,
    SkillTab,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "value" => Some(Placeholder::Value),
            "min" => Some(Placeholder::Min),
            "max" => Some(Placeholder::Max),
            "param" => Some(Placeholder::Param),
            "skilltab" => Some(Placeholder::SkillTab),
            _ => None,
        }
    }

    /// Capture group matching this slot in display text
    pub(crate) fn capture_pattern(&self) -> &'static str {
        match self {
            Placeholder::Value => r"([+-]?(?:\d+(?:-\d+)?|\(\d+-\d+\)))",
            Placeholder::Min | Placeholder::Max => r"([+-]?\d+)",
            Placeholder::Param | Placeholder::SkillTab => r"(.+?)",
        }
    }
}

/// Piece of a tokenized template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Slot(Placeholder),
}

/// Split a template into literal text and placeholders
pub(crate) fn tokenize<'a>(code: &str, template: &'a str) -> Result<Vec<Segment<'a>>, CodecError> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| CodecError::UnterminatedPlaceholder {
                code: code.to_string(),
            })?;
        let name = &after[..close];
        let slot = Placeholder::from_name(name).ok_or_else(|| CodecError::UnknownPlaceholder {
            code: code.to_string(),
            name: name.to_string(),
        })?;
        segments.push(Segment::Slot(slot));
        rest = &after[close + 1..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed() {
        let segments = tokenize("res-fire", "Fire Resist +{value}%").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("Fire Resist +"),
                Segment::Slot(Placeholder::Value),
                Segment::Literal("%"),
            ]
        );
    }

    #[test]
    fn test_tokenize_adjacent_slots() {
        let segments = tokenize("x", "{min}{max}").unwrap();
        assert_eq!(
            segments,
            vec![Segment::Slot(Placeholder::Min), Segment::Slot(Placeholder::Max)]
        );
    }

    #[test]
    fn test_tokenize_plain_text() {
        let segments = tokenize("knock", "Knockback").unwrap();
        assert_eq!(segments, vec![Segment::Literal("Knockback")]);
    }

    #[test]
    fn test_tokenize_errors() {
        assert!(matches!(
            tokenize("bad", "+{value To Life"),
            Err(CodecError::UnterminatedPlaceholder { .. })
        ));
        assert!(matches!(
            tokenize("bad", "+{amount} To Life"),
            Err(CodecError::UnknownPlaceholder { name, .. }) if name == "amount"
        ));
    }
}
