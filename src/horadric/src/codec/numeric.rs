//! Value text encoding
//!
//! - `N` single value
//! - `a-b` range, smaller bound first
//! - `-(a-b)` range with both bounds negative, smaller magnitude first

/// Render a min/max pair the way `{value}` shows it
pub(crate) fn format_value(min: i32, max: i32) -> String {
    if min == max {
        return min.to_string();
    }
    let (lo, hi) = ordered(min, max);
    if lo < 0 && hi < 0 {
        format!("-({}-{})", hi.unsigned_abs(), lo.unsigned_abs())
    } else {
        format!("{}-{}", lo, hi)
    }
}

/// Render a min/max pair for the unknown-code fallback
pub(crate) fn format_plain_range(min: i32, max: i32) -> String {
    if min == max {
        min.to_string()
    } else {
        let (lo, hi) = ordered(min, max);
        format!("{}-{}", lo, hi)
    }
}

/// Parse `{value}` text back into (min, max).
///
/// Returns `None` when the text is malformed or a bound does not fit in `i32`.
pub(crate) fn parse_value(text: &str) -> Option<(i32, i32)> {
    let s = text.trim();
    let s = s.strip_prefix('+').unwrap_or(s);

    if let Some(inner) = s.strip_prefix("-(").and_then(|r| r.strip_suffix(')')) {
        let (a, b) = split_range(inner)?;
        if a < 0 || b < 0 {
            return None;
        }
        let (lo, hi) = ordered(a, b);
        return Some((-hi, -lo));
    }

    if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        return split_range(inner);
    }

    if let Some(range) = split_range(s) {
        return Some(range);
    }

    s.parse::<i32>().ok().map(|v| (v, v))
}

/// Split `a-b` where `a` may carry its own minus sign
fn split_range(s: &str) -> Option<(i32, i32)> {
    let start = usize::from(s.starts_with('-'));
    let pos = s[start..].find('-')? + start;
    let a = s[..pos].parse::<i32>().ok()?;
    let b = s[pos + 1..].parse::<i32>().ok()?;
    Some((a, b))
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
