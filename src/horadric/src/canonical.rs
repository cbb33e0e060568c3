//! Property list canonicalization

use crate::codec::PropertyCodec;
use crate::property::{canonical_code, Property};

/// Primary attribute codes collapsed into `all-stats`
const PRIMARY_ATTRIBUTES: [&str; 4] = ["str", "dex", "vit", "enr"];

/// Code of the synthetic combined attribute property
pub const ALL_STATS_CODE: &str = "all-stats";

/// Collapse `str`/`dex`/`vit`/`enr` into one `all-stats` property.
///
/// Only applies when each of the four appears exactly once and all share the
/// same min/max. The combined property takes the earliest of the four
/// positions; everything else keeps its relative order. Otherwise the input
/// is returned unchanged.
pub fn combine_all_attributes(props: &[Property], codec: &PropertyCodec) -> Vec<Property> {
    let mut positions: [Option<usize>; 4] = [None; 4];

    for (index, prop) in props.iter().enumerate() {
        let code = canonical_code(&prop.code);
        let Some(slot) = PRIMARY_ATTRIBUTES.iter().position(|c| *c == code) else {
            continue;
        };
        if positions[slot].is_some() {
            return props.to_vec();
        }
        positions[slot] = Some(index);
    }

    let Some(indices) = positions.into_iter().collect::<Option<Vec<usize>>>() else {
        return props.to_vec();
    };

    let first = &props[indices[0]];
    if indices
        .iter()
        .any(|&i| props[i].min != first.min || props[i].max != first.max)
    {
        return props.to_vec();
    }

    let earliest = indices.iter().copied().min().unwrap_or(0);
    let mut combined = Property::new(ALL_STATS_CODE, first.min, first.max);
    codec.enrich(&mut combined);

    let mut out = Vec::with_capacity(props.len() - 3);
    for (index, prop) in props.iter().enumerate() {
        if index == earliest {
            out.push(combined.clone());
        } else if !indices.contains(&index) {
            out.push(prop.clone());
        }
    }
    out
}
