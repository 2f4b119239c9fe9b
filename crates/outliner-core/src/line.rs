//! Geometric line reconstruction from positioned fragments.

use std::collections::BTreeMap;

use crate::fragment::TextFragment;

/// Fragments sharing a rounded vertical coordinate — the unit of heading
/// and TOC-entry classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// The baseline y of this line, rounded to the nearest 0.5 unit.
    pub y: f64,
    /// Constituent fragments, ordered by ascending x.
    pub fragments: Vec<&'a TextFragment>,
}

/// Group a page's fragments into logical lines.
///
/// Fragments whose baseline y rounds to the same half-unit value form one
/// line. Lines are returned top-to-bottom (descending y, page origin at
/// the bottom); fragments within a line are ordered left-to-right. The
/// result is a partition of the input: no fragment is dropped or
/// duplicated, and an empty page yields no lines.
pub fn reconstruct_lines(fragments: &[TextFragment]) -> Vec<Line<'_>> {
    // Keyed by half-units so the map never sees raw float keys.
    let mut groups: BTreeMap<i64, Vec<&TextFragment>> = BTreeMap::new();
    for fragment in fragments {
        let key = (fragment.y * 2.0).round() as i64;
        groups.entry(key).or_default().push(fragment);
    }

    groups
        .into_iter()
        .rev()
        .map(|(key, mut fragments)| {
            fragments.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
            Line {
                y: key as f64 / 2.0,
                fragments,
            }
        })
        .collect()
}
