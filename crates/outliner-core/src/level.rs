//! Outline depth assignment for merged heading candidates.

use crate::heading::HeadingCandidate;
use crate::patterns::PATTERNS;

/// Maximum outline depth. Deeper ranks and numbering all map to this.
pub const MAX_LEVEL: usize = 4;

/// Assign an outline level to each candidate, in input order.
///
/// The distinct rounded heights across all candidates are sorted
/// descending and ranked 1..N (capped at [`MAX_LEVEL`]); a candidate's
/// base level is the rank of its height. Decimal numbering in the text
/// can deepen the level — "d.d" to at least 2, "d.d.d" to at least 3 —
/// but never flatten it.
pub fn assign_levels(candidates: &[HeadingCandidate]) -> Vec<usize> {
    let mut heights: Vec<f64> = Vec::new();
    for candidate in candidates {
        if !heights.contains(&candidate.height) {
            heights.push(candidate.height);
        }
    }
    heights.sort_by(|a, b| b.partial_cmp(a).unwrap());

    candidates
        .iter()
        .map(|candidate| {
            let rank = heights
                .iter()
                .position(|h| *h == candidate.height)
                .expect("candidate height is present in the height set")
                + 1;
            let mut level = rank.min(MAX_LEVEL);
            if PATTERNS.sub_sub_number.is_match(&candidate.text) {
                level = level.max(3);
            } else if PATTERNS.sub_number.is_match(&candidate.text) {
                level = level.max(2);
            }
            level.min(MAX_LEVEL)
        })
        .collect()
}
