//! Dominant body-height estimation.

use crate::fragment::PageContent;

/// Maximum number of pages sampled when estimating the body height, to
/// bound cost on very large documents.
pub const BODY_SAMPLE_PAGES: usize = 100;

/// Estimate the dominant font height across a sample of pages.
///
/// For every fragment, the character count is accumulated per rounded
/// height bucket; the winning bucket is the one with the highest total
/// character count (mode by character volume, not by line count). This
/// favors the height used for the bulk of running text over headings that
/// are individually long but infrequent.
///
/// Buckets are kept in first-encounter order and compared with a strict
/// greater-than, so when two buckets tie, the first one to reach the
/// maximum wins. Returns `None` when the sample contains no characters.
pub fn estimate_body_height(pages: &[&PageContent]) -> Option<f64> {
    // (height in half-units, accumulated character count), insertion-ordered.
    let mut buckets: Vec<(i64, usize)> = Vec::new();

    for page in pages.iter().take(BODY_SAMPLE_PAGES) {
        for fragment in &page.fragments {
            let count = fragment.text.chars().count();
            if count == 0 {
                continue;
            }
            let key = (fragment.height() * 2.0).round() as i64;
            match buckets.iter_mut().find(|(k, _)| *k == key) {
                Some((_, total)) => *total += count,
                None => buckets.push((key, count)),
            }
        }
    }

    let mut best: Option<(i64, usize)> = None;
    for &(key, count) in &buckets {
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key as f64 / 2.0)
}
