//! Line text composition and accent/spacing normalization.
//!
//! Fragments within a line are concatenated into one canonical string,
//! with spaces inserted at real gaps and accent artifacts from the layout
//! facility repaired. The text transformation is stateless so it can be
//! property-tested on its own.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::fragment::TextFragment;

/// Gap-to-height ratio used when composing heading-candidate lines.
pub const HEADING_GAP_RATIO: f64 = 0.2;

/// Gap-to-height ratio used when composing TOC lines. Wider than the
/// heading ratio so dense small-caps entries are not split spuriously.
pub const TOC_GAP_RATIO: f64 = 0.4;

/// Spacing acute accent (U+00B4) followed by optional whitespace and a
/// vowel — an artifact of layout engines that emit the accent as its own
/// glyph run.
static SPACING_ACUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"´\s*([aeiouAEIOU])").expect("static pattern must compile"));

/// Whitespace immediately before a combining diacritical mark.
static SPACE_BEFORE_COMBINING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+([\x{0300}-\x{036F}])").expect("static pattern must compile")
});

/// Concatenate a line's fragments (already ordered left-to-right) into the
/// canonical line string.
///
/// A single space is inserted between two fragments when the horizontal
/// gap between the end of one and the start of the next exceeds
/// `gap_ratio` times the preceding fragment's font height. Fragments
/// beginning with a combining diacritical mark are never preceded by an
/// inserted space. The concatenated text is then passed through
/// [`normalize_text`].
pub fn compose_line_text(fragments: &[&TextFragment], gap_ratio: f64) -> String {
    let mut text = String::new();
    let mut prev: Option<&TextFragment> = None;

    for &fragment in fragments {
        if let Some(prev) = prev {
            let gap = fragment.x - prev.end_x();
            if gap > gap_ratio * prev.height() && !starts_with_combining_mark(&fragment.text) {
                text.push(' ');
            }
        }
        text.push_str(&fragment.text);
        prev = Some(fragment);
    }

    normalize_text(&text)
}

/// Repair accent artifacts and normalize to composed Unicode form.
///
/// Applied transformations, in order:
/// 1. A spacing acute accent (´) followed by optional whitespace and a
///    vowel becomes the precomposed accented vowel (a/e/i/o/u, both cases).
/// 2. Whitespace immediately before a combining mark is removed.
/// 3. The result is trimmed and normalized to NFKC.
pub fn normalize_text(text: &str) -> String {
    let text = SPACING_ACUTE.replace_all(text, |caps: &regex::Captures| {
        precompose_acute(&caps[1]).to_string()
    });
    let text = SPACE_BEFORE_COMBINING.replace_all(&text, "$1");
    text.trim().nfkc().collect()
}

fn starts_with_combining_mark(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| ('\u{0300}'..='\u{036F}').contains(&c))
}

fn precompose_acute(vowel: &str) -> &'static str {
    match vowel {
        "a" => "á",
        "e" => "é",
        "i" => "í",
        "o" => "ó",
        "u" => "ú",
        "A" => "Á",
        "E" => "É",
        "I" => "Í",
        "O" => "Ó",
        "U" => "Ú",
        _ => unreachable!("pattern only captures vowels"),
    }
}
