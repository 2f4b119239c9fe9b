//! Heading-candidate classification from typographic signals.

use crate::fragment::PageContent;
use crate::line::{Line, reconstruct_lines};
use crate::normalize::{HEADING_GAP_RATIO, compose_line_text};
use crate::patterns::PATTERNS;

/// A line provisionally classified as a heading, before merging and level
/// assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadingCandidate {
    /// 1-based page the line appears on.
    pub page: usize,
    /// Normalized line text. Grows by concatenation when wrapped lines
    /// merge.
    pub text: String,
    /// Line height rounded to the nearest 0.5 unit.
    pub height: f64,
    /// Whether the line is set in a bold face.
    pub bold: bool,
    /// Whether the text matched an explicit heading keyword or numbering
    /// pattern. Explicit candidates always start a new entry when merging.
    pub explicit: bool,
}

/// Classify a page's lines as heading candidates against the body height.
///
/// Lines are visited top-to-bottom; the classification rules are total —
/// malformed text can only fail to qualify, never error.
pub fn detect_candidates(page: &PageContent, body_height: f64) -> Vec<HeadingCandidate> {
    reconstruct_lines(&page.fragments)
        .iter()
        .filter_map(|line| classify_line(line, page, body_height))
        .collect()
}

fn classify_line(line: &Line<'_>, page: &PageContent, body_height: f64) -> Option<HeadingCandidate> {
    let first = line.fragments.first()?;
    let mut height = first.rounded_height();

    // Drop-cap suppression: a single oversized initial glyph must not
    // promote an otherwise body-sized line.
    if line.fragments.len() >= 2 {
        let second = line.fragments[1].rounded_height();
        if height > body_height * 1.2 && second <= body_height * 1.1 {
            height = second;
        }
    }

    let text = compose_line_text(&line.fragments, HEADING_GAP_RATIO);
    if text.is_empty() {
        return None;
    }
    if text.chars().count() < 3 && height == body_height {
        return None;
    }
    // Bare page-number lines are noise; "1."-style numbered headings keep
    // their trailing period and survive.
    if text.chars().all(|c| c.is_ascii_digit()) && !text.ends_with('.') {
        return None;
    }

    let bold = page.is_bold(first);
    let is_larger = height > body_height * 1.1;
    let is_bold_header = bold && height >= body_height;
    let is_explicit = is_explicit_heading(&text) && height >= body_height * 0.9;
    let is_all_caps = is_all_caps_heading(&text) && height >= body_height;

    if is_larger || is_bold_header || is_explicit || is_all_caps {
        Some(HeadingCandidate {
            page: page.number,
            text,
            height,
            bold,
            explicit: is_explicit,
        })
    } else {
        None
    }
}

/// An explicit heading starts with a known keyword or numbering token and
/// with a capital letter, digit, or opening punctuation.
fn is_explicit_heading(text: &str) -> bool {
    PATTERNS.heading_start.is_match(text)
        && text
            .chars()
            .next()
            .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit() || matches!(c, '¡' | '¿' | '"'))
}

fn is_all_caps_heading(text: &str) -> bool {
    text.chars().count() > 4
        && text.chars().any(char::is_alphabetic)
        && text == text.to_uppercase()
}
