//! Shared keyword and pattern tables for heading and TOC detection.
//!
//! Every matcher used by the heading detector, the TOC locator, and the
//! TOC parser lives in one immutable [`Patterns`] table, so adding a new
//! language's keywords is a single-point change.

use std::sync::LazyLock;

use regex::Regex;

/// The compiled pattern table shared by both detection paths.
pub static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::compile);

/// Compiled pattern matchers for heading classification and printed-TOC
/// detection.
#[derive(Debug)]
pub struct Patterns {
    /// Leading heading keyword or numbering token: "Chapter", "Capítulo",
    /// "3.", "IV.".
    pub heading_start: Regex,
    /// A TOC title line ("Índice", "Table of Contents", ...), anchored to
    /// the whole line.
    pub toc_title: Regex,
    /// Structural keyword appearing anywhere in a line: chapter/section/
    /// part variants.
    pub structural: Regex,
    /// Structural keyword at the start of a label.
    pub structural_start: Regex,
    /// "<label><separator><page digits>" line. Captures the label (1) and
    /// the page digits (2); separators are dot, space, underscore, middot.
    pub numbered_line: Regex,
    /// A visible dot-leader run ("...." or "····").
    pub dot_leader: Regex,
    /// A bare page-marker line: optional dashes or em-dashes around digits
    /// only, e.g. "- 11 -".
    pub page_marker: Regex,
    /// Leading decimal numbering ("1", "1.1", "1.1.1"); the capture's
    /// dot-separated component count gives the implied depth.
    pub decimal_numbering: Regex,
    /// Leading "d.d" sub-section numbering.
    pub sub_number: Regex,
    /// Leading "d.d.d" sub-sub-section numbering.
    pub sub_sub_number: Regex,
    /// Leading Roman-numeral token ("IV.", "XII ").
    pub roman_start: Regex,
}

impl Patterns {
    fn compile() -> Self {
        Self {
            heading_start: pattern(
                r"(?i)^(?:(?:chapter|part|lesson|section|prologue|epilogue|appendix|index|introduction|cap[ií]tulo|parte|lecci[oó]n|secci[oó]n|pr[oó]logo|ep[ií]logo|ap[eé]ndice|[ií]ndice|introducci[oó]n|unidad|tema)\b|\d+\.|[ivxlcdm]+\.)",
            ),
            toc_title: pattern(
                r"(?i)^\s*(?:[ií]ndice|index|table of contents|contents|tabla de contenidos?|sumario|contenidos?)\s*$",
            ),
            structural: pattern(r"(?i)\b(?:cap[ií]tulo|chapter|secci[oó]n|section|parte|part)\b"),
            structural_start: pattern(
                r"(?i)^(?:cap[ií]tulo|chapter|secci[oó]n|section|parte|part)\b",
            ),
            numbered_line: pattern(r"^(.+?)[\s._·]+(\d+)\s*$"),
            dot_leader: pattern(r"\.{4,}|·{4,}"),
            page_marker: pattern(r"^[\s\-–—]*\d+[\s\-–—]*$"),
            decimal_numbering: pattern(r"^(\d+(?:\.\d+)*)\.?(?:\s|$)"),
            sub_number: pattern(r"^\d+\.\d+"),
            sub_sub_number: pattern(r"^\d+\.\d+\.\d+"),
            roman_start: pattern(r"^[IVXLCDM]+[.\s]"),
        }
    }
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("static pattern must compile")
}
