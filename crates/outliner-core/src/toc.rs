//! Printed table-of-contents detection and parsing.
//!
//! A printed TOC is recognized from its title line and its density of
//! "<label><separator><page number>" lines, then parsed into labeled
//! entries whose outline depth comes from indentation clusters or from
//! numbering embedded in the labels themselves.

use crate::fragment::PageContent;
use crate::line::reconstruct_lines;
use crate::normalize::{TOC_GAP_RATIO, compose_line_text};
use crate::patterns::PATTERNS;

/// Number of initial pages scanned for a TOC start page.
pub const TOC_SCAN_WINDOW: usize = 20;

/// Runaway guard: the continuation walk halts after accumulating more
/// than this many TOC pages.
pub const MAX_TOC_PAGES: usize = 20;

/// Horizontal tolerance when clustering entry indentation.
pub const INDENT_TOLERANCE: f64 = 10.0;

/// An entry extracted from a printed TOC page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Entry label with trailing separators trimmed.
    pub label: String,
    /// 1-based target page parsed from the trailing digits.
    pub page: usize,
    /// x position of the line's first fragment.
    pub indent: f64,
    /// Outline depth from indentation clusters or label numbering, 1-based.
    pub level: usize,
}

/// Whether a page looks like the first page of a printed TOC.
///
/// Requires a title keyword among the top 5 lines, then either dot
/// leaders or more than 3 numbered lines, or more than 2 numbered lines
/// together with a structural keyword anywhere on the page.
pub fn is_toc_start_page(page: &PageContent) -> bool {
    let lines = reconstruct_lines(&page.fragments);

    let title = lines
        .iter()
        .take(5)
        .any(|line| PATTERNS.toc_title.is_match(&compose_line_text(&line.fragments, TOC_GAP_RATIO)));
    if !title {
        return false;
    }

    let mut numbered = 0usize;
    let mut dot_leaders = false;
    let mut structural = false;
    for line in &lines {
        let text = compose_line_text(&line.fragments, TOC_GAP_RATIO);
        if PATTERNS.numbered_line.is_match(&text) {
            numbered += 1;
            if PATTERNS.dot_leader.is_match(&text) {
                dot_leaders = true;
            }
        }
        if PATTERNS.structural.is_match(&text) {
            structural = true;
        }
    }

    dot_leaders || numbered > 3 || (numbered > 2 && structural)
}

/// Whether a page qualifies as a TOC continuation page: at least 3 lines
/// total and at least 3 of them numbered.
pub fn is_toc_page(page: &PageContent) -> bool {
    let lines = reconstruct_lines(&page.fragments);
    if lines.len() < 3 {
        return false;
    }
    let numbered = lines
        .iter()
        .filter(|line| {
            PATTERNS
                .numbered_line
                .is_match(&compose_line_text(&line.fragments, TOC_GAP_RATIO))
        })
        .count();
    numbered >= 3
}

/// Extract entries from the collected TOC pages, in reading order.
///
/// Lines that do not close an entry accumulate into a pending buffer and
/// are prepended to the next entry's label, reconstructing titles that
/// wrap before their page number. The pending buffer resets at page
/// boundaries. An empty result means TOC parsing failed and the caller
/// should fall back to the heading heuristics.
pub fn parse_toc_pages(pages: &[&PageContent], total_pages: usize) -> Vec<TocEntry> {
    let mut entries: Vec<TocEntry> = Vec::new();

    for page in pages {
        let mut pending = String::new();
        for line in reconstruct_lines(&page.fragments) {
            let text = compose_line_text(&line.fragments, TOC_GAP_RATIO);
            if text.is_empty()
                || PATTERNS.toc_title.is_match(&text)
                || PATTERNS.page_marker.is_match(&text)
            {
                continue;
            }

            let Some(caps) = PATTERNS.numbered_line.captures(&text) else {
                if !pending.is_empty() {
                    pending.push(' ');
                }
                pending.push_str(&text);
                continue;
            };

            let mut label = caps[1].trim_end_matches([' ', '.', '_', '·']).to_string();
            if !pending.is_empty() {
                label = format!("{pending} {label}");
                pending.clear();
            }
            let Ok(target) = caps[2].parse::<usize>() else {
                continue;
            };
            // Guard against re-capturing the TOC's own heading as an entry.
            if PATTERNS.toc_title.is_match(&label) && target.abs_diff(page.number) <= 2 {
                continue;
            }
            if target < 1 || target > total_pages {
                continue;
            }

            let indent = line.fragments.first().map_or(0.0, |f| f.x);
            entries.push(TocEntry {
                label,
                page: target,
                indent,
                level: 0,
            });
        }
    }

    assign_toc_levels(&mut entries);
    entries
}

/// Cluster entries by indentation and resolve each entry's final level.
///
/// Clusters grow by running average within [`INDENT_TOLERANCE`] and are
/// ranked by ascending average x; the 1-based rank is the entry's visual
/// level. A conclusive level derived from the label text overrides the
/// visual one.
fn assign_toc_levels(entries: &mut [TocEntry]) {
    struct Cluster {
        sum: f64,
        count: usize,
    }

    impl Cluster {
        fn average(&self) -> f64 {
            self.sum / self.count as f64
        }
    }

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut assigned: Vec<usize> = Vec::with_capacity(entries.len());
    for entry in entries.iter() {
        match clusters
            .iter()
            .position(|c| (entry.indent - c.average()).abs() <= INDENT_TOLERANCE)
        {
            Some(index) => {
                clusters[index].sum += entry.indent;
                clusters[index].count += 1;
                assigned.push(index);
            }
            None => {
                clusters.push(Cluster {
                    sum: entry.indent,
                    count: 1,
                });
                assigned.push(clusters.len() - 1);
            }
        }
    }

    let mut order: Vec<usize> = (0..clusters.len()).collect();
    order.sort_by(|a, b| {
        clusters[*a]
            .average()
            .partial_cmp(&clusters[*b].average())
            .unwrap()
    });
    let mut rank = vec![0usize; clusters.len()];
    for (position, &cluster) in order.iter().enumerate() {
        rank[cluster] = position + 1;
    }

    for (entry, &cluster) in entries.iter_mut().zip(&assigned) {
        let from_label = label_level(&entry.label);
        entry.level = if from_label > 0 {
            from_label
        } else {
            rank[cluster]
        };
    }
}

/// Outline depth implied by the label text itself; 0 when inconclusive.
///
/// Decimal numbering gives its component count, but only at depth > 1 —
/// a lone "1." is ambiguous and deferred to indentation. Chapter/section
/// keywords and Roman-numeral tokens imply the top level.
fn label_level(label: &str) -> usize {
    if let Some(caps) = PATTERNS.decimal_numbering.captures(label) {
        let depth = caps[1].split('.').count();
        if depth > 1 {
            return depth;
        }
    }
    if PATTERNS.structural_start.is_match(label) || PATTERNS.roman_start.is_match(label) {
        return 1;
    }
    0
}
