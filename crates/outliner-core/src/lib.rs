//! outliner-core: Source-independent data types and algorithms.
//!
//! This crate provides the foundational types (TextFragment, PageContent,
//! Line, HeadingCandidate, OutlineEntry) and the extraction algorithms
//! (line reconstruction, text normalization, body-size estimation, heading
//! classification, candidate merging, level assignment, printed-TOC
//! detection and parsing) used by outliner-rs. It performs no I/O — page
//! content is supplied by the caller.

pub mod body;
pub mod error;
pub mod fragment;
pub mod heading;
pub mod level;
pub mod line;
pub mod merge;
pub mod normalize;
pub mod outline;
pub mod patterns;
pub mod toc;

pub use body::{BODY_SAMPLE_PAGES, estimate_body_height};
pub use error::OutlineError;
pub use fragment::{FontDescriptor, PageContent, TextFragment, round_half};
pub use heading::{HeadingCandidate, detect_candidates};
pub use level::{MAX_LEVEL, assign_levels};
pub use line::{Line, reconstruct_lines};
pub use merge::merge_candidates;
pub use normalize::{HEADING_GAP_RATIO, TOC_GAP_RATIO, compose_line_text, normalize_text};
pub use outline::{Outline, OutlineEntry, OutlineSource};
pub use patterns::{PATTERNS, Patterns};
pub use toc::{
    INDENT_TOLERANCE, MAX_TOC_PAGES, TOC_SCAN_WINDOW, TocEntry, is_toc_page, is_toc_start_page,
    parse_toc_pages,
};
