//! outliner: Extract a hierarchical outline from a document's positioned
//! text fragments.
//!
//! Given per-page text fragments (glyph string, position, scale, width,
//! font reference), the extractor produces a table of contents — either by
//! locating and parsing a printed index inside the document, or, failing
//! that, by inferring section headers from typographic signals (size,
//! weight, casing, numbering patterns).
//!
//! # Architecture
//!
//! - **outliner-core**: Source-independent data types and algorithms
//! - **outliner** (this crate): The [`PageSource`] capability and the
//!   [`OutlineExtractor`] orchestrator tying the pipeline together
//!
//! # Example
//!
//! ```
//! use outliner::{PageContent, VecSource, extract_outline};
//!
//! let pages: Vec<PageContent> = Vec::new();
//! let outline = extract_outline(VecSource::new(pages)).unwrap();
//! assert!(outline.is_empty()); // no usable text
//! ```

mod extract;
mod source;

pub use extract::{OutlineExtractor, extract_outline};
pub use source::{PageSource, VecSource};

pub use outliner_core::{
    FontDescriptor, HeadingCandidate, MAX_TOC_PAGES, Outline, OutlineEntry, OutlineError,
    OutlineSource, PageContent, TOC_SCAN_WINDOW, TextFragment, TocEntry, is_toc_page,
    is_toc_start_page, parse_toc_pages,
};
