//! The page-content provider capability.

use std::collections::BTreeMap;

use outliner_core::{OutlineError, PageContent};

/// Capability to retrieve per-page text content for one document.
///
/// The extractor calls [`page`](PageSource::page) strictly in ascending
/// page order, each page at most once per pass. The trait is synchronous;
/// an asynchronous collaborator blocks inside its implementation. A fetch
/// failure is fatal to the extraction pass — the extractor does not retry.
pub trait PageSource {
    /// Total number of pages in the document.
    fn total_pages(&self) -> usize;

    /// Retrieve the ordered fragment list and font map for a 1-based page
    /// number.
    fn page(&mut self, number: usize) -> Result<PageContent, OutlineError>;
}

/// A [`PageSource`] over a fixed in-memory page set, for fixtures and for
/// callers that already hold the whole document.
///
/// Pages are keyed by their own 1-based number; requesting an in-range
/// number with no stored content yields an empty page (a page without
/// text is valid), while an out-of-range number fails.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    pages: BTreeMap<usize, PageContent>,
    total: usize,
}

impl VecSource {
    /// Build a source from pages, inferring the page count from the
    /// highest page number present.
    pub fn new(pages: Vec<PageContent>) -> Self {
        let total = pages.iter().map(|p| p.number).max().unwrap_or(0);
        Self::with_total_pages(pages, total)
    }

    /// Build a source with an explicit page count, allowing trailing
    /// pages with no stored content.
    pub fn with_total_pages(pages: Vec<PageContent>, total: usize) -> Self {
        let pages = pages.into_iter().map(|p| (p.number, p)).collect();
        Self { pages, total }
    }
}

impl PageSource for VecSource {
    fn total_pages(&self) -> usize {
        self.total
    }

    fn page(&mut self, number: usize) -> Result<PageContent, OutlineError> {
        if number < 1 || number > self.total {
            return Err(OutlineError::PageFetch {
                page: number,
                reason: format!("page out of range (document has {} pages)", self.total),
            });
        }
        Ok(self
            .pages
            .get(&number)
            .cloned()
            .unwrap_or_else(|| PageContent::empty(number)))
    }
}
