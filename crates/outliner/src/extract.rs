//! The extraction orchestrator: printed-TOC path first, heading
//! heuristics as the fallback.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use outliner_core::{
    MAX_LEVEL, MAX_TOC_PAGES, Outline, OutlineEntry, OutlineError, OutlineSource, PageContent,
    TOC_SCAN_WINDOW, assign_levels, detect_candidates, estimate_body_height, is_toc_page,
    is_toc_start_page, merge_candidates, parse_toc_pages,
};

use crate::source::PageSource;

/// Run one extraction pass over `source` and return the outline.
///
/// Convenience wrapper around [`OutlineExtractor`].
pub fn extract_outline<S: PageSource>(source: S) -> Result<Outline, OutlineError> {
    OutlineExtractor::new(source).extract()
}

/// One extraction pass over a document.
///
/// The extractor owns a per-pass page cache so the collaborator stays
/// cache-free and each page is fetched at most once, strictly in
/// ascending page order. No state survives the pass.
pub struct OutlineExtractor<S> {
    source: S,
    total_pages: usize,
    pages: BTreeMap<usize, PageContent>,
}

impl<S: PageSource> OutlineExtractor<S> {
    /// Create an extractor for one pass over `source`.
    pub fn new(source: S) -> Self {
        let total_pages = source.total_pages();
        Self {
            source,
            total_pages,
            pages: BTreeMap::new(),
        }
    }

    /// Run the pass.
    ///
    /// Tries the printed-TOC path over the initial page window first; a
    /// parsed TOC with at least one entry is returned as-is and the full
    /// document scan is skipped entirely. Otherwise every page is fetched
    /// and the heading heuristics run over the complete set.
    ///
    /// An empty outline is a valid, non-error outcome — documents with no
    /// usable text (e.g. scanned images) land here. The only error is a
    /// failed page fetch, which aborts the pass with no partial output.
    pub fn extract(mut self) -> Result<Outline, OutlineError> {
        let timestamp = now_millis();

        if let Some(toc_pages) = self.locate_toc()? {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                start = toc_pages[0],
                pages = toc_pages.len(),
                "located printed TOC"
            );

            let pages: Vec<&PageContent> = toc_pages.iter().map(|n| &self.pages[n]).collect();
            let entries = parse_toc_pages(&pages, self.total_pages);
            if !entries.is_empty() {
                return Ok(Outline {
                    source: OutlineSource::Toc,
                    entries: entries
                        .into_iter()
                        .map(|entry| OutlineEntry {
                            label: entry.label,
                            page: entry.page,
                            level: entry.level.min(MAX_LEVEL),
                            timestamp,
                        })
                        .collect(),
                });
            }

            #[cfg(feature = "tracing")]
            tracing::debug!("TOC parsing produced no entries, falling back to headings");
        }

        self.extract_from_headings(timestamp)
    }

    /// Fetch a page through the pass cache.
    fn fetch(&mut self, number: usize) -> Result<&PageContent, OutlineError> {
        if !self.pages.contains_key(&number) {
            let page = self.source.page(number)?;
            self.pages.insert(number, page);
        }
        Ok(&self.pages[&number])
    }

    /// Scan the initial window for a TOC start page, then walk forward
    /// collecting continuation pages.
    ///
    /// The walk fetches beyond the window on demand and halts at the
    /// first disqualifying page, when the page range is exhausted, or
    /// after accumulating more than [`MAX_TOC_PAGES`] pages.
    fn locate_toc(&mut self) -> Result<Option<Vec<usize>>, OutlineError> {
        let window = self.total_pages.min(TOC_SCAN_WINDOW);
        let mut start = None;
        for number in 1..=window {
            if is_toc_start_page(self.fetch(number)?) {
                start = Some(number);
                break;
            }
        }
        let Some(start) = start else {
            return Ok(None);
        };

        let mut toc_pages = vec![start];
        let mut next = start + 1;
        while next <= self.total_pages && toc_pages.len() <= MAX_TOC_PAGES {
            if !is_toc_page(self.fetch(next)?) {
                break;
            }
            toc_pages.push(next);
            next += 1;
        }
        Ok(Some(toc_pages))
    }

    /// The heuristic path: body-size estimation, candidate detection,
    /// merging, and level assignment over the complete page set.
    fn extract_from_headings(mut self, timestamp: u64) -> Result<Outline, OutlineError> {
        for number in 1..=self.total_pages {
            self.fetch(number)?;
        }
        let pages: Vec<&PageContent> = self.pages.values().collect();

        let Some(body_height) = estimate_body_height(&pages) else {
            // No characters anywhere: no usable text.
            return Ok(Outline {
                source: OutlineSource::Headings,
                entries: Vec::new(),
            });
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(body_height, "estimated body height");

        let mut candidates = Vec::new();
        for page in &pages {
            candidates.extend(detect_candidates(page, body_height));
        }
        let merged = merge_candidates(candidates);
        let levels = assign_levels(&merged);

        let total_pages = self.total_pages;
        let entries = merged
            .into_iter()
            .zip(levels)
            .filter(|(candidate, _)| candidate.page >= 1 && candidate.page <= total_pages)
            .map(|(candidate, level)| OutlineEntry {
                label: candidate.text,
                page: candidate.page,
                level,
                timestamp,
            })
            .collect();

        Ok(Outline {
            source: OutlineSource::Headings,
            entries,
        })
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
