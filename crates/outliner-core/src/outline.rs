//! Final outline types.

/// Which extraction path produced an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutlineSource {
    /// Parsed from a printed table of contents inside the document.
    Toc,
    /// Inferred from typographic heading signals.
    Headings,
}

/// A single entry in the extracted document outline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineEntry {
    /// Entry label.
    pub label: String,
    /// 1-based target page, always within the document's page range.
    pub page: usize,
    /// Outline depth, 1..=4. Levels need not be contiguous from the root.
    pub level: usize,
    /// Creation time in milliseconds since the Unix epoch, matching the
    /// consuming bookmark store's creation-time field.
    pub timestamp: u64,
}

/// The result of one extraction pass: the entries plus the source tag.
///
/// An empty outline is a valid outcome — it is how documents with no
/// usable text (e.g. scanned images) are reported, not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outline {
    /// Which extraction path produced the entries.
    pub source: OutlineSource,
    /// Entries in reading order.
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Whether the pass produced no entries (no usable text, or nothing
    /// that classified as a heading).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
