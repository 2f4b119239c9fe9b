//! Error type for outline extraction.

use std::fmt;

/// Fatal errors that abort an extraction pass.
///
/// Heuristic misses are not errors: a document without a printed TOC or
/// without detectable headings yields an empty outline. The only fatal
/// condition is a page that cannot be retrieved — the pass aborts with no
/// partial output, and callers needing partial results must structure
/// retries themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineError {
    /// A page could not be retrieved from the page-content collaborator.
    PageFetch {
        /// The 1-based page number that failed.
        page: usize,
        /// Collaborator-supplied failure description.
        reason: String,
    },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineError::PageFetch { page, reason } => {
                write!(f, "failed to fetch page {page}: {reason}")
            }
        }
    }
}

impl std::error::Error for OutlineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_fetch_display() {
        let err = OutlineError::PageFetch {
            page: 7,
            reason: "stream unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "failed to fetch page 7: stream unavailable");
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(OutlineError::PageFetch {
            page: 1,
            reason: "test".to_string(),
        });
        assert!(err.to_string().contains("page 1"));
    }

    #[test]
    fn clone_and_eq() {
        let err = OutlineError::PageFetch {
            page: 3,
            reason: "x".to_string(),
        };
        assert_eq!(err, err.clone());
    }
}
