//! Coalescing of heading candidates that wrap across typeset lines.

use crate::heading::HeadingCandidate;

/// Fold consecutive candidates that are really one wrapped heading.
///
/// A candidate is appended (space-joined) to the previous one instead of
/// starting a new entry when all hold: same or next page, identical
/// rounded height and boldness, the current candidate is not itself
/// explicit, and either its text starts with a lower-case letter or the
/// previous text does not end with sentence-final punctuation.
///
/// The fold is order-preserving and idempotent: running it on its own
/// output is a no-op.
pub fn merge_candidates(candidates: Vec<HeadingCandidate>) -> Vec<HeadingCandidate> {
    let mut merged: Vec<HeadingCandidate> = Vec::new();

    for candidate in candidates {
        if let Some(previous) = merged.last_mut() {
            if continues_previous(previous, &candidate) {
                previous.text.push(' ');
                previous.text.push_str(&candidate.text);
                continue;
            }
        }
        merged.push(candidate);
    }

    merged
}

fn continues_previous(previous: &HeadingCandidate, candidate: &HeadingCandidate) -> bool {
    let adjacent = candidate.page == previous.page || candidate.page == previous.page + 1;
    let same_style = candidate.height == previous.height && candidate.bold == previous.bold;
    if !adjacent || !same_style || candidate.explicit {
        return false;
    }

    // char::is_lowercase covers accented vowels and ñ as well as ASCII.
    let starts_lower = candidate
        .text
        .chars()
        .next()
        .is_some_and(char::is_lowercase);
    let previous_open = !previous.text.ends_with(['.', '?', '!']);
    starts_lower || previous_open
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidate(page: usize, text: &str, height: f64, bold: bool) -> HeadingCandidate {
        HeadingCandidate {
            page,
            text: text.to_string(),
            height,
            bold,
            explicit: false,
        }
    }

    #[test]
    fn scenario_b_wrapped_heading_merges() {
        let candidates = vec![
            make_candidate(5, "Introduction to the", 16.0, false),
            make_candidate(5, "Subject Matter", 16.0, false),
        ];
        let merged = merge_candidates(candidates);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "Introduction to the Subject Matter");
        assert_eq!(merged[0].page, 5);
    }

    #[test]
    fn heading_wrapping_across_a_page_break_merges() {
        let candidates = vec![
            make_candidate(5, "A Very Long Heading That", 16.0, false),
            make_candidate(6, "continues overleaf", 16.0, false),
        ];
        let merged = merge_candidates(candidates);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].page, 5);
    }

    #[test]
    fn distant_pages_do_not_merge() {
        let candidates = vec![
            make_candidate(5, "First Heading", 16.0, false),
            make_candidate(8, "second part", 16.0, false),
        ];
        assert_eq!(merge_candidates(candidates).len(), 2);
    }

    #[test]
    fn different_height_does_not_merge() {
        let candidates = vec![
            make_candidate(5, "Large Heading", 18.0, false),
            make_candidate(5, "smaller subtitle", 14.0, false),
        ];
        assert_eq!(merge_candidates(candidates).len(), 2);
    }

    #[test]
    fn different_boldness_does_not_merge() {
        let candidates = vec![
            make_candidate(5, "Bold Heading", 16.0, true),
            make_candidate(5, "regular continuation", 16.0, false),
        ];
        assert_eq!(merge_candidates(candidates).len(), 2);
    }

    #[test]
    fn explicit_candidate_always_starts_a_new_entry() {
        let mut second = make_candidate(5, "Capítulo 2", 16.0, false);
        second.explicit = true;
        let candidates = vec![make_candidate(5, "Some Heading", 16.0, false), second];
        assert_eq!(merge_candidates(candidates).len(), 2);
    }

    #[test]
    fn sentence_final_punctuation_blocks_merge_for_capitalized_start() {
        let candidates = vec![
            make_candidate(5, "A complete heading.", 16.0, false),
            make_candidate(5, "Another Heading", 16.0, false),
        ];
        assert_eq!(merge_candidates(candidates).len(), 2);
    }

    #[test]
    fn lowercase_start_merges_even_after_punctuation() {
        let candidates = vec![
            make_candidate(5, "What is this?", 16.0, false),
            make_candidate(5, "and other questions", 16.0, false),
        ];
        let merged = merge_candidates(candidates);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "What is this? and other questions");
    }

    #[test]
    fn accented_lowercase_start_merges() {
        let candidates = vec![
            make_candidate(5, "La Economía.", 16.0, false),
            make_candidate(5, "ética y práctica", 16.0, false),
        ];
        assert_eq!(merge_candidates(candidates).len(), 1);
    }

    #[test]
    fn merge_is_idempotent() {
        let candidates = vec![
            make_candidate(5, "Introduction to the", 16.0, false),
            make_candidate(5, "Subject Matter.", 16.0, false),
            make_candidate(6, "Conclusions.", 16.0, false),
            make_candidate(7, "Appendix Material", 14.0, false),
        ];
        let once = merge_candidates(candidates);
        let twice = merge_candidates(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge_candidates(Vec::new()).is_empty());
    }
}
