use std::collections::HashSet;

use tracing::{debug, trace};

use crate::format::has_valid_digit_count;
use crate::patterns::first_matching;
use crate::rows::trim_text;

/// Separator between independently formatted numbers inside one cell.
pub const SEGMENT_SEPARATOR: &str = " - ";

pub trait PhoneNumberExtractor: Send + Sync {
    /// Normalized, deduplicated, validated numbers found in one raw cell.
    fn extract(&self, data: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorKind {
    #[default]
    Structured,
    Simple,
}

/// Pulls phone numbers out of loosely labelled cells such as
/// `PAR: 02291 460318;LAB: ;CEL: ;CEL 2:27310002653` or
/// `(11)5178-7965 (C) - ()5178-7965 (C)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredPhoneExtractor;

impl StructuredPhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneNumberExtractor for StructuredPhoneExtractor {
    fn extract(&self, data: &str) -> Vec<String> {
        if data.is_empty() {
            return Vec::new();
        }
        debug!(cell = data, "extracting phone numbers");

        let found = collect_numbers(data);
        let unique = dedup(found);
        let valid = retain_valid(unique);

        debug!(numbers = ?valid, "extraction finished");
        valid
    }
}

pub fn create_phone_extractor(kind: ExtractorKind) -> Box<dyn PhoneNumberExtractor> {
    match kind {
        ExtractorKind::Structured => Box::new(StructuredPhoneExtractor::new()),
        // No dedicated simple extractor yet.
        ExtractorKind::Simple => Box::new(StructuredPhoneExtractor::new()),
    }
}

/// Non-empty trimmed segments of a cell. Only `" - "` separates; `;` does not.
pub fn split_segments(data: &str) -> Vec<&str> {
    data.split(SEGMENT_SEPARATOR)
        .map(trim_text)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Reconstructed numbers in discovery order, duplicates and invalid lengths included.
pub fn collect_numbers(data: &str) -> Vec<String> {
    let segments = split_segments(data);
    debug!(?segments, "split cell into segments");

    let mut numbers = Vec::new();
    for segment in segments {
        let Some((pattern, candidates)) = first_matching(segment) else {
            trace!(segment, "no pattern matched");
            continue;
        };
        debug!(segment, %pattern, matches = candidates.len(), "pattern matched");

        for candidate in candidates {
            if let Some(number) = candidate.reconstruct() {
                trace!(%pattern, raw = %candidate.matched, %number, "candidate");
                numbers.push(number);
            }
        }
    }
    numbers
}

/// First occurrence wins; order otherwise preserved.
pub fn dedup(numbers: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    numbers
        .into_iter()
        .filter(|number| seen.insert(number.clone()))
        .collect()
}

pub fn retain_valid(numbers: Vec<String>) -> Vec<String> {
    numbers
        .into_iter()
        .filter(|number| has_valid_digit_count(number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(data: &str) -> Vec<String> {
        StructuredPhoneExtractor::new().extract(data)
    }

    #[test]
    fn test_two_tagged_segments() {
        assert_eq!(
            extract("(11)5178-7965 (C) - ()5178-7965 (C)"),
            vec!["11 5178-7965", "51 78-7965"]
        );
    }

    #[test]
    fn test_identical_segments_deduplicated() {
        assert_eq!(
            extract("(11)5178-7965 (C) - (11)5178-7965 (P)"),
            vec!["11 5178-7965"]
        );
    }

    #[test]
    fn test_labeled_cell_keeps_semicolons_together() {
        // The whole cell is one segment, so spaced_format wins and the
        // trailing digit run after `CEL 2:` is never looked at.
        assert_eq!(
            extract("PAR: 02291 460318;LAB: ;CEL: ;CEL 2:27310002653"),
            vec!["02291 460318"]
        );
    }

    #[test]
    fn test_labeled_cell_with_only_digit_run() {
        assert_eq!(extract("PAR: ;LAB: ;CEL: ;CEL 2:27310002653"), vec!["27310002653"]);
    }

    #[test]
    fn test_numbers_after_non_ascii_letters() {
        assert_eq!(extract("Nº1155551234"), vec!["1155551234"]);
        assert_eq!(extract("ñ02291 460318"), vec!["02291 460318"]);
    }

    #[test]
    fn test_area_code_separate_segment() {
        assert_eq!(extract("11 517-7965 (C)"), vec!["11 517-7965"]);
    }

    #[test]
    fn test_short_candidates_dropped() {
        // dash_format matches but only yields seven digits
        assert!(extract("517-7965").is_empty());
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(extract("").is_empty());
        assert!(extract("   ").is_empty());
        assert!(extract("abc def").is_empty());
        assert!(extract(" - - ").is_empty());
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("a - b -  - c"), vec!["a", "b", "c"]);
        assert_eq!(split_segments("1-2"), vec!["1-2"]);
    }

    #[test]
    fn test_dedup_preserves_order() {
        let numbers = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup(numbers), vec!["b", "a"]);
    }

    #[test]
    fn test_factory() {
        for kind in [ExtractorKind::Structured, ExtractorKind::Simple] {
            let extractor = create_phone_extractor(kind);
            assert_eq!(extractor.extract("1155551234"), vec!["1155551234"]);
        }
    }
}
