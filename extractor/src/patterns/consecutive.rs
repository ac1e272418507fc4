use regex::Regex;
use lazy_static::lazy_static;
use super::{Candidate, PhonePattern};

lazy_static! {
    static ref CONSECUTIVE_PATTERN: Regex = Regex::new(r"(?-u:\b)([0-9]{10,11})(?-u:\b)").unwrap();
}

#[cfg(test)]
fn is_match(segment: &str) -> bool {
    CONSECUTIVE_PATTERN.is_match(segment)
}

pub fn find_candidates(segment: &str) -> Vec<Candidate> {
    CONSECUTIVE_PATTERN
        .find_iter(segment)
        .map(|m| Candidate {
            pattern: PhonePattern::Consecutive,
            matched: m.as_str().to_string(),
            area_code: None,
            first: None,
            second: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_runs() {
        let candidates = find_candidates("CEL 2:27310002653 / 1155551234");
        let matched: Vec<&str> = candidates.iter().map(|c| c.matched.as_str()).collect();
        assert_eq!(matched, vec!["27310002653", "1155551234"]);
    }

    #[test]
    fn test_run_lengths() {
        assert!(!is_match("123456789"));
        assert!(!is_match("123456789012"));
        assert!(is_match("1234567890"));
        assert!(is_match("12345678901"));
    }

    #[test]
    fn test_non_ascii_letter_before_digits() {
        let candidates = find_candidates("Nº1155551234");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].matched, "1155551234");
        assert!(is_match("móvilñ1155551234"));
    }
}
