use regex::Regex;
use lazy_static::lazy_static;
use super::{Candidate, PhonePattern};

lazy_static! {
    static ref DASH_FORMAT_PATTERN: Regex = Regex::new(
        r"(?-u:\b)([0-9]{2,4})-([0-9]{4})(?-u:\b)"
    ).unwrap();
}

#[cfg(test)]
fn is_match(segment: &str) -> bool {
    DASH_FORMAT_PATTERN.is_match(segment)
}

pub fn find_candidates(segment: &str) -> Vec<Candidate> {
    let mut results = Vec::new();

    for cap in DASH_FORMAT_PATTERN.captures_iter(segment) {
        results.push(Candidate {
            pattern: PhonePattern::DashFormat,
            matched: cap[0].to_string(),
            area_code: None,
            first: Some(cap[1].to_string()),
            second: Some(cap[2].to_string()),
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_dash_numbers() {
        let candidates = find_candidates("tel 517-7965 o 42-1234");
        let rebuilt: Vec<String> = candidates.iter().filter_map(|c| c.reconstruct()).collect();
        assert_eq!(rebuilt, vec!["517-7965", "42-1234"]);
    }

    #[test]
    fn test_word_boundaries() {
        assert!(!is_match("51789-7965"));
        assert!(!is_match("517-79651"));
        assert!(!is_match("5-7965"));
    }

    #[test]
    fn test_non_ascii_letter_before_digits() {
        let candidates = find_candidates("Nº517-7965");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].reconstruct().as_deref(), Some("517-7965"));
    }
}
