use regex::Regex;
use lazy_static::lazy_static;
use super::{Candidate, PhonePattern};

lazy_static! {
    // 02291 460318: prefix of 2-5 digits, whitespace, 6-8 digit local number
    static ref SPACED_FORMAT_PATTERN: Regex = Regex::new(
        r"(?-u:\b)([0-9]{2,5})\s+([0-9]{6,8})(?-u:\b)"
    ).unwrap();
}

#[cfg(test)]
fn is_match(segment: &str) -> bool {
    SPACED_FORMAT_PATTERN.is_match(segment)
}

pub fn find_candidates(segment: &str) -> Vec<Candidate> {
    let mut results = Vec::new();

    for cap in SPACED_FORMAT_PATTERN.captures_iter(segment) {
        results.push(Candidate {
            pattern: PhonePattern::SpacedFormat,
            matched: cap[0].to_string(),
            area_code: None,
            first: Some(cap[1].to_string()),
            second: Some(cap[2].to_string()),
        });
    }

    results
}
