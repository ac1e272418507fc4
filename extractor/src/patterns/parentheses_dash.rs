use regex::Regex;
use lazy_static::lazy_static;
use super::{Candidate, PhonePattern};

lazy_static! {
    // (11)5178-7965(C): optional parens around the area code, trailing (C)/(P) tag
    static ref PARENTHESES_DASH_PATTERN: Regex = Regex::new(
        r"\(?([0-9]{2,5})\)?([0-9]{2,4})-([0-9]{4})\s*\(?[CP]?\)?"
    ).unwrap();
}

#[cfg(test)]
fn is_match(segment: &str) -> bool {
    PARENTHESES_DASH_PATTERN.is_match(segment)
}

pub fn find_candidates(segment: &str) -> Vec<Candidate> {
    let mut results = Vec::new();

    for cap in PARENTHESES_DASH_PATTERN.captures_iter(segment) {
        results.push(Candidate {
            pattern: PhonePattern::ParenthesesDash,
            matched: cap[0].to_string(),
            area_code: cap.get(1).map(|m| m.as_str().to_string()),
            first: cap.get(2).map(|m| m.as_str().to_string()),
            second: cap.get(3).map(|m| m.as_str().to_string()),
        });
    }

    results
}
