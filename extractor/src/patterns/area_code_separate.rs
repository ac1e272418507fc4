use regex::Regex;
use lazy_static::lazy_static;
use super::{Candidate, PhonePattern};

lazy_static! {
    // 11 517-7965 (C): area code split from the local part by whitespace
    static ref AREA_CODE_SEPARATE_PATTERN: Regex = Regex::new(
        r"([0-9]{2,5})\s*([0-9]{2,4})-([0-9]{4})\s*\(?[CP]?\)?"
    ).unwrap();
}

#[cfg(test)]
fn is_match(segment: &str) -> bool {
    AREA_CODE_SEPARATE_PATTERN.is_match(segment)
}

pub fn find_candidates(segment: &str) -> Vec<Candidate> {
    AREA_CODE_SEPARATE_PATTERN
        .captures_iter(segment)
        .map(|cap| Candidate {
            pattern: PhonePattern::AreaCodeSeparate,
            matched: cap[0].to_string(),
            area_code: cap.get(1).map(|m| m.as_str().to_string()),
            first: cap.get(2).map(|m| m.as_str().to_string()),
            second: cap.get(3).map(|m| m.as_str().to_string()),
        })
        .collect()
}
