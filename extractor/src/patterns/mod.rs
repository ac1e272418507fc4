pub mod area_code_separate;
pub mod consecutive;
pub mod dash_format;
pub mod parentheses_dash;
pub mod spaced_format;

use std::fmt;

/// The phone shapes recognised inside a cell segment, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhonePattern {
    ParenthesesDash,
    AreaCodeSeparate,
    DashFormat,
    SpacedFormat,
    Consecutive,
}

impl PhonePattern {
    /// Every pattern, most specific first. `Consecutive` is the catch-all.
    pub const ORDERED: [PhonePattern; 5] = [
        PhonePattern::ParenthesesDash,
        PhonePattern::AreaCodeSeparate,
        PhonePattern::DashFormat,
        PhonePattern::SpacedFormat,
        PhonePattern::Consecutive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PhonePattern::ParenthesesDash => "parentheses_dash",
            PhonePattern::AreaCodeSeparate => "area_code_separate",
            PhonePattern::DashFormat => "dash_format",
            PhonePattern::SpacedFormat => "spaced_format",
            PhonePattern::Consecutive => "consecutive",
        }
    }

    /// All non-overlapping matches of this pattern in `segment`, left to right.
    pub fn find_candidates(&self, segment: &str) -> Vec<Candidate> {
        match self {
            PhonePattern::ParenthesesDash => parentheses_dash::find_candidates(segment),
            PhonePattern::AreaCodeSeparate => area_code_separate::find_candidates(segment),
            PhonePattern::DashFormat => dash_format::find_candidates(segment),
            PhonePattern::SpacedFormat => spaced_format::find_candidates(segment),
            PhonePattern::Consecutive => consecutive::find_candidates(segment),
        }
    }
}

impl fmt::Display for PhonePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw match of one pattern, before reconstruction and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub pattern: PhonePattern,
    pub matched: String,
    pub area_code: Option<String>,
    pub first: Option<String>,
    pub second: Option<String>,
}

impl Candidate {
    /// Rebuilds the normalized phone string for this match.
    pub fn reconstruct(&self) -> Option<String> {
        match self.pattern {
            PhonePattern::ParenthesesDash | PhonePattern::AreaCodeSeparate => {
                let first = self.first.as_deref()?;
                let second = self.second.as_deref()?;
                match self.area_code.as_deref() {
                    Some(area) if !area.is_empty() => Some(format!("{} {}-{}", area, first, second)),
                    _ => Some(format!("{}-{}", first, second)),
                }
            }
            PhonePattern::DashFormat => Some(format!(
                "{}-{}",
                self.first.as_deref()?,
                self.second.as_deref()?
            )),
            PhonePattern::SpacedFormat => Some(format!(
                "{} {}",
                self.first.as_deref()?,
                self.second.as_deref()?
            )),
            PhonePattern::Consecutive => Some(self.matched.clone()),
        }
    }
}

/// Tries each pattern in precedence order and returns the matches of the
/// first one that finds anything. Later patterns are not consulted.
pub fn first_matching(segment: &str) -> Option<(PhonePattern, Vec<Candidate>)> {
    PhonePattern::ORDERED.iter().find_map(|pattern| {
        let candidates = pattern.find_candidates(segment);
        if candidates.is_empty() {
            None
        } else {
            Some((*pattern, candidates))
        }
    })
}
