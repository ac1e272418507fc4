use phonenumber::country;
use phonenumber::{Mode, PhoneNumber};
use tracing::trace;

pub const DEFAULT_COUNTRY: &str = "US";

/// Parses `number` in the context of a two-letter region. Unknown regions
/// parse with no default, so only `+`-prefixed numbers can resolve.
fn parse_in(number: &str, country_code: &str) -> Option<PhoneNumber> {
    let region = country_code
        .trim()
        .to_ascii_uppercase()
        .parse::<country::Id>()
        .ok();
    match phonenumber::parse(region, number) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            trace!(number, country_code, error = %err, "unparsable phone number");
            None
        }
    }
}

/// E.164 form of `number`, or `None` when it does not parse or is not a valid number.
pub fn canonical(number: &str, country_code: &str) -> Option<String> {
    let parsed = parse_in(number, country_code)?;
    if !phonenumber::is_valid(&parsed) {
        return None;
    }
    Some(parsed.format().mode(Mode::E164).to_string())
}

/// Decides whether two phone strings denote the same subscriber number.
#[derive(Debug, Clone)]
pub struct PhoneNumberComparator {
    default_country: String,
}

impl Default for PhoneNumberComparator {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}

impl PhoneNumberComparator {
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            default_country: default_country.into(),
        }
    }

    pub fn default_country(&self) -> &str {
        &self.default_country
    }

    /// True only if both numbers are valid and share one canonical form.
    pub fn compare(&self, first: &str, second: &str, country_code: &str) -> bool {
        match (canonical(first, country_code), canonical(second, country_code)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn compare_default(&self, first: &str, second: &str) -> bool {
        self.compare(first, second, &self.default_country)
    }

    /// Whether an externally sourced number already appears in the local set.
    pub fn is_phone_in_set(&self, external: &str, local: &[String], country_code: &str) -> bool {
        local
            .iter()
            .any(|candidate| self.compare(external, candidate, country_code))
    }

    /// External numbers with no counterpart in the local set, in input order.
    pub fn new_phones(&self, external: &[String], local: &[String], country_code: &str) -> Vec<String> {
        external
            .iter()
            .filter(|phone| !self.is_phone_in_set(phone, local, country_code))
            .cloned()
            .collect()
    }

    /// Whether a locally extracted number was confirmed by the external set.
    pub fn has_match(&self, local: &str, external: &[String], country_code: &str) -> bool {
        external
            .iter()
            .any(|candidate| self.compare(local, candidate, country_code))
    }
}
