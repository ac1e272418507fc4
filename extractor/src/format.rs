use regex::Regex;
use lazy_static::lazy_static;

pub const MIN_PHONE_DIGITS: usize = 8;
pub const MAX_PHONE_DIGITS: usize = 15;

lazy_static! {
    static ref NON_DIGIT: Regex = Regex::new(r"[^0-9]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s").unwrap();
    static ref PREFIX_AND_LOCAL: Regex = Regex::new(r"([0-9]{2,4})([0-9]{6,8})").unwrap();
}

/// Output layout for [`format_phone_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneFormat {
    #[default]
    Spaces,
    Dashes,
    None,
}

pub fn digits_only(phone: &str) -> String {
    NON_DIGIT.replace_all(phone, "").into_owned()
}

/// Final filter stage of extraction: 8 to 15 digits once everything else is dropped.
pub fn has_valid_digit_count(phone: &str) -> bool {
    let count = digits_only(phone).len();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&count)
}

/// Stricter check for user-supplied values: only digits and whitespace allowed.
pub fn validate_phone_number(phone: &str) -> bool {
    let compact = WHITESPACE.replace_all(phone, "");
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&compact.len())
        && compact.chars().all(|c| c.is_ascii_digit())
}

/// Re-renders a number from its digits. Only the first prefix/local run is split.
pub fn format_phone_number(phone: &str, format: PhoneFormat) -> String {
    let digits = digits_only(phone);

    match format {
        PhoneFormat::Spaces => PREFIX_AND_LOCAL.replace(&digits, "$1 $2").into_owned(),
        PhoneFormat::Dashes => PREFIX_AND_LOCAL.replace(&digits, "$1-$2").into_owned(),
        PhoneFormat::None => digits,
    }
}
