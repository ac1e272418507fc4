use phone_extractor::format::has_valid_digit_count;
use phone_extractor::{canonical, extract_phone_numbers, records, PhoneNumberComparator};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn extract_never_returns_duplicates(cell in ".{0,80}") {
        let results = extract_phone_numbers(&cell);
        let unique: HashSet<&String> = results.iter().collect();
        prop_assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn extracted_numbers_are_valid(cell in "[0-9()CP \\-;:A-Z]{0,60}") {
        for phone in extract_phone_numbers(&cell) {
            prop_assert!(has_valid_digit_count(&phone), "invalid digit count: {}", phone);
            prop_assert!(phone.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-'));
        }
    }

    #[test]
    fn one_record_per_two_column_line(
        rows in prop::collection::vec(("[a-z0-9]{1,8}", "[0-9 ()\\-]{1,20}"), 0..20)
    ) {
        let content: String = rows
            .iter()
            .map(|(id, cell)| format!("{},{}\n", id, cell))
            .collect();
        let ids: Vec<String> = records(&content).map(|r| r.id).collect();
        let expected: Vec<String> = rows.iter().map(|(id, _)| id.clone()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn compare_is_symmetric(a in "\\+?[0-9 \\-]{0,14}", b in "\\+?[0-9 \\-]{0,14}") {
        let comparator = PhoneNumberComparator::default();
        prop_assert_eq!(comparator.compare(&a, &b, "US"), comparator.compare(&b, &a, "US"));
    }

    #[test]
    fn compare_is_reflexive_for_generated_numbers(
        (number, country) in prop_oneof![
            ("(212|415|650)[2-9][0-9]{6}", Just("US")),
            ("11[2-8][0-9]{7}", Just("AR")),
        ]
    ) {
        prop_assume!(canonical(&number, country).is_some());
        let comparator = PhoneNumberComparator::default();
        prop_assert!(comparator.compare(&number, &number, country), "{} in {}", number, country);

        let international = canonical(&number, country).unwrap_or_default();
        prop_assert!(comparator.compare(&number, &international, country));
    }
}

#[test]
fn compare_is_reflexive_for_valid_numbers() {
    let comparator = PhoneNumberComparator::default();
    for (number, country) in [("6502530000", "US"), ("+44 20 7031 3000", "GB"), ("11 2345-6789", "AR")] {
        assert!(comparator.compare(number, number, country), "{} in {}", number, country);
    }
}
