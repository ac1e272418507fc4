use serde::{Deserialize, Serialize};

use crate::comparator::PhoneNumberComparator;
use crate::rows::ParsedRow;

/// Locally extracted numbers of one record checked against an external source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReconciliation {
    pub id: String,
    pub csv_phones: Vec<String>,
    pub api_phones: Vec<String>,
    /// CSV numbers the external source confirmed.
    pub matched_phones: Vec<String>,
    /// External numbers not present in the CSV.
    pub new_phones: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    pub total_rows: usize,
    /// Rows for which the external source returned any number.
    pub validated: usize,
    /// Rows with at least one confirmed CSV number.
    pub matched: usize,
    pub new_phones: usize,
}

pub fn reconcile(
    comparator: &PhoneNumberComparator,
    row: &ParsedRow,
    external: &[String],
    country_code: &str,
) -> RecordReconciliation {
    let matched_phones = row
        .phone_numbers
        .iter()
        .filter(|phone| comparator.has_match(phone, external, country_code))
        .cloned()
        .collect();

    RecordReconciliation {
        id: row.id.clone(),
        csv_phones: row.phone_numbers.clone(),
        api_phones: external.to_vec(),
        matched_phones,
        new_phones: comparator.new_phones(external, &row.phone_numbers, country_code),
    }
}

pub fn summarize(results: &[RecordReconciliation]) -> ReconciliationSummary {
    results.iter().fold(
        ReconciliationSummary {
            total_rows: results.len(),
            ..Default::default()
        },
        |mut summary, result| {
            if !result.api_phones.is_empty() {
                summary.validated += 1;
            }
            if !result.matched_phones.is_empty() {
                summary.matched += 1;
            }
            summary.new_phones += result.new_phones.len();
            summary
        },
    )
}
