pub mod comparator;
pub mod error;
pub mod extraction;
pub mod format;
pub mod mcp_server;
pub mod patterns;
pub mod reconcile;
pub mod rows;

pub use comparator::{canonical, PhoneNumberComparator, DEFAULT_COUNTRY};
pub use error::{ExtractorError, Result};
pub use extraction::{create_phone_extractor, ExtractorKind, PhoneNumberExtractor, StructuredPhoneExtractor};
pub use format::{format_phone_number, validate_phone_number, PhoneFormat};
pub use reconcile::{reconcile, summarize, ReconciliationSummary, RecordReconciliation};
pub use rows::{parse_csv_phone_numbers, records, ParsedRow, Record};

/// Extracts normalized phone numbers from one raw cell using the structured extractor.
pub fn extract_phone_numbers(data: &str) -> Vec<String> {
    StructuredPhoneExtractor::new().extract(data)
}

/// Installs the `tracing` subscriber shared by the binaries.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
