use clap::Parser;
use phone_extractor::{init_logging, reconcile, summarize, ParsedRow, PhoneNumberComparator, RecordReconciliation, ReconciliationSummary, DEFAULT_COUNTRY};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Compare extracted CSV phone numbers with numbers from an enrichment source
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON array of parsed rows as written by json_extractor (`-` for stdin)
    #[arg(index = 1)]
    records: PathBuf,

    /// JSON object mapping record id to the enrichment source's phone numbers
    #[arg(index = 2)]
    enrichment: PathBuf,

    /// Region used for numbers that are not in international form
    #[arg(short, long, env = "PHONE_COUNTRY", default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Only print the summary
    #[arg(short, long)]
    summary_only: bool,

    /// Debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    summary: ReconciliationSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    records: Vec<RecordReconciliation>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rows: Vec<ParsedRow> = serde_json::from_reader(open_input(&args.records)?)?;
    let enrichment: HashMap<String, Vec<String>> =
        serde_json::from_reader(BufReader::new(File::open(&args.enrichment)?))?;
    debug!(rows = rows.len(), enriched = enrichment.len(), "loaded inputs");

    let comparator = PhoneNumberComparator::new(args.country.as_str());
    let results = reconcile_rows(&comparator, &rows, &enrichment, &args.country);
    let summary = summarize(&results);

    let report = Report {
        summary,
        records: if args.summary_only { Vec::new() } else { results },
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn open_input(path: &Path) -> io::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Records missing from the enrichment source are reconciled against an empty list.
fn reconcile_rows(
    comparator: &PhoneNumberComparator,
    rows: &[ParsedRow],
    enrichment: &HashMap<String, Vec<String>>,
    country: &str,
) -> Vec<RecordReconciliation> {
    rows.iter()
        .map(|row| {
            let external = enrichment.get(&row.id).map(Vec::as_slice).unwrap_or(&[]);
            if external.is_empty() {
                warn!(id = %row.id, "no enrichment numbers for record");
            }
            reconcile(comparator, row, external, country)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_rows_with_missing_enrichment() {
        let rows = vec![
            ParsedRow {
                id: "1".to_string(),
                phone_numbers: vec!["650 2530000".to_string()],
            },
            ParsedRow {
                id: "2".to_string(),
                phone_numbers: vec![],
            },
        ];
        let mut enrichment = HashMap::new();
        enrichment.insert("1".to_string(), vec!["+16502530000".to_string()]);

        let comparator = PhoneNumberComparator::default();
        let results = reconcile_rows(&comparator, &rows, &enrichment, "US");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].matched_phones, vec!["650 2530000"]);
        assert!(results[1].api_phones.is_empty());
        assert_eq!(summarize(&results).validated, 1);
    }
}
