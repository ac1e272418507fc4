use clap::Parser;
use phone_extractor::{init_logging, parse_csv_phone_numbers};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract phone numbers from a CSV export with JSON output")]
struct Args {
    /// Path to the CSV file
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Keep only the first N records
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output JSON file path
    #[arg(short, long, default_value = "records.json")]
    output: PathBuf,

    /// Log extraction details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Processing file: {}", args.file_path.display());
    let content = fs::read_to_string(&args.file_path)?;

    let mut rows = parse_csv_phone_numbers(&content);
    if let Some(limit) = args.limit {
        rows.truncate(limit);
        info!(limit, "limited output records");
    }

    let total_phones: usize = rows.iter().map(|r| r.phone_numbers.len()).sum();
    println!("Found {} phone numbers in {} records", total_phones, rows.len());

    let json_output = serde_json::to_string_pretty(&rows)?;
    fs::write(&args.output, json_output)?;
    println!("Results written to {}", args.output.display());

    Ok(())
}
