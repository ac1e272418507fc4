use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use phone_extractor::{init_logging, records, ExtractorError, ParsedRow, PhoneNumberExtractor, Record, StructuredPhoneExtractor};
use rayon::prelude::*;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Extract phone numbers from the second column of a CSV/TSV export
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the CSV file
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Process only the first N records (optional)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Verbose output, including records without phone numbers
    #[arg(short, long)]
    verbose: bool,

    /// Show a progress bar and write statistics to outputstats.json
    #[arg(short, long)]
    stats: bool,

    /// Number of threads to use (0 = auto)
    #[arg(short, long, default_value = "0")]
    threads: usize,
}

fn main() -> Result<(), ExtractorError> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .map_err(|e| ExtractorError::InvalidRequest(e.to_string()))?;
        info!(threads = args.threads, "using configured thread count");
    } else {
        info!(threads = num_cpus::get(), "using auto-detected thread count");
    }

    let start = Instant::now();
    let content = fs::read_to_string(&args.file_path)?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let input: Vec<Record> = records(&content).take(limit).collect();

    if !args.stats {
        println!("Processing file: {}", args.file_path.display());
    }

    let progress_bar = if args.stats {
        let pb = ProgressBar::new(input.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records ({eta})")
                .map_err(|e| ExtractorError::InvalidRequest(e.to_string()))?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let extractor = StructuredPhoneExtractor::new();
    let rows: Vec<(usize, ParsedRow)> = input
        .par_iter()
        .map(|record| {
            let row = ParsedRow {
                id: record.id.clone(),
                phone_numbers: extractor.extract(&record.phone_data),
            };
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
            (record.line, row)
        })
        .collect();

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    if args.stats {
        write_stats(&args, &rows, start)?;
        return Ok(());
    }

    for (line, row) in &rows {
        if row.phone_numbers.is_empty() {
            if args.verbose {
                println!("\nLine {} [{}]:\n  No phone numbers found", line, row.id);
            }
            continue;
        }
        println!("\nLine {} [{}]:", line, row.id);
        for phone in &row.phone_numbers {
            println!("  \"{}\"", phone);
        }
    }

    Ok(())
}

fn write_stats(args: &Args, rows: &[(usize, ParsedRow)], start: Instant) -> Result<(), ExtractorError> {
    let total_phones: usize = rows.iter().map(|(_, r)| r.phone_numbers.len()).sum();
    let empty_rows = rows.iter().filter(|(_, r)| r.phone_numbers.is_empty()).count();

    // Histogram of how many numbers each record produced
    let mut per_record: HashMap<usize, usize> = HashMap::new();
    for (_, row) in rows {
        *per_record.entry(row.phone_numbers.len()).or_insert(0) += 1;
    }
    let mut distribution: Vec<_> = per_record.into_iter().collect();
    distribution.sort_unstable();
    let distribution: Vec<serde_json::Value> = distribution
        .into_iter()
        .map(|(phones, count)| json!({ "phones": phones, "records": count }))
        .collect();

    if empty_rows > 0 {
        warn!(empty_rows, "records without any phone number");
    }

    let stats_json = json!({
        "summary": {
            "total_records": rows.len(),
            "total_phone_numbers": total_phones,
            "records_without_phones": empty_rows,
            "elapsed_seconds": start.elapsed().as_secs_f64(),
            "file_path": args.file_path.to_string_lossy()
        },
        "distribution": distribution
    });

    fs::write("outputstats.json", serde_json::to_string_pretty(&stats_json)?)?;
    println!("Statistics written to outputstats.json");
    Ok(())
}
