//! Batch command - parse a directory of OCR text dumps.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use recibo_core::ParseOutcome;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "scans/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: super::parse::OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Skip unreadable files instead of stopping
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of parsing a single file.
struct FileResult {
    path: PathBuf,
    outcome: Option<ParseOutcome>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let parser = super::load_parser(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to parse",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let outcome = parser.parse(&text);
                debug!(
                    "parsed {} in {}ms",
                    path.display(),
                    outcome.processing_time_ms
                );
                results.push(FileResult {
                    path,
                    outcome: Some(outcome),
                    error: None,
                });
            }
            Err(e) => {
                if !args.continue_on_error {
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
                warn!("failed to read {}: {}", path.display(), e);
                results.push(FileResult {
                    path,
                    outcome: None,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write per-file outputs
    if let Some(ref output_dir) = args.output_dir {
        for result in &results {
            let Some(outcome) = &result.outcome else {
                continue;
            };

            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("ticket");

            let extension = match args.format {
                super::parse::OutputFormat::Json => "json",
                super::parse::OutputFormat::Csv => "csv",
                super::parse::OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = super::parse::format_outcome(outcome, args.format)?;
            fs::write(&output_path, content)?;
            debug!("wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let parsed: Vec<_> = results.iter().filter(|r| r.outcome.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let partial = parsed
        .iter()
        .filter(|r| {
            r.outcome
                .as_ref()
                .is_some_and(|o| !o.warnings.is_empty())
        })
        .count();

    println!();
    println!(
        "{} Parsed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} parsed ({} with missing fields), {} unreadable",
        style(parsed.len()).green(),
        style(partial).yellow(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Unreadable files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "id",
        "date",
        "total",
        "products",
        "points",
        "missing_fields",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(outcome) = &result.outcome {
            let ticket = &outcome.ticket;
            wtr.write_record([
                filename,
                "parsed",
                &ticket.id.clone().unwrap_or_default(),
                &ticket.date.map(|d| d.to_string()).unwrap_or_default(),
                &ticket.total.map(|t| t.to_string()).unwrap_or_default(),
                &super::parse::format_product_list(ticket),
                &outcome.points.total.to_string(),
                &ticket.missing_fields().join(" "),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
