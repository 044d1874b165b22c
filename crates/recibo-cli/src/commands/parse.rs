//! Parse command - extract a structured record from one OCR text dump.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use recibo_core::{ParseOutcome, ParsedTicket, PointsSummary};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (use "-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show the reward points breakdown
    #[arg(long)]
    show_points: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// JSON shape for one parsed ticket.
#[derive(Serialize)]
struct ParseReport<'a> {
    #[serde(flatten)]
    ticket: &'a ParsedTicket,
    points: &'a PointsSummary,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let parser = super::load_parser(config_path)?;

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("Input is empty: {}", args.input.display());
    }

    info!("parsing {}", args.input.display());
    let outcome = parser.parse(&text);
    debug!("parsed in {}ms", outcome.processing_time_ms);

    for warning in &outcome.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    let output = format_outcome(&outcome, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_points {
        println!();
        for line in &outcome.points.detail {
            println!(
                "  {} x{} = {} pts",
                line.product, line.quantity, line.subtotal
            );
        }
        println!(
            "{} Points earned: {}",
            style("ℹ").blue(),
            outcome.points.total
        );
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}

pub fn format_outcome(outcome: &ParseOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = ParseReport {
                ticket: &outcome.ticket,
                points: &outcome.points,
            };
            Ok(serde_json::to_string(&report)?)
        }
        OutputFormat::Csv => format_csv(outcome),
        OutputFormat::Text => Ok(format_text(outcome)),
    }
}

fn format_csv(outcome: &ParseOutcome) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["id", "date", "total", "products", "points"])?;
    wtr.write_record([
        &outcome.ticket.id.clone().unwrap_or_default(),
        &outcome
            .ticket
            .date
            .map(|d| d.to_string())
            .unwrap_or_default(),
        &outcome
            .ticket
            .total
            .map(|t| t.to_string())
            .unwrap_or_default(),
        &format_product_list(&outcome.ticket),
        &outcome.points.total.to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(outcome: &ParseOutcome) -> String {
    let ticket = &outcome.ticket;
    let mut output = String::new();

    output.push_str(&format!(
        "Ticket: {}\n",
        ticket.id.as_deref().unwrap_or("(no id)")
    ));
    output.push_str(&format!(
        "Date:   {}\n",
        ticket
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "(no date)".to_string())
    ));
    output.push_str(&format!(
        "Total:  {}\n",
        ticket
            .total
            .map(|t| format!("${t}"))
            .unwrap_or_else(|| "(no total)".to_string())
    ));

    output.push_str("\nProducts:\n");
    if ticket.products.is_empty() {
        output.push_str("  (none detected)\n");
    }
    for product in &ticket.products {
        output.push_str(&format!("  {} x{}\n", product.name, product.quantity));
    }

    output.push_str(&format!("\nPoints: {}\n", outcome.points.total));

    output
}

pub fn format_product_list(ticket: &ParsedTicket) -> String {
    ticket
        .products
        .iter()
        .map(|p| format!("{} x{}", p.name, p.quantity))
        .collect::<Vec<_>>()
        .join("; ")
}
