//! Config command - manage the catalog configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use recibo_core::ReciboConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the active catalog
    Show,

    /// Write a starter configuration file
    Init(InitArgs),

    /// Check that a configuration file compiles into a usable lexicon
    Validate,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "recibo.json")]
    output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(config_path),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Validate => validate_config(config_path),
    }
}

fn show_config(config_path: Option<&str>) -> anyhow::Result<()> {
    if config_path.is_none() {
        println!(
            "{} No config file given, showing the built-in catalog.",
            style("ℹ").blue()
        );
    }
    let config = super::load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            args.output.display()
        );
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let config = ReciboConfig::default();
    config.save(&args.output)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        args.output.display()
    );

    Ok(())
}

fn validate_config(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let lexicon = config.lexicon()?;
    let points = config.points_table();

    println!(
        "{} Catalog OK: {} products, {} with points",
        style("✓").green(),
        lexicon.len(),
        points.len()
    );

    Ok(())
}
