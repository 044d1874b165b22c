//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::Path;

use recibo_core::{ReciboConfig, TicketParser};

/// Load the catalog config (or defaults) and build a parser from it.
pub fn load_parser(config_path: Option<&str>) -> anyhow::Result<TicketParser> {
    let config = load_config(config_path)?;
    Ok(TicketParser::from_config(&config)?)
}

/// Load the catalog config from a path, falling back to the built-in menu.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ReciboConfig> {
    match config_path {
        Some(path) => Ok(ReciboConfig::from_file(Path::new(path))?),
        None => Ok(ReciboConfig::default()),
    }
}
