//! Ticket parsing orchestrator.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::catalog::{Lexicon, PointsTable};
use crate::models::config::ReciboConfig;
use crate::models::ticket::ParsedTicket;
use crate::text::{normalize, segment};

use super::points::{self, PointsSummary};
use super::rules::{detect_products, extract_date, extract_id, extract_total};

/// Result of parsing one receipt text.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Extracted ticket record.
    pub ticket: ParsedTicket,
    /// Reward points for the detected products.
    pub points: PointsSummary,
    /// Extraction warnings (fields that came back absent).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Receipt parser holding the read-only catalog tables.
///
/// Pure and deterministic: identical text and tables always produce an
/// identical outcome. Holds no mutable state, so one parser can be shared
/// across threads freely.
pub struct TicketParser {
    lexicon: Lexicon,
    points: PointsTable,
}

impl TicketParser {
    /// Create a parser from prebuilt catalog tables.
    pub fn new(lexicon: Lexicon, points: PointsTable) -> Self {
        Self { lexicon, points }
    }

    /// Create a parser with the built-in menu.
    pub fn with_default_menu() -> Self {
        Self::new(Lexicon::default_menu(), PointsTable::default_menu())
    }

    /// Create a parser from a catalog configuration.
    pub fn from_config(config: &ReciboConfig) -> Result<Self> {
        Ok(Self::new(config.lexicon()?, config.points_table()))
    }

    /// Parse raw OCR text into a structured ticket.
    ///
    /// Never fails: extractors that find nothing leave their field
    /// absent, and an unreadable ticket yields an empty record plus
    /// warnings.
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("parsing ticket from {} characters of OCR text", text.len());

        let clean = normalize(text);
        let lines = segment(text);
        debug!("normalized to {} chars, {} lines", clean.len(), lines.len());

        let id = extract_id(&clean);
        let date = extract_date(&clean);
        let total = extract_total(&clean);
        let products = detect_products(&lines, &self.lexicon);

        let ticket = ParsedTicket {
            id,
            date,
            total,
            products,
        };

        for field in ticket.missing_fields() {
            warnings.push(format!("could not extract {field}"));
        }
        if ticket.products.is_empty() {
            warnings.push("no products detected".to_string());
        }

        let points = points::score(&ticket.products, &self.points);

        debug!(
            "extracted id={:?} date={:?} total={:?} products={} points={}",
            ticket.id,
            ticket.date,
            ticket.total,
            ticket.products.len(),
            points.total
        );

        ParseOutcome {
            ticket,
            points,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
