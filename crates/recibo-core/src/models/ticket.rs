//! Parsed ticket data model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured record recovered from one OCR-scanned receipt.
///
/// Every header field is optional: noisy OCR text routinely loses the
/// folio, date or total, and a partial record is a normal outcome. The
/// record owns no resources and has no identity beyond its field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTicket {
    /// Printed transaction identifier (folio), upper-cased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Purchase date as an ISO calendar date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Receipt total with two fraction digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,

    /// Detected products in first-detection order, one entry per
    /// canonical product.
    #[serde(default)]
    pub products: Vec<DetectedProduct>,
}

/// A product mention accumulated across receipt lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedProduct {
    /// Canonical product name from the lexicon.
    pub name: String,

    /// Units detected, at least 1.
    pub quantity: u32,
}

impl ParsedTicket {
    /// Names of the header fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("id");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.total.is_none() {
            missing.push("total");
        }
        missing
    }

    /// True when nothing at all was recovered from the text.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.date.is_none() && self.total.is_none() && self.products.is_empty()
    }
}
