//! Receipt total extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{CURRENCY_NUMBER, TOTAL_LABELED};
use super::{ExtractionMatch, FieldExtractor};

/// Total field extractor.
///
/// Candidates are labeled totals ("total", optionally qualified by
/// "a pagar"/"mxn"/"pago"). Receipts print subtotal and tax lines before
/// the final amount, so the last labeled occurrence in document order is
/// authoritative. With no label at all, the maximum currency-like number
/// anywhere in the text is used instead.
pub struct TotalExtractor;

impl TotalExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TotalExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next_back()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in TOTAL_LABELED.captures_iter(text) {
            if let Some(amount) = parse_amount(&caps[1]) {
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(amount, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract the receipt total from normalized text.
///
/// Last labeled total wins; falls back to the maximum currency-like
/// number; absent when the text has no currency-like numbers at all.
pub fn extract_total(text: &str) -> Option<Decimal> {
    let extractor = TotalExtractor::new();

    if let Some(labeled) = extractor.extract(text) {
        return Some(labeled.value);
    }

    CURRENCY_NUMBER
        .captures_iter(text)
        .filter_map(|caps| parse_amount(&caps[1]))
        .max()
}

/// Parse a currency-like number, accepting comma or dot decimals.
/// The result always carries exactly two fraction digits.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let normalized = s.replace(',', ".");
    let mut amount = Decimal::from_str(&normalized).ok()?;
    amount.rescale(2);
    Some(amount)
}
