//! Transaction id (folio) extraction.

use super::{ExtractionMatch, FieldExtractor};
use super::patterns::{ID_GENERIC, ID_LABELED};

/// Id field extractor.
///
/// Tries the specific receipt labels first, then the generic id/number
/// label. The first pattern that matches anywhere in the text wins, and
/// the captured token is upper-cased.
pub struct IdExtractor;

impl IdExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IdExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for pattern in [&*ID_LABELED, &*ID_GENERIC] {
            if let Some(caps) = pattern.captures(text) {
                let token = caps.get(1)?;
                return Some(
                    ExtractionMatch::new(token.as_str().to_uppercase(), &caps[0])
                        .with_position(token.start(), token.end()),
                );
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        for pattern in [&*ID_LABELED, &*ID_GENERIC] {
            for caps in pattern.captures_iter(text) {
                if let Some(token) = caps.get(1) {
                    results.push(
                        ExtractionMatch::new(token.as_str().to_uppercase(), &caps[0])
                            .with_position(token.start(), token.end()),
                    );
                }
            }
        }
        results
    }
}

/// Extract the transaction id from normalized receipt text.
pub fn extract_id(text: &str) -> Option<String> {
    IdExtractor::new().extract(text).map(|m| m.value)
}
