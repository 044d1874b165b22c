//! Rule-based field extractors for receipt text.
//!
//! Each extractor applies an explicit, ordered list of patterns with a
//! documented tie-break: first-match-wins for the id cascade,
//! last-match-wins for labeled totals, max-wins for the total fallback.
//! Extractors degrade to "absent" on noisy text; they never fail.

pub mod dates;
pub mod id;
pub mod patterns;
pub mod products;
pub mod totals;

pub use dates::{DateExtractor, extract_date};
pub use id::{IdExtractor, extract_id};
pub use products::detect_products;
pub use totals::{TotalExtractor, extract_total};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text, applying this extractor's tie-break.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract every candidate in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single extraction candidate with its provenance.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
