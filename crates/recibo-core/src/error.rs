//! Error types for the recibo-core library.

use thiserror::Error;

/// Main error type for the recibo library.
#[derive(Error, Debug)]
pub enum ReciboError {
    /// Product catalog error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration serialization error.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors raised while building the synonym lexicon and points table.
///
/// These are caller bugs (a broken catalog supplied at startup), not
/// data-quality conditions: a ticket that yields no fields parses fine
/// and simply reports every field as absent.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The lexicon has no products at all.
    #[error("lexicon is empty")]
    Empty,

    /// The same canonical product name appears twice.
    #[error("duplicate canonical product: {0}")]
    DuplicateProduct(String),

    /// A product has an empty synonym list.
    #[error("product has no synonyms: {0}")]
    NoSynonyms(String),

    /// A synonym normalizes to the empty string.
    #[error("empty synonym for product: {0}")]
    EmptySynonym(String),
}

/// Result type for the recibo library.
pub type Result<T> = std::result::Result<T, ReciboError>;
