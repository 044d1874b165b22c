//! Data models: parsed ticket record, product catalog, configuration.

pub mod catalog;
pub mod config;
pub mod ticket;

pub use catalog::{Lexicon, LexiconEntry, PointsTable, Synonym};
pub use config::{ProductConfig, ReciboConfig};
pub use ticket::{DetectedProduct, ParsedTicket};
