//! Core library for noisy OCR receipt parsing.
//!
//! This crate provides:
//! - Text normalization and logical line segmentation for OCR output
//! - Product mention detection against a configurable synonym lexicon,
//!   with per-mention quantity resolution
//! - Rule-based field extraction (folio, date, total) with explicit
//!   tie-break rules
//! - Reward point scoring for detected products
//!
//! The parsing core is pure and deterministic: text in, record out. Image
//! capture, OCR invocation, persistence and submission policies live in
//! the host application.

pub mod error;
pub mod models;
pub mod text;
pub mod ticket;

pub use error::{CatalogError, ReciboError, Result};
pub use models::catalog::{Lexicon, PointsTable};
pub use models::config::ReciboConfig;
pub use models::ticket::{DetectedProduct, ParsedTicket};
pub use text::{normalize, segment};
pub use ticket::{ParseOutcome, PointsSummary, TicketParser};
