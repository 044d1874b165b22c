//! Ticket field extraction module.

mod parser;
pub mod points;
pub mod rules;

pub use parser::{ParseOutcome, TicketParser};
pub use points::{PointsLine, PointsSummary};
