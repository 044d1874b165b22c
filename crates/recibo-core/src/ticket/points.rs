//! Reward scoring for detected products.
//!
//! The parsing core hands the host everything it needs to award loyalty
//! points: quantity times the product's table value, summed. Duplicate
//! checks, daily limits and reward expiry stay on the host side.

use serde::{Deserialize, Serialize};

use crate::models::catalog::PointsTable;
use crate::models::ticket::DetectedProduct;

/// Reward points earned by one parsed ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsSummary {
    /// Grand total across all detected products.
    pub total: u32,

    /// Per-product breakdown, same order as the detected products.
    pub detail: Vec<PointsLine>,
}

/// Points earned by one detected product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsLine {
    pub product: String,
    pub quantity: u32,
    pub unit_points: u32,
    pub subtotal: u32,
}

/// Score detected products against the points table. Products missing
/// from the table contribute zero but stay in the breakdown.
pub fn score(products: &[DetectedProduct], table: &PointsTable) -> PointsSummary {
    let mut summary = PointsSummary::default();

    for product in products {
        let unit_points = table.get(&product.name);
        let subtotal = unit_points * product.quantity;
        summary.total += subtotal;
        summary.detail.push(PointsLine {
            product: product.name.clone(),
            quantity: product.quantity,
            unit_points,
            subtotal,
        });
    }

    summary
}
