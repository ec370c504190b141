//! Rate bracket and breakdown types
//!
//! A bracket is a contiguous revenue slice with its own marginal rate.
//! Breakdown entries are derived per calculation and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a level's rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBracket {
    /// Cumulative revenue ceiling of this bracket
    pub threshold: Decimal,
    /// Marginal commission fraction (0.05 = 5%)
    pub rate: Decimal,
}

impl RateBracket {
    /// Build a bracket from a whole-unit threshold and a rate in basis points.
    pub fn from_bps(threshold: u64, rate_bps: i64) -> Self {
        Self {
            threshold: Decimal::from(threshold),
            rate: Decimal::new(rate_bps, 4),
        }
    }
}

/// A single revenue slice of a tiered calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketBreakdownEntry {
    /// 1-based position among the emitted entries
    pub index: u32,
    pub from: Decimal,
    pub to: Decimal,
    pub rate: Decimal,
    pub amount_in_bracket: Decimal,
    pub commission_in_bracket: Decimal,
}

/// Sum of revenue covered by a breakdown.
pub fn total_amount(entries: &[BracketBreakdownEntry]) -> Decimal {
    entries.iter().map(|e| e.amount_in_bracket).sum()
}

/// Sum of commission earned across a breakdown.
pub fn total_commission(entries: &[BracketBreakdownEntry]) -> Decimal {
    entries.iter().map(|e| e.commission_in_bracket).sum()
}
