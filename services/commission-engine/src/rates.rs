//! Static per-level rate tables
//!
//! Tables are compiled-in constant data and are only ever handed out as
//! value copies, so no caller can mutate the shared configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::bracket::RateBracket;
use types::errors::{CommissionError, CommissionResult};
use types::level::SellerLevel;

/// Number of brackets every level declares.
pub const BRACKET_COUNT: usize = 5;

// ── Rate tables: (threshold, rate in basis points) ───────────────────────
//
// | Level      | Base | B1           | B2           | B3          | B4            | B5             |
// |------------|------|--------------|--------------|-------------|---------------|----------------|
// | Junior     | 1300 | 25k @ 1.5%   | 25k @ 5%     | 40k @ 7%    | 60k @ 9.5%    | 300k @ 12%     |
// | Senior     | 1550 | 30k @ 2%     | 30k @ 6%     | 50k @ 8%    | 70k @ 10.5%   | 300k @ 13%     |
// | Specialist | 2000 | 35k @ 2.5%   | 35k @ 7%     | 60k @ 9%    | 90k @ 11.5%   | 300k @ 14%     |
//
// B2 shares B1's threshold: it has no width and only supplies the escalated rate.

const JUNIOR_BRACKETS: [(u64, i64); BRACKET_COUNT] = [
    (25_000, 150),
    (25_000, 500),
    (40_000, 700),
    (60_000, 950),
    (300_000, 1_200),
];

const SENIOR_BRACKETS: [(u64, i64); BRACKET_COUNT] = [
    (30_000, 200),
    (30_000, 600),
    (50_000, 800),
    (70_000, 1_050),
    (300_000, 1_300),
];

const SPECIALIST_BRACKETS: [(u64, i64); BRACKET_COUNT] = [
    (35_000, 250),
    (35_000, 700),
    (60_000, 900),
    (90_000, 1_150),
    (300_000, 1_400),
];

const JUNIOR_FIXED_BASE: u64 = 1_300;
const SENIOR_FIXED_BASE: u64 = 1_550;
const SPECIALIST_FIXED_BASE: u64 = 2_000;

/// A level's complete compensation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub level: SellerLevel,
    pub fixed_base: Decimal,
    pub brackets: [RateBracket; BRACKET_COUNT],
}

impl RateTable {
    /// Highest revenue the table accounts for; anything above is not counted.
    pub fn ceiling(&self) -> Decimal {
        self.brackets[BRACKET_COUNT - 1].threshold
    }

    /// Thresholds must be non-decreasing and rates non-negative.
    pub fn validate(&self) -> CommissionResult<()> {
        let mut previous = Decimal::ZERO;
        for (i, bracket) in self.brackets.iter().enumerate() {
            if bracket.threshold < previous {
                return Err(CommissionError::InvalidTable {
                    level: self.level.to_string(),
                    reason: format!(
                        "bracket {} threshold {} below previous {}",
                        i + 1,
                        bracket.threshold,
                        previous
                    ),
                });
            }
            if bracket.rate.is_sign_negative() {
                return Err(CommissionError::InvalidTable {
                    level: self.level.to_string(),
                    reason: format!("bracket {} has negative rate {}", i + 1, bracket.rate),
                });
            }
            previous = bracket.threshold;
        }
        Ok(())
    }
}

/// Value copy of the rate table for `level`.
pub fn rate_table(level: SellerLevel) -> RateTable {
    let (raw, base) = match level {
        SellerLevel::Junior => (JUNIOR_BRACKETS, JUNIOR_FIXED_BASE),
        SellerLevel::Senior => (SENIOR_BRACKETS, SENIOR_FIXED_BASE),
        SellerLevel::Specialist => (SPECIALIST_BRACKETS, SPECIALIST_FIXED_BASE),
    };

    RateTable {
        level,
        fixed_base: Decimal::from(base),
        brackets: raw.map(|(threshold, bps)| RateBracket::from_bps(threshold, bps)),
    }
}

/// Look up a table by its textual level key.
///
/// Unknown keys fail with `CommissionError::Configuration`; there is no default level.
pub fn rate_table_for_key(key: &str) -> CommissionResult<RateTable> {
    let level: SellerLevel = key.parse()?;
    Ok(rate_table(level))
}

/// Fixed base salary paid regardless of revenue.
pub fn fixed_base(level: SellerLevel) -> Decimal {
    rate_table(level).fixed_base
}

/// Tables for every level, in `SellerLevel::ALL` order.
pub fn all_rate_tables() -> Vec<RateTable> {
    SellerLevel::ALL.iter().map(|level| rate_table(*level)).collect()
}
