//! New-vs-legacy comparison
//!
//! `percent_difference` is `None` when the legacy payout is zero; callers
//! render it as "n/a" rather than an infinite or NaN percentage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::bracket::BracketBreakdownEntry;
use types::level::SellerLevel;
use types::numeric::Revenue;

use crate::legacy::compute_legacy_total;
use crate::tiered::{compute_tiered_breakdown, compute_tiered_total};

/// Both payouts for one set of inputs, un-rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelComparison {
    pub revenue: Revenue,
    pub level: SellerLevel,
    pub is_launch_period: bool,
    pub tiered_total: Decimal,
    pub legacy_total: Decimal,
    /// `tiered_total - legacy_total`
    pub difference: Decimal,
    /// `difference / legacy_total * 100`, undefined when `legacy_total` is zero
    pub percent_difference: Option<Decimal>,
}

/// Comparison plus the tiered breakdown it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionQuote {
    pub comparison: ModelComparison,
    pub breakdown: Vec<BracketBreakdownEntry>,
}

/// Relative difference in percent; `None` when the base is zero.
pub fn percent_difference(difference: Decimal, legacy_total: Decimal) -> Option<Decimal> {
    if legacy_total.is_zero() {
        return None;
    }
    difference
        .checked_div(legacy_total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

pub fn compare_models(revenue: Revenue, level: SellerLevel, is_launch_period: bool) -> ModelComparison {
    let tiered_total = compute_tiered_total(revenue, level);
    let legacy_total = compute_legacy_total(revenue, is_launch_period);
    let difference = tiered_total - legacy_total;

    tracing::debug!(
        %revenue,
        %level,
        is_launch_period,
        %tiered_total,
        %legacy_total,
        "compared commission models"
    );

    ModelComparison {
        revenue,
        level,
        is_launch_period,
        tiered_total,
        legacy_total,
        difference,
        percent_difference: percent_difference(difference, legacy_total),
    }
}

pub fn quote(revenue: Revenue, level: SellerLevel, is_launch_period: bool) -> CommissionQuote {
    CommissionQuote {
        comparison: compare_models(revenue, level, is_launch_period),
        breakdown: compute_tiered_breakdown(revenue, level),
    }
}
