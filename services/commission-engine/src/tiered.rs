//! Tiered (progressive) commission model
//!
//! Revenue is sliced across the level's ordered brackets and each slice is
//! paid at its bracket's marginal rate, on top of the level's fixed base.
//!
//! Rate escalation: once revenue reaches the first threshold, the first
//! bracket is paid at the second bracket's rate instead of its discounted one.

use rust_decimal::Decimal;
use types::bracket::{total_commission, BracketBreakdownEntry};
use types::level::SellerLevel;
use types::numeric::Revenue;

use crate::rates::{rate_table, RateTable};

/// Slice `revenue` across the brackets of `level`.
///
/// Entries are emitted in ascending order, only for slices with a positive
/// amount. Revenue above the last threshold is not counted.
pub fn compute_tiered_breakdown(revenue: Revenue, level: SellerLevel) -> Vec<BracketBreakdownEntry> {
    breakdown_with_table(revenue, rate_table(level))
}

/// Slice `revenue` across an explicit table.
///
/// The table is taken by value; the escalation override only touches this copy.
pub fn breakdown_with_table(revenue: Revenue, mut table: RateTable) -> Vec<BracketBreakdownEntry> {
    let revenue = revenue.as_decimal();
    let brackets = &mut table.brackets;

    if revenue >= brackets[0].threshold {
        brackets[0].rate = brackets[1].rate;
    }

    let mut entries = Vec::with_capacity(brackets.len());
    let mut previous = Decimal::ZERO;
    let mut index = 1u32;

    for bracket in brackets.iter() {
        let ceiling = revenue.min(bracket.threshold);
        let amount = (ceiling - previous).max(Decimal::ZERO);

        if amount > Decimal::ZERO {
            entries.push(BracketBreakdownEntry {
                index,
                from: previous,
                to: bracket.threshold,
                rate: bracket.rate,
                amount_in_bracket: amount,
                commission_in_bracket: amount * bracket.rate,
            });
            index += 1;
        }

        previous = bracket.threshold;
        if revenue <= bracket.threshold {
            break;
        }
    }

    entries
}

/// Headline payout of the tiered model: bracket commissions plus fixed base.
pub fn compute_tiered_total(revenue: Revenue, level: SellerLevel) -> Decimal {
    let table = rate_table(level);
    let commission = total_commission(&breakdown_with_table(revenue, table));
    table.fixed_base + commission
}
