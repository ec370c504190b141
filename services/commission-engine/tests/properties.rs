//! Property tests for the commission engine
//!
//! Covers bracket conservation, ordering, escalation boundaries,
//! monotonicity and idempotence over the whole revenue domain.

use commission_engine::{
    compute_legacy_total, compute_tiered_breakdown, compute_tiered_total, rate_table,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use types::bracket::total_amount;
use types::level::SellerLevel;
use types::numeric::Revenue;

// ═══════════════════════════════════════════════════════════════════
// Strategies
// ═══════════════════════════════════════════════════════════════════

fn any_level() -> impl Strategy<Value = SellerLevel> {
    prop_oneof![
        Just(SellerLevel::Junior),
        Just(SellerLevel::Senior),
        Just(SellerLevel::Specialist),
    ]
}

/// Revenue in cents, up to 500k (beyond the 300k table ceiling).
fn any_revenue() -> impl Strategy<Value = Revenue> {
    (0i64..=50_000_000i64).prop_map(|cents| Revenue::try_new(Decimal::new(cents, 2)).unwrap())
}

proptest! {
    /// Covered revenue equals input revenue clamped at the table ceiling.
    #[test]
    fn prop_amounts_sum_to_clamped_revenue(revenue in any_revenue(), level in any_level()) {
        let entries = compute_tiered_breakdown(revenue, level);
        let expected = revenue.as_decimal().min(rate_table(level).ceiling());
        prop_assert_eq!(total_amount(&entries), expected);
    }

    /// Entries are 1-indexed, ascending, contiguous and strictly positive.
    #[test]
    fn prop_entries_ordered_and_contiguous(revenue in any_revenue(), level in any_level()) {
        let entries = compute_tiered_breakdown(revenue, level);

        for (i, entry) in entries.iter().enumerate() {
            prop_assert_eq!(entry.index as usize, i + 1);
            prop_assert!(entry.amount_in_bracket > Decimal::ZERO);
            prop_assert!(entry.from < entry.to);
            prop_assert_eq!(entry.commission_in_bracket, entry.amount_in_bracket * entry.rate);
        }
        for pair in entries.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        if let Some(first) = entries.first() {
            prop_assert_eq!(first.from, Decimal::ZERO);
        }
    }

    /// Both models never pay less for more revenue.
    #[test]
    fn prop_totals_monotonic(
        a in any_revenue(),
        b in any_revenue(),
        level in any_level(),
        launch in any::<bool>(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_tiered_total(low, level) <= compute_tiered_total(high, level));
        prop_assert!(
            compute_legacy_total(low, launch) <= compute_legacy_total(high, launch)
        );
    }

    /// Identical inputs give identical outputs and leave the table untouched.
    #[test]
    fn prop_idempotent(revenue in any_revenue(), level in any_level(), launch in any::<bool>()) {
        let table_before = rate_table(level);

        let first = compute_tiered_breakdown(revenue, level);
        let second = compute_tiered_breakdown(revenue, level);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(compute_tiered_total(revenue, level), compute_tiered_total(revenue, level));
        prop_assert_eq!(
            compute_legacy_total(revenue, launch),
            compute_legacy_total(revenue, launch)
        );

        prop_assert_eq!(rate_table(level), table_before);
    }

    /// The first slice is paid at the escalated rate exactly when revenue clears it.
    #[test]
    fn prop_escalation_boundary(revenue in any_revenue(), level in any_level()) {
        let table = rate_table(level);
        let entries = compute_tiered_breakdown(revenue, level);

        if let Some(first) = entries.first() {
            if revenue.as_decimal() >= table.brackets[0].threshold {
                prop_assert_eq!(first.rate, table.brackets[1].rate);
            } else {
                prop_assert_eq!(first.rate, table.brackets[0].rate);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Fixed scenarios
// ═══════════════════════════════════════════════════════════════════

#[test]
fn zero_revenue_pays_base_for_every_level() {
    for level in SellerLevel::ALL {
        assert_eq!(
            compute_tiered_total(Revenue::ZERO, level),
            rate_table(level).fixed_base
        );
    }
}

#[test]
fn legacy_reference_values() {
    assert_eq!(compute_legacy_total(Revenue::ZERO, false), Decimal::ZERO);
    assert_eq!(compute_legacy_total(Revenue::from_u64(20_000), false), Decimal::from(2_200));
    assert_eq!(compute_legacy_total(Revenue::from_u64(40_000), false), Decimal::from(4_000));
    assert_eq!(compute_legacy_total(Revenue::from_u64(40_000), true), Decimal::from(2_600));
}

#[test]
fn junior_escalation_edge() {
    let at = compute_tiered_breakdown(Revenue::from_u64(25_000), SellerLevel::Junior);
    assert_eq!(at[0].rate, Decimal::new(5, 2));

    let below = compute_tiered_breakdown(Revenue::from_u64(24_999), SellerLevel::Junior);
    assert_eq!(below[0].rate, Decimal::new(15, 3));
}

#[test]
fn senior_end_to_end() {
    let entries = compute_tiered_breakdown(Revenue::from_u64(30_000), SellerLevel::Senior);
    assert_eq!(total_amount(&entries), Decimal::from(30_000));
    assert!(entries.iter().all(|e| e.rate == Decimal::new(6, 2)));
    assert_eq!(
        compute_tiered_total(Revenue::from_u64(30_000), SellerLevel::Senior),
        Decimal::from(3_350)
    );
}
