//! Display formatting
//!
//! Engine values stay un-rounded; these helpers round for presentation only
//! (2 dp, HALF_UP).

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Display precision for currency and percentages.
const DISPLAY_DP: u32 = 2;

/// Currency prefix used by every rendered amount.
pub const CURRENCY_PREFIX: &str = "R$";

/// Placeholder for an undefined percentage.
pub const UNDEFINED_PERCENT: &str = "n/a";

/// `R$1,234.56`; negatives render as `-R$1,234.56`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_display(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_PREFIX, group_thousands(rounded.abs()))
}

/// Whole-unit amount with separators and no decimals, e.g. `R$25,000`.
pub fn format_currency_whole(value: Decimal) -> String {
    let whole = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if whole.is_sign_negative() && !whole.is_zero() { "-" } else { "" };
    let digits = whole.abs().trunc().to_string();
    format!("{}{}{}", sign, CURRENCY_PREFIX, insert_separators(&digits))
}

/// Fraction as a percentage: `0.05` → `5.00%`.
pub fn format_rate(rate: Decimal) -> String {
    format_percent(rate * Decimal::ONE_HUNDRED)
}

/// Already-scaled percentage: `15.517` → `15.52%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = round_display(percent);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{:.2}%", sign, rounded.abs())
}

/// Optional percentage, `n/a` when undefined.
pub fn format_optional_percent(percent: Option<Decimal>) -> String {
    percent
        .map(format_percent)
        .unwrap_or_else(|| UNDEFINED_PERCENT.to_string())
}

/// Compact axis label: `150000` → `R$150k`.
pub fn format_axis_thousands(value: Decimal) -> String {
    let thousands = (value / Decimal::ONE_THOUSAND).normalize();
    format!("{}{}k", CURRENCY_PREFIX, thousands)
}

fn round_display(v: Decimal) -> Decimal {
    v.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Non-negative value with exactly two decimals and grouped integer part.
fn group_thousands(value: Decimal) -> String {
    let text = format!("{:.2}", value);
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", insert_separators(int_part), frac_part),
        None => insert_separators(&text),
    }
}

fn insert_separators(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
