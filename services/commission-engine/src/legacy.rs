//! Legacy flat-rate commission model
//!
//! One rate over the whole revenue (halved during a launch period) plus
//! fixed step bonuses. No bracket structure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::Revenue;

/// Bonus paid once revenue reaches `threshold`. Steps are additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusStep {
    pub threshold: Decimal,
    pub amount: Decimal,
}

/// Parameters of the legacy model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPolicy {
    /// Flat rate outside a launch period
    pub standard_rate: Decimal,
    /// Flat rate during a launch period
    pub launch_rate: Decimal,
    pub bonus_steps: Vec<BonusStep>,
}

impl Default for LegacyPolicy {
    fn default() -> Self {
        Self {
            standard_rate: Decimal::new(7, 2),
            launch_rate: Decimal::new(35, 3),
            bonus_steps: vec![
                BonusStep {
                    threshold: Decimal::from(20_000),
                    amount: Decimal::from(800),
                },
                BonusStep {
                    threshold: Decimal::from(40_000),
                    amount: Decimal::from(400),
                },
            ],
        }
    }
}

impl LegacyPolicy {
    pub fn rate(&self, is_launch_period: bool) -> Decimal {
        if is_launch_period {
            self.launch_rate
        } else {
            self.standard_rate
        }
    }

    /// Sum of every bonus step the revenue has reached.
    pub fn bonus(&self, revenue: Revenue) -> Decimal {
        self.bonus_steps
            .iter()
            .filter(|step| revenue.as_decimal() >= step.threshold)
            .map(|step| step.amount)
            .sum()
    }

    pub fn total(&self, revenue: Revenue, is_launch_period: bool) -> Decimal {
        revenue.as_decimal() * self.rate(is_launch_period) + self.bonus(revenue)
    }
}

/// Legacy payout under the standard policy.
pub fn compute_legacy_total(revenue: Revenue, is_launch_period: bool) -> Decimal {
    LegacyPolicy::default().total(revenue, is_launch_period)
}
