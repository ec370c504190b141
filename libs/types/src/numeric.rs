//! Fixed-point revenue amounts
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! A `Revenue` can never be negative; construction is the only validation point.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{CommissionError, CommissionResult};

/// Billed revenue fed into both compensation models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Revenue(Decimal);

impl Revenue {
    pub const ZERO: Revenue = Revenue(Decimal::ZERO);

    /// Validate and wrap a decimal amount. Negative amounts are rejected, not clamped.
    pub fn try_new(value: Decimal) -> CommissionResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(CommissionError::invalid_input(format!(
                "revenue must be non-negative, got {}",
                value
            )));
        }
        // Normalise -0 to 0
        Ok(Revenue(value.abs()))
    }

    pub fn from_u64(value: u64) -> Self {
        Revenue(Decimal::from(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Revenue {
    type Error = CommissionError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Revenue::try_new(value)
    }
}

impl From<Revenue> for Decimal {
    fn from(value: Revenue) -> Self {
        value.0
    }
}

impl FromStr for Revenue {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|e| {
            CommissionError::invalid_input(format!("revenue '{}' is not a number: {}", s, e))
        })?;
        Revenue::try_new(value)
    }
}

impl fmt::Display for Revenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_revenue_rejected() {
        let result = Revenue::try_new(Decimal::from(-1));
        assert!(matches!(result, Err(CommissionError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_and_positive_accepted() {
        assert!(Revenue::try_new(Decimal::ZERO).unwrap().is_zero());
        assert_eq!(
            Revenue::try_new(Decimal::from(30_000)).unwrap(),
            Revenue::from_u64(30_000)
        );
    }

    #[test]
    fn test_parse_from_str() {
        let revenue: Revenue = "24999.50".parse().unwrap();
        assert_eq!(revenue.as_decimal(), Decimal::from_str_exact("24999.50").unwrap());

        assert!("abc".parse::<Revenue>().is_err());
        assert!("-10".parse::<Revenue>().is_err());
    }

    #[test]
    fn test_serde_rejects_negative() {
        let ok: Revenue = serde_json::from_str("\"1500\"").unwrap();
        assert_eq!(ok, Revenue::from_u64(1_500));

        let err = serde_json::from_str::<Revenue>("\"-5\"");
        assert!(err.is_err());
    }
}
