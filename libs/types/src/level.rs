//! Seller levels
//!
//! Each level owns its own rate table and fixed base salary (see the
//! `commission-engine` crate). The textual key is the only place an unknown
//! level can enter the system, so parsing never falls back to a default.
//! URL segments and JSON share one parser: keys are trimmed and matched
//! case-insensitively, and the key `especialista` is accepted for `Specialist`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CommissionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SellerLevel {
    Junior,
    Senior,
    Specialist,
}

impl SellerLevel {
    /// All levels, in ascending seniority.
    pub const ALL: [SellerLevel; 3] = [
        SellerLevel::Junior,
        SellerLevel::Senior,
        SellerLevel::Specialist,
    ];

    /// Lowercase key used in URLs and JSON.
    pub fn as_key(&self) -> &'static str {
        match self {
            SellerLevel::Junior => "junior",
            SellerLevel::Senior => "senior",
            SellerLevel::Specialist => "specialist",
        }
    }

    /// Capitalised label for tables and chart legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            SellerLevel::Junior => "Junior",
            SellerLevel::Senior => "Senior",
            SellerLevel::Specialist => "Specialist",
        }
    }
}

impl FromStr for SellerLevel {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "junior" => Ok(SellerLevel::Junior),
            "senior" => Ok(SellerLevel::Senior),
            "specialist" | "especialista" => Ok(SellerLevel::Specialist),
            _ => Err(CommissionError::unknown_level(s)),
        }
    }
}

impl TryFrom<String> for SellerLevel {
    type Error = CommissionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SellerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        assert_eq!("junior".parse::<SellerLevel>().unwrap(), SellerLevel::Junior);
        assert_eq!("Senior".parse::<SellerLevel>().unwrap(), SellerLevel::Senior);
        assert_eq!(
            "especialista".parse::<SellerLevel>().unwrap(),
            SellerLevel::Specialist
        );
    }

    #[test]
    fn test_unknown_level_is_configuration_error() {
        let err = "intern".parse::<SellerLevel>().unwrap_err();
        assert_eq!(
            err,
            CommissionError::Configuration {
                level: "intern".to_string()
            }
        );
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_string(&SellerLevel::Specialist).unwrap();
        assert_eq!(json, "\"specialist\"");

        let parsed: SellerLevel = serde_json::from_str("\"especialista\"").unwrap();
        assert_eq!(parsed, SellerLevel::Specialist);
    }

    #[test]
    fn test_serde_and_from_str_agree() {
        for key in ["Senior", " junior ", "SPECIALIST", "Especialista"] {
            let from_json: SellerLevel = serde_json::from_str(&format!("\"{}\"", key)).unwrap();
            assert_eq!(from_json, key.parse::<SellerLevel>().unwrap());
        }

        let err = serde_json::from_str::<SellerLevel>("\"intern\"").unwrap_err();
        assert!(err.to_string().contains("intern"));
    }

    #[test]
    fn test_display_roundtrip() {
        for level in SellerLevel::ALL {
            assert_eq!(level.to_string().parse::<SellerLevel>().unwrap(), level);
        }
    }
}
