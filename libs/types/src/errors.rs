//! Error types for the commission simulator
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Convenience alias used across the workspace
pub type CommissionResult<T> = Result<T, CommissionError>;

/// Top-level calculation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommissionError {
    /// Input outside the domain of the calculation (negative revenue, bad sweep bounds)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No rate table exists for the requested seller level
    #[error("No rate table configured for seller level: {level}")]
    Configuration { level: String },

    /// A rate table breaks its ordering rules
    #[error("Invalid rate table for {level}: {reason}")]
    InvalidTable { level: String, reason: String },
}

impl CommissionError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CommissionError::InvalidInput(message.into())
    }

    pub fn unknown_level(level: impl Into<String>) -> Self {
        CommissionError::Configuration {
            level: level.into(),
        }
    }
}
