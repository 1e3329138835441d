//! Error types for bonding-curve calculations
//!
//! Every precondition violation is reported to the immediate caller as a
//! typed error. The engine never panics on caller input and never logs.

use ethers_core::types::U256;
use thiserror::Error;

/// Errors produced by the formula engine and its fixed-point primitives
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Reserve ratio outside `(0, 1_000_000]`, or a power base/exponent
    /// whose ratio is zero, undefined or below one
    #[error("Invalid ratio: {0}")]
    InvalidRatio(String),

    /// Supply or reserve balance is zero where a positive value is required
    #[error("Supply ({supply}) and reserve balance ({reserve_balance}) must be positive")]
    InvalidSupplyOrBalance { supply: U256, reserve_balance: U256 },

    /// Sell amount exceeds the current continuous token supply
    #[error("Insufficient supply: cannot sell {sell_amount} of {supply}")]
    InsufficientSupply { sell_amount: U256, supply: U256 },

    /// An intermediate value would not fit in 256 bits, or the exponent left
    /// the range the approximation tables cover
    #[error("Overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Malformed or unrepresentable token amount
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
}

impl FormulaError {
    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormulaError::InsufficientSupply {
            sell_amount: U256::from(11u64),
            supply: U256::from(10u64),
        };
        assert_eq!(err.to_string(), "Insufficient supply: cannot sell 11 of 10");

        let err = FormulaError::overflow("power base");
        assert_eq!(err.to_string(), "Overflow in power base");
    }
}
