//! Bancor purchase and sale return formulas
//!
//! Given a continuous token supply `S`, reserve balance `R` and reserve ratio
//! `F` (parts per million):
//!
//! - purchase: `S * ((1 + ΔR / R)^(F / 1_000_000) - 1)`
//! - sale:     `R * (1 - (1 - ΔS / S)^(1_000_000 / F))`
//!
//! Both round toward zero, so a purchase immediately sold back never refunds
//! more than was deposited.

use crate::constants::MAX_RESERVE_RATIO;
use crate::errors::FormulaError;
use crate::power::PowerMath;
use ethers_core::types::U256;

/// Stateless bonding-curve formula
#[derive(Debug, Clone, Copy, Default)]
pub struct BancorFormula;

impl BancorFormula {
    /// Calculate the continuous tokens minted for a reserve deposit
    ///
    /// # Arguments
    /// * `supply` - Current continuous token supply (must be positive)
    /// * `reserve_balance` - Current reserve token balance (must be positive)
    /// * `reserve_ratio` - Reserve ratio in ppm, `1..=1_000_000`
    /// * `deposit_amount` - Reserve tokens deposited
    ///
    /// # Returns
    /// Continuous tokens to mint, truncated toward zero
    pub fn calculate_purchase_return(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u32,
        deposit_amount: U256,
    ) -> Result<U256, FormulaError> {
        Self::validate(supply, reserve_balance, reserve_ratio)?;

        if deposit_amount.is_zero() {
            return Ok(U256::zero());
        }

        // 100% ratio is a straight line: S * ΔR / R
        if reserve_ratio == MAX_RESERVE_RATIO {
            return Ok(checked_mul(supply, deposit_amount, "linear purchase")? / reserve_balance);
        }

        let base_n = deposit_amount
            .checked_add(reserve_balance)
            .ok_or_else(|| FormulaError::overflow("purchase base"))?;
        let (result, precision) =
            PowerMath::power(base_n, reserve_balance, reserve_ratio, MAX_RESERVE_RATIO)?;

        let new_token_supply =
            checked_mul(supply, result, "purchase supply scaling")? >> usize::from(precision);

        // result >= 2^precision because the base is at least one
        Ok(new_token_supply.saturating_sub(supply))
    }

    /// Calculate the reserve tokens refunded for selling continuous tokens
    ///
    /// # Arguments
    /// * `supply` - Current continuous token supply (must be positive)
    /// * `reserve_balance` - Current reserve token balance (must be positive)
    /// * `reserve_ratio` - Reserve ratio in ppm, `1..=1_000_000`
    /// * `sell_amount` - Continuous tokens sold, at most `supply`
    ///
    /// # Returns
    /// Reserve tokens to refund, truncated toward zero. Selling the entire
    /// supply refunds exactly `reserve_balance`.
    pub fn calculate_sale_return(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u32,
        sell_amount: U256,
    ) -> Result<U256, FormulaError> {
        Self::validate(supply, reserve_balance, reserve_ratio)?;

        if sell_amount > supply {
            return Err(FormulaError::InsufficientSupply {
                sell_amount,
                supply,
            });
        }

        if sell_amount.is_zero() {
            return Ok(U256::zero());
        }

        if sell_amount == supply {
            return Ok(reserve_balance);
        }

        // 100% ratio is a straight line: R * ΔS / S
        if reserve_ratio == MAX_RESERVE_RATIO {
            return Ok(checked_mul(reserve_balance, sell_amount, "linear sale")? / supply);
        }

        let base_d = supply - sell_amount;
        let (result, precision) =
            PowerMath::power(supply, base_d, MAX_RESERVE_RATIO, reserve_ratio)?;

        let old_balance = checked_mul(reserve_balance, result, "sale balance scaling")?;
        let new_balance = reserve_balance
            .checked_mul(U256::one() << usize::from(precision))
            .ok_or_else(|| FormulaError::overflow("sale balance shift"))?;

        let refund = old_balance
            .checked_sub(new_balance)
            .ok_or_else(|| FormulaError::overflow("sale balance difference"))?;
        Ok(refund / result)
    }

    fn validate(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u32,
    ) -> Result<(), FormulaError> {
        if supply.is_zero() || reserve_balance.is_zero() {
            return Err(FormulaError::InvalidSupplyOrBalance {
                supply,
                reserve_balance,
            });
        }
        if reserve_ratio == 0 || reserve_ratio > MAX_RESERVE_RATIO {
            return Err(FormulaError::InvalidRatio(format!(
                "reserve ratio {} outside (0, {}]",
                reserve_ratio, MAX_RESERVE_RATIO
            )));
        }
        Ok(())
    }
}

fn checked_mul(a: U256, b: U256, operation: &'static str) -> Result<U256, FormulaError> {
    a.checked_mul(b)
        .ok_or_else(|| FormulaError::overflow(operation))
}
