//! Continuous token ledger backed by a reserve
//!
//! Owns the supply/reserve state that the formula itself never touches.
//! Minting deposits reserve tokens and creates continuous tokens at the curve
//! price; burning destroys continuous tokens and releases reserve tokens.
//! State only changes after the formula call has succeeded.

use crate::curve_traits::{BondingCurve, CurveState};
use crate::errors::FormulaError;
use ethers_core::types::U256;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of a mint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub deposit_amount: U256,
    pub minted_amount: U256,
    pub supply_after: U256,
    pub reserve_after: U256,
}

/// Outcome of a burn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnReceipt {
    pub burned_amount: U256,
    pub refund_amount: U256,
    pub supply_after: U256,
    pub reserve_after: U256,
}

/// Continuous token with its reserve pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousToken {
    state: CurveState,
}

impl ContinuousToken {
    /// Create a token with an initial supply already backed by `initial_reserve`
    pub fn new(
        reserve_ratio: u32,
        initial_supply: U256,
        initial_reserve: U256,
    ) -> Result<Self, FormulaError> {
        let state = CurveState {
            supply: initial_supply,
            reserve_balance: initial_reserve,
            reserve_ratio,
        };

        // Zero-amount quote validates supply, reserve and ratio in one place
        state.purchase_return(U256::zero())?;

        Ok(Self { state })
    }

    pub fn state(&self) -> &CurveState {
        &self.state
    }

    pub fn total_supply(&self) -> U256 {
        self.state.supply
    }

    pub fn reserve_balance(&self) -> U256 {
        self.state.reserve_balance
    }

    pub fn reserve_ratio(&self) -> u32 {
        self.state.reserve_ratio
    }

    /// Continuous tokens a deposit would mint right now
    pub fn mint_reward(&self, deposit_amount: U256) -> Result<U256, FormulaError> {
        self.state.purchase_return(deposit_amount)
    }

    /// Reserve tokens a burn would refund right now
    pub fn burn_refund(&self, burn_amount: U256) -> Result<U256, FormulaError> {
        self.state.sale_return(burn_amount)
    }

    /// Deposit reserve tokens and mint the curve reward
    pub fn mint(&mut self, deposit_amount: U256) -> Result<MintReceipt, FormulaError> {
        if deposit_amount.is_zero() {
            return Err(FormulaError::InvalidAmount {
                input: deposit_amount.to_string(),
                reason: "deposit must be non-zero".to_string(),
            });
        }

        let minted_amount = self.mint_reward(deposit_amount)?;
        let supply_after = self
            .state
            .supply
            .checked_add(minted_amount)
            .ok_or_else(|| FormulaError::overflow("mint supply"))?;
        let reserve_after = self
            .state
            .reserve_balance
            .checked_add(deposit_amount)
            .ok_or_else(|| FormulaError::overflow("mint reserve"))?;

        self.state.supply = supply_after;
        self.state.reserve_balance = reserve_after;

        info!(
            minted = %minted_amount,
            deposit = %deposit_amount,
            "Minted continuous tokens"
        );
        debug!(supply = %supply_after, reserve = %reserve_after, "Curve state after mint");

        Ok(MintReceipt {
            deposit_amount,
            minted_amount,
            supply_after,
            reserve_after,
        })
    }

    /// Burn continuous tokens and release the curve refund
    pub fn burn(&mut self, burn_amount: U256) -> Result<BurnReceipt, FormulaError> {
        if burn_amount.is_zero() {
            return Err(FormulaError::InvalidAmount {
                input: burn_amount.to_string(),
                reason: "burn amount must be non-zero".to_string(),
            });
        }

        let refund_amount = self.burn_refund(burn_amount)?;

        // burn_refund already rejected burn_amount > supply, and refund <= reserve
        let supply_after = self.state.supply - burn_amount;
        let reserve_after = self
            .state
            .reserve_balance
            .checked_sub(refund_amount)
            .ok_or_else(|| FormulaError::overflow("burn reserve"))?;

        self.state.supply = supply_after;
        self.state.reserve_balance = reserve_after;

        info!(
            burned = %burn_amount,
            refund = %refund_amount,
            "Burned continuous tokens"
        );
        debug!(supply = %supply_after, reserve = %reserve_after, "Curve state after burn");

        Ok(BurnReceipt {
            burned_amount: burn_amount,
            refund_amount,
            supply_after,
            reserve_after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::exp10(18)
    }

    #[test]
    fn test_new_validates_parameters() {
        assert!(ContinuousToken::new(500_000, ether(1), ether(1)).is_ok());
        assert!(matches!(
            ContinuousToken::new(0, ether(1), ether(1)),
            Err(FormulaError::InvalidRatio(_))
        ));
        assert!(matches!(
            ContinuousToken::new(500_000, U256::zero(), ether(1)),
            Err(FormulaError::InvalidSupplyOrBalance { .. })
        ));
    }

    #[test]
    fn test_quotes_do_not_mutate() {
        let token = ContinuousToken::new(500_000, ether(1), ether(1)).unwrap();
        let before = token.clone();
        token.mint_reward(ether(1)).unwrap();
        token.burn_refund(ether(1) / U256::from(2u64)).unwrap();
        assert_eq!(token, before);
    }

    #[test]
    fn test_failed_burn_leaves_state_untouched() {
        let mut token = ContinuousToken::new(500_000, ether(1), ether(1)).unwrap();
        let before = token.clone();

        assert!(matches!(
            token.burn(ether(2)),
            Err(FormulaError::InsufficientSupply { .. })
        ));
        assert!(matches!(
            token.burn(U256::zero()),
            Err(FormulaError::InvalidAmount { .. })
        ));
        assert_eq!(token, before);
    }

    #[test]
    fn test_burning_everything_drains_reserve() {
        let mut token = ContinuousToken::new(300_000, ether(5), ether(2)).unwrap();
        let receipt = token.burn(ether(5)).unwrap();

        assert_eq!(receipt.refund_amount, ether(2));
        assert_eq!(token.total_supply(), U256::zero());
        assert_eq!(token.reserve_balance(), U256::zero());
    }
}
