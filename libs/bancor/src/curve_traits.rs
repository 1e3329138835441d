//! Curve trait definitions for a unified bonding-curve interface

use crate::constants::MAX_RESERVE_RATIO;
use crate::{BancorFormula, FormulaError};
use ethers_core::types::U256;
use serde::{Deserialize, Serialize};

/// Shape of the price curve implied by the reserve ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveShape {
    /// 100% reserve ratio: constant price
    Linear,
    /// Any lower ratio: price grows with supply
    Power,
}

/// Unified bonding-curve interface for callers that own token state
pub trait BondingCurve {
    /// Continuous tokens minted for a reserve deposit
    fn purchase_return(&self, deposit_amount: U256) -> Result<U256, FormulaError>;

    /// Reserve tokens refunded for selling continuous tokens
    fn sale_return(&self, sell_amount: U256) -> Result<U256, FormulaError>;

    /// Current (supply, reserve balance)
    fn get_balances(&self) -> (U256, U256);

    /// Reserve ratio in ppm
    fn get_reserve_ratio(&self) -> u32;

    fn shape(&self) -> CurveShape {
        if self.get_reserve_ratio() == MAX_RESERVE_RATIO {
            CurveShape::Linear
        } else {
            CurveShape::Power
        }
    }
}

/// Caller-owned snapshot of a continuous token's curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveState {
    pub supply: U256,
    pub reserve_balance: U256,
    pub reserve_ratio: u32, // ppm (500_000 = 50%)
}

impl BondingCurve for CurveState {
    fn purchase_return(&self, deposit_amount: U256) -> Result<U256, FormulaError> {
        BancorFormula::calculate_purchase_return(
            self.supply,
            self.reserve_balance,
            self.reserve_ratio,
            deposit_amount,
        )
    }

    fn sale_return(&self, sell_amount: U256) -> Result<U256, FormulaError> {
        BancorFormula::calculate_sale_return(
            self.supply,
            self.reserve_balance,
            self.reserve_ratio,
            sell_amount,
        )
    }

    fn get_balances(&self) -> (U256, U256) {
        (self.supply, self.reserve_balance)
    }

    fn get_reserve_ratio(&self) -> u32 {
        self.reserve_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_state_delegates_to_formula() {
        let state = CurveState {
            supply: U256::from(2_000u64),
            reserve_balance: U256::from(500u64),
            reserve_ratio: MAX_RESERVE_RATIO,
        };

        assert_eq!(state.shape(), CurveShape::Linear);
        assert_eq!(
            state.purchase_return(U256::from(100u64)).unwrap(),
            U256::from(400u64)
        );
        assert_eq!(
            state.sale_return(U256::from(400u64)).unwrap(),
            U256::from(100u64)
        );
        assert_eq!(
            state.get_balances(),
            (U256::from(2_000u64), U256::from(500u64))
        );
    }

    #[test]
    fn test_power_shape() {
        let state = CurveState {
            supply: U256::one(),
            reserve_balance: U256::one(),
            reserve_ratio: 500_000,
        };
        assert_eq!(state.shape(), CurveShape::Power);
    }
}
