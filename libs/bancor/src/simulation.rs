//! Price growth simulation
//!
//! Replays a fixed number of equal-sized purchases against a fresh
//! [`ContinuousToken`] and records the effective price paid at each step.

use crate::constants::MAX_RESERVE_RATIO;
use crate::continuous_token::ContinuousToken;
use crate::errors::FormulaError;
use ethers_core::types::U256;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Parameters for a price growth run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Reserve ratio in ppm
    pub reserve_ratio: u32,
    /// Continuous token supply before the first purchase (base units)
    pub initial_supply: U256,
    /// Reserve balance before the first purchase (base units)
    pub initial_reserve: U256,
    /// Reserve tokens deposited at every step (base units)
    pub purchase_increment: U256,
    /// Number of purchases
    pub steps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let one = U256::exp10(18);
        Self {
            reserve_ratio: 900_000,
            initial_supply: one * U256::from(100u64),
            initial_reserve: one * U256::from(90u64),
            purchase_increment: one * U256::from(10u64),
            steps: 10,
        }
    }
}

/// One purchase in a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseStep {
    pub step: u32,
    pub deposit: U256,
    pub minted: U256,
    /// Reserve base units paid per whole continuous token (`deposit * 1e18 / minted`)
    pub effective_price: U256,
    pub supply_after: U256,
    pub reserve_after: U256,
}

/// Runs repeated purchases against a single curve
#[derive(Debug, Clone)]
pub struct PriceGrowthSimulator {
    config: SimulationConfig,
}

impl PriceGrowthSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Execute every step and return the per-step records
    pub fn run(&self) -> Result<Vec<PurchaseStep>, FormulaError> {
        let mut token = ContinuousToken::new(
            self.config.reserve_ratio,
            self.config.initial_supply,
            self.config.initial_reserve,
        )?;

        info!(
            reserve_ratio = self.config.reserve_ratio,
            linear = self.config.reserve_ratio == MAX_RESERVE_RATIO,
            steps = self.config.steps,
            "Starting price growth simulation"
        );

        let price_scale = U256::exp10(18);
        let mut records = Vec::with_capacity(self.config.steps as usize);

        for step in 1..=self.config.steps {
            let receipt = token.mint(self.config.purchase_increment)?;

            if receipt.minted_amount.is_zero() {
                return Err(FormulaError::InvalidAmount {
                    input: receipt.deposit_amount.to_string(),
                    reason: "purchase increment too small to mint any tokens".to_string(),
                });
            }

            let effective_price = receipt
                .deposit_amount
                .checked_mul(price_scale)
                .ok_or_else(|| FormulaError::overflow("effective price"))?
                / receipt.minted_amount;

            debug!(step, price = %effective_price, "Simulation step");

            records.push(PurchaseStep {
                step,
                deposit: receipt.deposit_amount,
                minted: receipt.minted_amount,
                effective_price,
                supply_after: receipt.supply_after,
                reserve_after: receipt.reserve_after,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let config = SimulationConfig::default();
        assert_eq!(config.reserve_ratio, 900_000);
        assert_eq!(config.steps, 10);

        let steps = PriceGrowthSimulator::new(config).run().unwrap();
        assert_eq!(steps.len(), 10);
        assert_eq!(
            steps[0].minted,
            U256::from_dec_str("9946584245134932516").unwrap()
        );
        assert_eq!(
            steps[0].effective_price,
            U256::from_dec_str("1005370261141777808").unwrap()
        );
    }

    #[test]
    fn test_prices_never_decrease() {
        let steps = PriceGrowthSimulator::new(SimulationConfig::default())
            .run()
            .unwrap();
        for pair in steps.windows(2) {
            assert!(pair[1].effective_price >= pair[0].effective_price);
        }
    }

    #[test]
    fn test_linear_curve_has_flat_price() {
        let config = SimulationConfig {
            reserve_ratio: MAX_RESERVE_RATIO,
            initial_supply: U256::exp10(18),
            initial_reserve: U256::exp10(18),
            purchase_increment: U256::exp10(17),
            steps: 5,
        };
        let steps = PriceGrowthSimulator::new(config).run().unwrap();
        assert!(steps.iter().all(|s| s.effective_price == U256::exp10(18)));
    }

    #[test]
    fn test_zero_steps() {
        let config = SimulationConfig {
            steps: 0,
            ..SimulationConfig::default()
        };
        assert!(PriceGrowthSimulator::new(config).run().unwrap().is_empty());
    }
}
