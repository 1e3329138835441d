//! # Bancor Formula Library - Bonding Curve Pricing Engine
//!
//! ## Purpose
//!
//! Deterministic pricing for continuous tokens backed by a reserve token.
//! Computes how many continuous tokens a reserve deposit mints and how many
//! reserve tokens a sale refunds, using the Bancor power approximation on
//! 256-bit fixed-point integers so results match the on-chain formula bit for bit.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Caller-owned curve state (supply, reserve balance, reserve ratio)
//! - **Output Destinations**: [`ContinuousToken`] ledger, [`PriceGrowthSimulator`], scripts
//! - **Precision**: Integer base units (18 decimals by default), truncation toward zero
//! - **Validation**: Every precondition returns a typed [`FormulaError`]
//!
//! ## Architecture Role
//!
//! [`PowerMath`] provides the fixed-point log/exp primitives, [`BancorFormula`]
//! turns them into purchase and sale returns, and [`ContinuousToken`] owns the
//! supply/reserve state that changes with every mint and burn. The formula
//! layer is stateless and never logs; only the ledger and simulator emit
//! `tracing` events.
//!
//! ## Performance Profile
//!
//! - **Calculation Speed**: bounded number of 256-bit multiplications per call
//! - **Memory Usage**: constant tables only, no allocation on the formula path
//! - **Thread Safety**: all formula types are `Send + Sync`

pub mod constants;
pub mod continuous_token;
pub mod curve_traits;
pub mod errors;
pub mod formula;
pub mod power;
pub mod simulation;
pub mod units;

pub use constants::{MAX_PRECISION, MAX_RESERVE_RATIO, MIN_PRECISION};
pub use continuous_token::{BurnReceipt, ContinuousToken, MintReceipt};
pub use curve_traits::{BondingCurve, CurveShape, CurveState};
pub use errors::FormulaError;
pub use formula::BancorFormula;
pub use power::{PowerMath, PowerResult};
pub use simulation::{PriceGrowthSimulator, PurchaseStep, SimulationConfig};
pub use units::{format_units, parse_ether, parse_units, DEFAULT_DECIMALS};

/// 256-bit unsigned integer used for every amount
pub use ethers_core::types::U256;
