//! # Curve Configuration
//!
//! Layered configuration for continuous token curves and the tools built on
//! them.
//!
//! ## Features
//!
//! - **Defaults**: Reserve ratio, initial supply/reserve and simulation sizing
//! - **Layering**: `config/curve.toml`, then `config/environments/<env>.toml`,
//!   then `CURVE_*` environment variables
//! - **Validation**: Parameters are checked before any curve is built
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curve_config::load_config;
//!
//! let config = load_config(None, Some("development"))?;
//! let simulation = config.simulation_config()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod curve_config;
pub mod defaults;

// Re-export commonly used types
pub use curve_config::{
    load_config, CurveConfig, CurveSettings, GlobalConfig, SimulationSettings,
};
