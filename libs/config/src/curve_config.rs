//! Curve Configuration Module
//!
//! Loads curve and simulation settings from TOML files with
//! environment-specific overrides and `CURVE_` environment variables.

use crate::defaults;
use anyhow::{bail, Context, Result};
use bancor_formula::{parse_units, SimulationConfig, MAX_RESERVE_RATIO};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main curve configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CurveConfig {
    /// Global settings
    pub global: GlobalConfig,

    /// Bonding curve parameters
    pub curve: CurveSettings,

    /// Price growth simulation parameters
    pub simulation: SimulationSettings,
}

/// Global configuration settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    pub log_level: String,
}

/// Curve parameters; amounts are decimal strings in token units
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CurveSettings {
    pub reserve_ratio: u32,
    pub initial_supply: String,
    pub initial_reserve: String,
    pub decimals: u8,
}

/// Simulation parameters
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub purchase_increment: String,
    pub steps: u32,

    /// Optional JSON output file; `$VAR` references are expanded
    pub output: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::logging::LOG_LEVEL.to_string(),
        }
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            reserve_ratio: defaults::curve::RESERVE_RATIO,
            initial_supply: defaults::curve::INITIAL_SUPPLY.to_string(),
            initial_reserve: defaults::curve::INITIAL_RESERVE.to_string(),
            decimals: defaults::curve::DECIMALS,
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            purchase_increment: defaults::simulation::PURCHASE_INCREMENT.to_string(),
            steps: defaults::simulation::STEPS,
            output: None,
        }
    }
}

impl CurveConfig {
    /// Load configuration from files with environment overrides
    ///
    /// Environment files live in `environments/<name>.toml` next to the base
    /// file. Variables such as `CURVE_CURVE__RESERVE_RATIO=500000` override both.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(defaults::paths::BASE_CONFIG));

        let mut builder = Config::builder().add_source(File::from(base).required(true));

        if let Some(env) = environment {
            let env_file = base
                .parent()
                .map(|dir| dir.join("environments"))
                .unwrap_or_else(|| PathBuf::from(defaults::paths::ENVIRONMENTS_DIR))
                .join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(defaults::paths::ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        debug!(?config, "Loaded curve configuration");
        Ok(config)
    }

    /// Reject parameter combinations the formula would refuse later
    pub fn validate(&self) -> Result<()> {
        let ratio = self.curve.reserve_ratio;
        if ratio == 0 || ratio > MAX_RESERVE_RATIO {
            bail!(
                "curve.reserve_ratio must be within 1..={}, got {}",
                MAX_RESERVE_RATIO,
                ratio
            );
        }

        let supply = self.parse_amount(&self.curve.initial_supply, "curve.initial_supply")?;
        let reserve = self.parse_amount(&self.curve.initial_reserve, "curve.initial_reserve")?;
        if supply.is_zero() || reserve.is_zero() {
            bail!("curve.initial_supply and curve.initial_reserve must be positive");
        }

        let increment = self.parse_amount(
            &self.simulation.purchase_increment,
            "simulation.purchase_increment",
        )?;
        if increment.is_zero() {
            bail!("simulation.purchase_increment must be positive");
        }

        Ok(())
    }

    /// Expand environment variables in path values
    pub fn expand_env_vars(&mut self) -> Result<()> {
        if let Some(output) = &self.simulation.output {
            let expanded = shellexpand::env(output).context("Failed to expand output path")?;
            self.simulation.output = Some(expanded.to_string());
        }

        Ok(())
    }

    /// Simulation parameters in base units
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        Ok(SimulationConfig {
            reserve_ratio: self.curve.reserve_ratio,
            initial_supply: self
                .parse_amount(&self.curve.initial_supply, "curve.initial_supply")?,
            initial_reserve: self
                .parse_amount(&self.curve.initial_reserve, "curve.initial_reserve")?,
            purchase_increment: self.parse_amount(
                &self.simulation.purchase_increment,
                "simulation.purchase_increment",
            )?,
            steps: self.simulation.steps,
        })
    }

    fn parse_amount(&self, text: &str, key: &str) -> Result<bancor_formula::U256> {
        parse_units(text, self.curve.decimals).with_context(|| format!("Invalid {}", key))
    }
}

/// Convenience function to load, expand and validate configuration
pub fn load_config(base_path: Option<&Path>, environment: Option<&str>) -> Result<CurveConfig> {
    let mut config = CurveConfig::load(base_path, environment)?;
    config.expand_env_vars()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bancor_formula::U256;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_base_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("curve.toml");

        let config_content = r#"
[global]
log_level = "debug"

[curve]
reserve_ratio = 500000
initial_supply = "1"
initial_reserve = "1"

[simulation]
purchase_increment = "0.5"
steps = 3
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = CurveConfig::load(Some(&config_path), None).unwrap();

        assert_eq!(config.global.log_level, "debug");
        assert_eq!(config.curve.reserve_ratio, 500_000);
        assert_eq!(config.curve.decimals, defaults::curve::DECIMALS);

        let simulation = config.simulation_config().unwrap();
        assert_eq!(simulation.initial_supply, U256::exp10(18));
        assert_eq!(
            simulation.purchase_increment,
            U256::exp10(17) * U256::from(5u64)
        );
        assert_eq!(simulation.steps, 3);
    }

    #[test]
    fn test_environment_override() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("curve.toml");
        fs::write(&config_path, "[curve]\nreserve_ratio = 900000\n").unwrap();

        let env_dir = dir.path().join("environments");
        fs::create_dir(&env_dir).unwrap();
        fs::write(
            env_dir.join("linear.toml"),
            "[curve]\nreserve_ratio = 1000000\n",
        )
        .unwrap();

        let config = CurveConfig::load(Some(&config_path), Some("linear")).unwrap();
        assert_eq!(config.curve.reserve_ratio, 1_000_000);

        let config = CurveConfig::load(Some(&config_path), Some("missing")).unwrap();
        assert_eq!(config.curve.reserve_ratio, 900_000);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("curve.toml");
        let written = CurveConfig::default();
        fs::write(&config_path, toml::to_string(&written).unwrap()).unwrap();

        let loaded = CurveConfig::load(Some(&config_path), None).unwrap();
        assert_eq!(loaded, written);
        assert_eq!(loaded.simulation_config().unwrap(), SimulationConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CurveConfig::default();
        assert!(config.validate().is_ok());

        config.curve.reserve_ratio = 0;
        assert!(config.validate().is_err());

        let mut config = CurveConfig::default();
        config.curve.initial_reserve = "0".to_string();
        assert!(config.validate().is_err());

        let mut config = CurveConfig::default();
        config.simulation.purchase_increment = "ten".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_base_file_fails() {
        let dir = tempdir().unwrap();
        assert!(CurveConfig::load(Some(&dir.path().join("absent.toml")), None).is_err());
    }

    #[test]
    fn test_expand_env_vars_leaves_plain_paths() {
        let mut config = CurveConfig::default();
        config.simulation.output = Some("out/steps.json".to_string());
        config.expand_env_vars().unwrap();
        assert_eq!(config.simulation.output.as_deref(), Some("out/steps.json"));
    }
}
