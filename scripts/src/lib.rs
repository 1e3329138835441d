//! Shared helpers for the curve command-line tools

use anyhow::{Context, Result};
use bancor_formula::{format_units, PurchaseStep, U256};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialise `tracing` on stderr so stdout stays free for reports
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_logging(default_level: &str, json_logs: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log level")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Single quote printed by `curve_quote`
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    pub operation: &'static str,
    pub supply: String,
    pub reserve_balance: String,
    pub reserve_ratio: u32,
    pub amount: String,
    pub result: String,
    /// Unformatted base-unit result
    pub result_base_units: U256,
}

/// Human-readable row for one simulation step
pub fn format_step(step: &PurchaseStep, decimals: u8) -> String {
    format!(
        "step {:>3} | deposit {:>12} | minted {:>24} | price {:>22} | supply {:>26} | reserve {:>26}",
        step.step,
        format_units(step.deposit, decimals),
        format_units(step.minted, decimals),
        format_units(step.effective_price, 18),
        format_units(step.supply_after, decimals),
        format_units(step.reserve_after, decimals),
    )
}

/// Write simulation steps as pretty JSON, creating parent directories
pub fn write_json_report(path: &Path, steps: &[PurchaseStep]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(steps).context("Failed to serialize steps")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
