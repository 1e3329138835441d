//! Price growth simulation
//!
//! Replays equal-sized purchases against the configured curve and reports
//! the effective price paid at every step.

use anyhow::{Context, Result};
use bancor_formula::PriceGrowthSimulator;
use clap::Parser;
use curve_config::load_config;
use curve_scripts::{format_step, init_logging, write_json_report};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "simulate_price_growth")]
#[command(about = "Simulate continuous token price growth over repeated purchases")]
#[command(version)]
struct Args {
    /// Base configuration file
    #[arg(short, long, default_value = "config/curve.toml")]
    config: PathBuf,

    /// Environment override (config/environments/<name>.toml)
    #[arg(short, long)]
    environment: Option<String>,

    /// Print steps as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log level, overrides the configured one
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(Some(&args.config), args.environment.as_deref())
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.global.log_level);
    init_logging(log_level, args.json_logs)?;

    let simulation = config.simulation_config()?;
    info!(
        reserve_ratio = simulation.reserve_ratio,
        steps = simulation.steps,
        "Running price growth simulation"
    );

    let steps = PriceGrowthSimulator::new(simulation)
        .run()
        .context("Simulation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in &steps {
            println!("{}", format_step(step, config.curve.decimals));
        }
    }

    if let Some(output) = &config.simulation.output {
        write_json_report(Path::new(output), &steps)?;
        info!("Wrote {} steps to {}", steps.len(), output);
    }

    Ok(())
}
