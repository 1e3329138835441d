//! One-off purchase or sale quote against an explicit curve state

use anyhow::{Context, Result};
use bancor_formula::{format_units, parse_units, BancorFormula, DEFAULT_DECIMALS};
use clap::{Args, Parser, Subcommand};
use curve_scripts::{init_logging, QuoteReport};
use tracing::debug;

#[derive(Parser)]
#[command(name = "curve_quote")]
#[command(about = "Quote Bancor purchase and sale returns")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the quote as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Token decimals for all amounts
    #[arg(long, global = true, default_value_t = DEFAULT_DECIMALS)]
    decimals: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Continuous tokens minted for a reserve deposit
    Purchase(CurveArgs),
    /// Reserve tokens refunded for selling continuous tokens
    Sale(CurveArgs),
}

#[derive(Args)]
struct CurveArgs {
    /// Continuous token supply, in token units
    #[arg(long)]
    supply: String,

    /// Reserve balance, in token units
    #[arg(long)]
    reserve: String,

    /// Reserve ratio in ppm (1..=1000000)
    #[arg(long)]
    ratio: u32,

    /// Deposit (purchase) or sell amount (sale), in token units
    #[arg(long)]
    amount: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging("warn", false)?;

    let (operation, curve) = match &cli.command {
        Commands::Purchase(curve) => ("purchase", curve),
        Commands::Sale(curve) => ("sale", curve),
    };

    let supply = parse_units(&curve.supply, cli.decimals).context("Invalid --supply")?;
    let reserve = parse_units(&curve.reserve, cli.decimals).context("Invalid --reserve")?;
    let amount = parse_units(&curve.amount, cli.decimals).context("Invalid --amount")?;
    debug!(%supply, %reserve, ratio = curve.ratio, %amount, operation, "Quoting");

    let result = match &cli.command {
        Commands::Purchase(_) => {
            BancorFormula::calculate_purchase_return(supply, reserve, curve.ratio, amount)
        }
        Commands::Sale(_) => {
            BancorFormula::calculate_sale_return(supply, reserve, curve.ratio, amount)
        }
    }
    .with_context(|| format!("{} quote failed", operation))?;

    let report = QuoteReport {
        operation,
        supply: format_units(supply, cli.decimals),
        reserve_balance: format_units(reserve, cli.decimals),
        reserve_ratio: curve.ratio,
        amount: format_units(amount, cli.decimals),
        result: format_units(result, cli.decimals),
        result_base_units: result,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {} -> {}", report.operation, report.amount, report.result);
    }

    Ok(())
}
