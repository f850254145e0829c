use clap::Args;
use serde_json::{json, Value};

use crate::balance::Balance;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Args, Debug, Clone)]
pub struct BalanceArgs {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, help = "Starting balance")]
    pub initial: f64,

    #[arg(long = "add", allow_hyphen_values = true, help = "Amount to add (repeatable, may be negative)")]
    pub add: Vec<String>,

    #[arg(long, help = "Reset the balance to zero after applying increments")]
    pub reset: bool,
}

/// Amounts that parse as floats go through `increment` (so `NaN` is refused
/// there); anything else is handed over as a JSON string and refused as non-numeric.
fn apply(balance: &mut Balance, raw: &str) -> anyhow::Result<()> {
    match raw.trim().parse::<f64>() {
        Ok(amount) => balance.increment(amount)?,
        Err(_) => balance.increment_value(&Value::String(raw.to_string()))?,
    }
    Ok(())
}

pub fn run(args: &BalanceArgs) -> anyhow::Result<Balance> {
    let mut balance = Balance::new(args.initial)?;
    for raw in &args.add {
        apply(&mut balance, raw).map_err(|e| anyhow::anyhow!("cannot add '{}': {}", raw, e))?;
    }
    if args.reset {
        balance.reset();
    }
    Ok(balance)
}

pub fn handle(args: &BalanceArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let balance = run(args)?;
    output_success(
        output_format,
        &format!("Balance: {}", balance.amount()),
        Some(json!({ "balance": balance.amount() })),
    )
}
