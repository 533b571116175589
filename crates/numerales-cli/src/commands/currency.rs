//! Implementation of the `numerales currency` command.

use numerales::{parse_amount, Speller};
use tracing::debug;

use super::report;
use crate::output::AmountDiagnostic;

/// Arguments for the currency command.
#[derive(Debug, clap::Args)]
pub struct CurrencyArgs {
    /// Amount with up to two decimals (e.g., 2.30, 15, 0,07)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Three-letter currency code
    #[arg(short, long, env = "NUMERALES_CURRENCY", default_value = "USD")]
    pub code: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the currency command.
pub fn run_currency(args: CurrencyArgs, speller: &Speller) -> miette::Result<i32> {
    let amount = match parse_amount(&args.amount) {
        Ok(amount) => amount,
        Err(e) => return Err(AmountDiagnostic::from_amount_error("amount", &args.amount, &e).into()),
    };
    debug!(code = %args.code, ?amount, "parsed amount");

    report(
        &args.amount,
        speller.spell_amount(&args.code, &amount),
        args.json,
    )
}
