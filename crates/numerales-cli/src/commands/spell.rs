//! Implementation of the `numerales spell` command.

use numerales::{parse_integer, Speller};

use super::report;
use crate::output::AmountDiagnostic;

/// Arguments for the spell command.
#[derive(Debug, clap::Args)]
pub struct SpellArgs {
    /// Whole number to write out (e.g., 1_000_000, -42)
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the spell command.
pub fn run_spell(args: SpellArgs, speller: &Speller) -> miette::Result<i32> {
    let number = match parse_integer(&args.number) {
        Ok(number) => number,
        Err(e) => return Err(AmountDiagnostic::from_amount_error("number", &args.number, &e).into()),
    };

    report(&args.number, speller.spell(&number), args.json)
}
