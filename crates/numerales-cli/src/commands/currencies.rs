//! Implementation of the `numerales currencies` command.

use std::borrow::Cow;

use miette::{IntoDiagnostic, Result};
use numerales::currency::unit_name;
use numerales::PluralLevel;
use numerales_tables::currencies;

use crate::output::table::{format_currency_table, CurrencyRow};

/// Arguments for the currencies command.
#[derive(Debug, clap::Args)]
pub struct CurrenciesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the currencies command.
pub fn run_currencies(args: CurrenciesArgs) -> Result<i32> {
    let rows: Vec<CurrencyRow> = currencies()
        .iter()
        .map(|entry| {
            let name = |forms, level| unit_name(forms, level).map(Cow::into_owned);
            CurrencyRow {
                code: entry.code,
                singular: name(entry.major, PluralLevel::Singular).unwrap_or_default(),
                plural: name(entry.major, PluralLevel::Plural).unwrap_or_default(),
                minor_singular: name(entry.minor, PluralLevel::Singular),
                minor_plural: name(entry.minor, PluralLevel::Plural),
            }
        })
        .collect();

    if args.json {
        let json_output = serde_json::to_string_pretty(&rows).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_currency_table(&rows));
    }

    Ok(exitcode::OK)
}
