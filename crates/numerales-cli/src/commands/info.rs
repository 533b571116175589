//! Implementation of the `numerales info` command.

use miette::{IntoDiagnostic, Result};
use numerales::Speller;
use numerales_tables::{currencies, max_power};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// Arguments for the info command.
#[derive(Debug, clap::Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for the locale descriptor.
#[derive(Debug, Serialize)]
struct InfoJson {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    max_power: u32,
    currencies: usize,
}

/// Run the info command.
pub fn run_info(args: InfoArgs, speller: &Speller) -> Result<i32> {
    let language = speller.language();
    let info = InfoJson {
        code: language.code(),
        name: language.name(),
        native_name: language.native_name(),
        max_power: max_power(),
        currencies: currencies().len(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
    } else {
        println!(
            "{} ({}, {})",
            info.code.if_supports_color(Stream::Stdout, |text| text.bold()),
            info.name,
            info.native_name
        );
        println!("  largest scale: 10^{}", info.max_power);
        println!("  currencies:    {}", info.currencies);
    }

    Ok(exitcode::OK)
}
