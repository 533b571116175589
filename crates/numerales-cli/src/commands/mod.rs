//! CLI command implementations.

mod currencies;
mod currency;
mod info;
mod spell;

pub use currencies::{run_currencies, CurrenciesArgs};
pub use currency::{run_currency, CurrencyArgs};
pub use info::{run_info, InfoArgs};
pub use spell::{run_spell, SpellArgs};

use numerales::ConvertError;
use serde::Serialize;

/// JSON output for a conversion.
#[derive(Debug, Serialize)]
pub struct WordsResult<'a> {
    pub input: &'a str,
    pub words: String,
}

/// Print the words (or JSON) and pick the exit code.
pub fn report(input: &str, result: Result<String, ConvertError>, json: bool) -> miette::Result<i32> {
    match result {
        Ok(words) => {
            if json {
                let output = WordsResult { input, words };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?
                );
            } else {
                println!("{}", words);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if json {
                let output = serde_json::json!({
                    "input": input,
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?
                );
            } else {
                eprintln!("Conversion error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
