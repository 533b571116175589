//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Name forms of one currency, as listed by the CLI.
#[derive(Debug, Serialize)]
pub struct CurrencyRow {
    /// Three-letter code (e.g., "USD").
    pub code: &'static str,
    /// Major unit name for exactly one.
    pub singular: String,
    /// Major unit name for any other amount.
    pub plural: String,
    /// Minor unit name for exactly one, if the currency has one.
    pub minor_singular: Option<String>,
    /// Minor unit name for any other amount.
    pub minor_plural: Option<String>,
}

/// Format currencies as an ASCII table.
pub fn format_currency_table(rows: &[CurrencyRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Singular", "Plural", "Minor"]);

    for row in rows {
        let minor = match (&row.minor_singular, &row.minor_plural) {
            (Some(singular), Some(plural)) => format!("{} / {}", singular, plural),
            _ => "-".to_string(),
        };
        table.add_row(vec![
            row.code.to_string(),
            row.singular.clone(),
            row.plural.clone(),
            minor,
        ]);
    }

    table
}
