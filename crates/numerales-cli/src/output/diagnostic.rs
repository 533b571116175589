//! Miette diagnostic wrapper for amount parse errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use numerales::AmountError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the offending character of a
/// command-line amount.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid {what}: {message}")]
#[diagnostic(code(numerales::syntax))]
pub struct AmountDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    what: &'static str,

    message: String,

    #[help]
    help: Option<String>,
}

impl AmountDiagnostic {
    /// Create a diagnostic from an AmountError over the raw argument.
    pub fn from_amount_error(what: &'static str, input: &str, err: &AmountError) -> Self {
        let (column, message) = match err {
            AmountError::Empty => (1, "nothing to convert".to_string()),
            AmountError::Syntax { column, message } => (*column, message.clone()),
        };

        // Column is 1-based and counted in characters.
        let offset = input
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or(input.len(), |(index, _)| index);
        let width = input[offset..].chars().next().map_or(0, char::len_utf8);

        AmountDiagnostic {
            src: NamedSource::new(what, input.to_string()),
            span: (offset, width).into(),
            what,
            message,
            help: Some(match what {
                "amount" => "expected digits with an optional '.' or ',' and one or two decimals".into(),
                _ => "expected digits with an optional leading '-'".into(),
            }),
        }
    }
}
