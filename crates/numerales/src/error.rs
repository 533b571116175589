//! Error types for numeral and currency conversion.

use strsim::levenshtein;
use thiserror::Error;

/// An error that occurred while writing a number or an amount in words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Currency code has no entry in the currency table.
    #[error("currency \"{code}\" is not available for \"{locale}\" language{}", format_suggestions(suggestions))]
    UnsupportedCurrency {
        code: String,
        locale: String,
        suggestions: Vec<String>,
    },

    /// The number needs a scale word beyond the largest named power.
    #[error("number needs a scale name for 10^{power}, largest supported is 10^{max_power}")]
    MagnitudeOverflow { power: u32, max_power: u32 },

    /// Input outside the documented domain.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl ConvertError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// Compute close matches for an unknown key.
///
/// Returns at most three candidates ordered by edit distance. Short keys
/// only accept a single edit.
pub fn compute_suggestions<'a>(
    key: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if key.chars().count() > 3 { 2 } else { 1 };
    let mut scored: Vec<(usize, &str)> = available
        .into_iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
