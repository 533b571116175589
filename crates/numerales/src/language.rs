//! Locale descriptors.
//!
//! Every language implementation exposes a code, an English display name, a
//! native name and a single cardinal conversion entry point. Dispatching by
//! code is left to the caller.

use num_bigint::BigInt;

use crate::currency::currency_words;
use crate::error::ConvertError;
use crate::numeral::{UnitForm, spell};

pub(crate) const SPANISH_NAME: &str = "Spanish";

/// Contract shared by all language implementations.
pub trait Language {
    /// Locale code (e.g. "es").
    fn code(&self) -> &'static str;

    /// Language name in English.
    fn name(&self) -> &'static str;

    /// Language name in the language itself.
    fn native_name(&self) -> &'static str;

    /// Write a cardinal number in words.
    fn to_words(&self, number: &BigInt) -> Result<String, ConvertError>;
}

/// Spanish cardinals and currency amounts.
///
/// `Spanish` holds no state, so one value can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use numerales::{Language, Spanish};
///
/// assert_eq!(Spanish.code(), "es");
/// assert_eq!(Spanish.to_words(&BigInt::from(1_000_001)).unwrap(), "un millón uno");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Spanish;

impl Spanish {
    /// Write a currency amount in words.
    ///
    /// See [`currency_words`] for the accepted input.
    pub fn to_currency_words(
        &self,
        currency_code: &str,
        integer_part: &BigInt,
        fractional_part: Option<&BigInt>,
    ) -> Result<String, ConvertError> {
        currency_words(currency_code, integer_part, fractional_part)
    }
}

impl Language for Spanish {
    fn code(&self) -> &'static str {
        "es"
    }

    fn name(&self) -> &'static str {
        SPANISH_NAME
    }

    fn native_name(&self) -> &'static str {
        "Español"
    }

    fn to_words(&self, number: &BigInt) -> Result<String, ConvertError> {
        spell(number, UnitForm::Full)
    }
}
