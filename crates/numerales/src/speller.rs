//! Configurable front end over the Spanish converter.

use bon::Builder;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::amount::Amount;
use crate::currency::lookup;
use crate::error::ConvertError;
use crate::language::{Language, Spanish};

/// Letter case applied to the produced words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capitalization {
    /// As produced: "dos dólares".
    #[default]
    Lower,
    /// First letter uppercased: "Dos dólares".
    Sentence,
    /// Everything uppercased: "DOS DÓLARES".
    Upper,
}

impl Capitalization {
    /// Apply this case to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Capitalization::Lower => text.to_string(),
            Capitalization::Upper => text.to_uppercase(),
            Capitalization::Sentence => {
                let mut graphemes = text.graphemes(true);
                match graphemes.next() {
                    Some(first) => {
                        let mut result = first.to_uppercase();
                        result.push_str(graphemes.as_str());
                        result
                    }
                    None => String::new(),
                }
            }
        }
    }
}

/// Writes numbers and amounts with output options applied.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use numerales::{Capitalization, Speller};
///
/// let speller = Speller::builder()
///     .capitalization(Capitalization::Sentence)
///     .build();
/// assert_eq!(speller.spell(&BigInt::from(200)).unwrap(), "Doscientos");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Speller {
    /// Letter case of the output.
    #[builder(default)]
    capitalization: Capitalization,

    #[builder(skip)]
    language: Spanish,
}

impl Speller {
    /// Speller with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured letter case.
    pub fn capitalization(&self) -> Capitalization {
        self.capitalization
    }

    /// The language this speller writes.
    pub fn language(&self) -> &dyn Language {
        &self.language
    }

    /// Write a cardinal number.
    pub fn spell(&self, number: &BigInt) -> Result<String, ConvertError> {
        let words = self.language.to_words(number)?;
        Ok(self.capitalization.apply(&words))
    }

    /// Write a currency amount from its parts.
    pub fn spell_currency(
        &self,
        currency_code: &str,
        integer_part: &BigInt,
        fractional_part: Option<&BigInt>,
    ) -> Result<String, ConvertError> {
        let words = self
            .language
            .to_currency_words(currency_code, integer_part, fractional_part)?;
        Ok(self.capitalization.apply(&words))
    }

    /// Write a parsed [`Amount`] in `currency_code`.
    ///
    /// Negative amounts are rejected, including those whose integer part
    /// is zero ("-0.50").
    pub fn spell_amount(&self, currency_code: &str, amount: &Amount) -> Result<String, ConvertError> {
        if amount.negative {
            lookup(currency_code)?;
            return Err(ConvertError::invalid(format!(
                "amount must not be negative, got -{}{}",
                amount.integer.magnitude(),
                amount.fraction.map(|cents| format!(".{cents:02}")).unwrap_or_default()
            )));
        }
        self.spell_currency(
            currency_code,
            &amount.integer,
            amount.fraction_value().as_ref(),
        )
    }
}
