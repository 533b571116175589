//! Spanish cardinal numbers and currency amounts in words.
//!
//! ```
//! assert_eq!(numerales::convert(21_000_000).unwrap(), "veintiún millones");
//! assert_eq!(
//!     numerales::convert_currency("USD", 2, Some(30)).unwrap(),
//!     "dos dólares con treinta centavos"
//! );
//! ```
//!
//! Conversion is a pure function of its input; nothing is shared or
//! mutated between calls, so every entry point is safe to call from many
//! threads at once.

pub mod amount;
pub mod currency;
pub mod error;
pub mod language;
pub mod numeral;
pub mod speller;

use num_bigint::BigInt;

pub use amount::{Amount, AmountError, parse_amount, parse_integer};
pub use currency::{PluralLevel, currency_words};
pub use error::{ConvertError, compute_suggestions};
pub use language::{Language, Spanish};
pub use numeral::UnitForm;
pub use speller::{Capitalization, Speller};

/// Write a cardinal number in Spanish.
pub fn convert(number: impl Into<BigInt>) -> Result<String, ConvertError> {
    Spanish.to_words(&number.into())
}

/// Write a currency amount in Spanish.
///
/// `fractional_part` is a sub-unit count (cents). `None` leaves out the
/// "con ..." part entirely.
pub fn convert_currency(
    currency_code: &str,
    integer_part: impl Into<BigInt>,
    fractional_part: Option<i64>,
) -> Result<String, ConvertError> {
    let fraction = fractional_part.map(BigInt::from);
    Spanish.to_currency_words(currency_code, &integer_part.into(), fraction.as_ref())
}
