//! Currency amounts written out in Spanish.
//!
//! An amount reads as the integer part, the major unit name, and optionally
//! "con", the sub-unit count and the minor unit name:
//! "dos dólares con treinta centavos". Both counts are spelled with the short
//! unit form, so one reads "un" in front of the unit name.

mod plural;

use std::borrow::Cow;

use num_bigint::BigInt;
use num_traits::Signed;
use numerales_tables::{CURRENCY_CONNECTOR, Currency, currency, currency_codes};
use tracing::debug;

pub use plural::PluralLevel;

use crate::error::{ConvertError, compute_suggestions};
use crate::language::SPANISH_NAME;
use crate::numeral::{UnitForm, join_words, spell};

/// Sub-unit counts must stay below this value.
pub const MINOR_UNITS_PER_MAJOR: u32 = 100;

/// Write an amount of `currency_code` in words.
///
/// The code is matched case-insensitively. `fractional_part` is a count of
/// sub-units (cents) and must lie in `0..100`.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedCurrency`] for a code missing from the table.
/// - [`ConvertError::InvalidArgument`] for a negative part or a sub-unit
///   count of 100 or more.
/// - [`ConvertError::MagnitudeOverflow`] when the integer part is too large
///   to name.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use numerales::currency::currency_words;
///
/// let words = currency_words("usd", &BigInt::from(2), Some(&BigInt::from(30))).unwrap();
/// assert_eq!(words, "dos dólares con treinta centavos");
/// ```
pub fn currency_words(
    currency_code: &str,
    integer_part: &BigInt,
    fractional_part: Option<&BigInt>,
) -> Result<String, ConvertError> {
    let entry = lookup(currency_code)?;
    validate(integer_part, fractional_part)?;

    let level = PluralLevel::of(integer_part);
    debug!(
        code = entry.code,
        integer = %integer_part,
        fraction = ?fractional_part,
        ?level,
        "formatting currency amount"
    );

    let mut words = vec![
        Cow::Owned(spell(integer_part, UnitForm::Short)?),
        unit_name(entry.major, level).unwrap_or_default(),
    ];

    if let Some(fraction) = fractional_part {
        words.push(Cow::Borrowed(CURRENCY_CONNECTOR));
        words.push(Cow::Owned(spell(fraction, UnitForm::Short)?));
        if let Some(minor) = unit_name(entry.minor, PluralLevel::of(fraction)) {
            words.push(minor);
        }
    }

    Ok(join_words(&words))
}

/// Find the table entry for `code`, ignoring case.
pub fn lookup(code: &str) -> Result<&'static Currency, ConvertError> {
    let normalized = code.trim().to_ascii_uppercase();
    currency(&normalized).ok_or_else(|| ConvertError::UnsupportedCurrency {
        suggestions: compute_suggestions(&normalized, currency_codes()),
        code: code.to_string(),
        locale: SPANISH_NAME.to_string(),
    })
}

fn validate(integer_part: &BigInt, fractional_part: Option<&BigInt>) -> Result<(), ConvertError> {
    if integer_part.is_negative() {
        return Err(ConvertError::invalid(format!(
            "integer part must not be negative, got {integer_part}"
        )));
    }
    if let Some(fraction) = fractional_part {
        if fraction.is_negative() {
            return Err(ConvertError::invalid(format!(
                "fractional part must not be negative, got {fraction}"
            )));
        }
        if *fraction >= BigInt::from(MINOR_UNITS_PER_MAJOR) {
            return Err(ConvertError::invalid(format!(
                "fractional part must be a sub-unit count below {MINOR_UNITS_PER_MAJOR}, got {fraction}"
            )));
        }
    }
    Ok(())
}

/// Name form for `level`.
///
/// A single form is pluralized with a trailing "s". Returns `None` when the
/// currency has no name for this unit.
pub fn unit_name(forms: &'static [&'static str], level: PluralLevel) -> Option<Cow<'static, str>> {
    let singular = forms.first()?;
    Some(match (level, forms.get(level.index())) {
        (PluralLevel::Singular, _) => Cow::Borrowed(*singular),
        (PluralLevel::Plural, Some(plural)) => Cow::Borrowed(*plural),
        (PluralLevel::Plural, None) => Cow::Owned(format!("{singular}s")),
    })
}
