//! Cardinal numbers written out in Spanish.
//!
//! A number is cut into six-digit groups by repeated division by 10^6. The
//! lowest group covers units and thousands; every group above it is followed
//! by the scale word for its power (millón, billón, ...). Within a group the
//! thousands part recurses into the same routine at power 3, which appends
//! "mil" on its own.
//!
//! Every group is checked against the scale list before any word is
//! produced, so a number too large to name fails without partial output.

mod digits;

use std::borrow::Cow;
use std::ops::Deref;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use numerales_tables::{
    AND, HUNDRED_EXACT, HUNDREDS, MINUS, TEENS, TENS, THOUSAND, TWENTY_ONE_SHORT, TWENTY_PREFIX,
    UNIT_SHORT, UNITS, ZERO, group_power, max_power, scale,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub use digits::{DigitGroup, TensCase};

use crate::error::ConvertError;

const GROUP_BASE: u32 = 1_000_000;
const THOUSANDS_POWER: u32 = 3;

/// Which word stands for the unit digit one.
///
/// `Full` writes "uno" unless a scale word follows. `Short` always writes
/// "un", as needed in front of a noun ("un dólar", "veintiun dólares").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitForm {
    #[default]
    Full,
    Short,
}

impl UnitForm {
    fn unit(self, units: u8) -> &'static str {
        match (self, units) {
            (UnitForm::Short, 1) => UNIT_SHORT,
            _ => UNITS[usize::from(units)],
        }
    }
}

/// Write `number` in words.
///
/// # Errors
///
/// Returns [`ConvertError::MagnitudeOverflow`] when a six-digit group sits
/// above the largest named scale.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use numerales::numeral::{UnitForm, spell};
///
/// let words = spell(&BigInt::from(21_000_000), UnitForm::Full).unwrap();
/// assert_eq!(words, "veintiún millones");
/// ```
pub fn spell(number: &BigInt, form: UnitForm) -> Result<String, ConvertError> {
    if number.is_zero() {
        return Ok(ZERO.to_string());
    }

    let groups = name_groups(&split_groups(number.magnitude()))?;

    let mut words = Words::default();
    if number.is_negative() {
        words.push(MINUS);
    }
    for &(power, group) in groups.iter().rev() {
        group_words(group, power, form, &mut words);
    }
    Ok(words.finish())
}

/// Split a magnitude into six-digit groups, least significant first.
fn split_groups(magnitude: &BigUint) -> Vec<u32> {
    let base = BigUint::from(GROUP_BASE);
    let mut rest = magnitude.clone();
    let mut groups = Vec::new();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&base);
        // Remainder is below 10^6.
        groups.push(remainder.to_u32().unwrap_or_default());
        rest = quotient;
    }
    groups
}

/// Pair every group with the power it occupies.
///
/// Fails on the lowest group whose power has no scale name.
fn name_groups(groups: &[u32]) -> Result<Vec<(u32, u32)>, ConvertError> {
    (0u32..)
        .zip(groups)
        .map(|(index, &value)| {
            let power = group_power(index);
            if index > 0 && scale(power).is_none() {
                return Err(ConvertError::MagnitudeOverflow {
                    power,
                    max_power: max_power(),
                });
            }
            Ok((power, value))
        })
        .collect()
}

/// Append the words for one group `value` (below one million) sitting at
/// `power`.
fn group_words(value: u32, power: u32, form: UnitForm, words: &mut Words) {
    trace!(value, power, "spelling digit group");
    let digits = DigitGroup::new(value);
    let scaled = power > 0;

    match digits.thousands {
        0 => {}
        1 => words.push(THOUSAND),
        thousands => group_words(thousands, THOUSANDS_POWER, form, words),
    }

    if digits.is_exact_hundred() {
        words.push(HUNDRED_EXACT);
    } else {
        words.push(HUNDREDS[usize::from(digits.hundreds)]);
    }

    match digits.tens_case() {
        TensCase::Teen(units) => words.push(TEENS[usize::from(units)]),
        TensCase::Twenty(1) if scaled => words.push(TWENTY_ONE_SHORT),
        TensCase::Twenty(units) => {
            words.push_owned(format!("{TWENTY_PREFIX}{}", form.unit(units)));
        }
        TensCase::Regular { tens, units } => {
            words.push(TENS[usize::from(tens)]);
            match (tens, units) {
                (_, 0) => {}
                (0, 1) if scaled => words.push(UNIT_SHORT),
                (0, units) => words.push(form.unit(units)),
                (_, units) => {
                    words.push(AND);
                    words.push(form.unit(units));
                }
            }
        }
    }

    match scale(power) {
        Some(scale) if scaled && value != 0 => words.push(scale.word(digits.is_single_unit())),
        _ => {}
    }
}

/// Word fragments collected during one conversion.
#[derive(Default)]
struct Words(Vec<Cow<'static, str>>);

impl Words {
    fn push(&mut self, word: &'static str) {
        self.0.push(Cow::Borrowed(word));
    }

    fn push_owned(&mut self, word: String) {
        self.0.push(Cow::Owned(word));
    }

    fn finish(self) -> String {
        join_words(&self.0)
    }
}

/// Join the non-empty fragments with single spaces.
pub(crate) fn join_words(words: &[Cow<'_, str>]) -> String {
    words
        .iter()
        .map(Deref::deref)
        .filter(|word| !word.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}
