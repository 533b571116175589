//! Parsing of integer and decimal amount strings using winnow.
//!
//! Accepts:
//! - an optional leading `-`
//! - ASCII digits, optionally grouped with `_` ("1_000_000")
//! - for amounts, a `.` or `,` followed by one or two digits of sub-units
//!
//! Surrounding whitespace is ignored. Numbers are arbitrarily large.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use winnow::combinator::{opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// An error that occurred while parsing an amount string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Nothing but whitespace.
    #[error("empty amount")]
    Empty,

    /// Malformed input, with the 1-based column of the offending character.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },
}

/// A parsed amount: a signed integer part and an optional sub-unit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Whole units, sign included.
    #[serde(with = "decimal_string")]
    pub integer: BigInt,
    /// Whether the input carried a leading `-`. Kept apart from `integer`
    /// because "-0.50" has a zero integer part.
    #[serde(default)]
    pub negative: bool,
    /// Sub-units (0-99), if the input had a decimal part.
    pub fraction: Option<u32>,
}

impl Amount {
    /// Sub-unit count as a `BigInt`, for the currency formatter.
    pub fn fraction_value(&self) -> Option<BigInt> {
        self.fraction.map(BigInt::from)
    }
}

/// Parse a whole number such as `-12_345`.
pub fn parse_integer(input: &str) -> Result<BigInt, AmountError> {
    parse_complete(input, integer)
}

/// Parse an amount such as `1234.5` or `0,07`.
///
/// A single fractional digit counts tenths, so `2.3` is 2 units and 30
/// sub-units.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use numerales::parse_amount;
///
/// let amount = parse_amount("2.3").unwrap();
/// assert_eq!(amount.integer, BigInt::from(2));
/// assert_eq!(amount.fraction, Some(30));
/// ```
pub fn parse_amount(input: &str) -> Result<Amount, AmountError> {
    parse_complete(input, amount)
}

fn parse_complete<O>(
    input: &str,
    mut parser: impl FnMut(&mut &str) -> ModalResult<O>,
) -> Result<O, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    let offset = input.len() - input.trim_start().len();

    let mut remaining = trimmed;
    match parser(&mut remaining) {
        Ok(value) if remaining.is_empty() => Ok(value),
        Ok(_) => Err(AmountError::Syntax {
            column: column(input, offset, trimmed, remaining),
            message: format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        }),
        Err(e) => Err(AmountError::Syntax {
            column: column(input, offset, trimmed, remaining),
            message: format!("parse error: {e}"),
        }),
    }
}

/// 1-based character column of `remaining` within the original input.
fn column(input: &str, offset: usize, trimmed: &str, remaining: &str) -> usize {
    let consumed = offset + trimmed.len() - remaining.len();
    input[..consumed].chars().count() + 1
}

fn amount(input: &mut &str) -> ModalResult<Amount> {
    let negative = opt('-').parse_next(input)?.is_some();
    let whole = magnitude(input)?;
    let fraction = opt(preceded(one_of(['.', ',']), fraction)).parse_next(input)?;
    Ok(Amount {
        integer: signed(negative, whole),
        negative,
        fraction,
    })
}

fn integer(input: &mut &str) -> ModalResult<BigInt> {
    (opt('-'), magnitude)
        .map(|(sign, magnitude): (Option<char>, BigInt)| signed(sign.is_some(), magnitude))
        .parse_next(input)
}

fn magnitude(input: &mut &str) -> ModalResult<BigInt> {
    digits
        .verify_map(|digits: String| digits.parse::<BigInt>().ok())
        .parse_next(input)
}

fn signed(negative: bool, magnitude: BigInt) -> BigInt {
    if negative { -magnitude } else { magnitude }
}

/// Digits with optional single `_` separators between them.
fn digits(input: &mut &str) -> ModalResult<String> {
    let first = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let rest: Vec<&str> = repeat(
        0..,
        preceded('_', take_while(1.., |c: char| c.is_ascii_digit())),
    )
    .parse_next(input)?;

    let mut joined = first.to_string();
    for chunk in rest {
        joined.push_str(chunk);
    }
    Ok(joined)
}

/// One or two fractional digits, scaled to a two-digit sub-unit count.
fn fraction(input: &mut &str) -> ModalResult<u32> {
    take_while(1..=2, |c: char| c.is_ascii_digit())
        .map(|digits: &str| {
            let value = digits
                .chars()
                .filter_map(|c| c.to_digit(10))
                .fold(0, |acc, d| acc * 10 + d);
            if digits.len() == 1 { value * 10 } else { value }
        })
        .parse_next(input)
}

mod decimal_string {
    use num_bigint::BigInt;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
