//! Static Spanish word tables shared by the `numerales` runtime and CLI.
//!
//! This crate holds data only: the cardinal lexicon, the ordered scale list
//! and the currency name table. Keeping it separate lets tooling list
//! currencies without depending on the conversion engine.

mod currency;

pub use currency::{Currency, currencies, currency, currency_codes};

/// Word for zero. Only produced for a top-level zero.
pub const ZERO: &str = "cero";

/// Word prefixed to negative numbers.
pub const MINUS: &str = "menos";

/// Thousand, used alone for a thousands group of exactly one.
pub const THOUSAND: &str = "mil";

/// Irregular form of exactly one hundred.
pub const HUNDRED_EXACT: &str = "cien";

/// Prefix joined to a unit word for 21-29.
pub const TWENTY_PREFIX: &str = "veinti";

/// Contracted 21 used directly before a scale word.
pub const TWENTY_ONE_SHORT: &str = "veintiún";

/// Apocopated one, used before a scale word or a noun.
pub const UNIT_SHORT: &str = "un";

/// Conjunction between tens and units ("treinta y dos").
pub const AND: &str = "y";

/// Connector between the major and minor parts of a currency amount.
pub const CURRENCY_CONNECTOR: &str = "con";

/// Units 0-9.
pub const UNITS: [&str; 10] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

/// Teens 10-19, indexed by the units digit.
pub const TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciseis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];

/// Multiples of ten, indexed by the tens digit. Index 0 is empty.
pub const TENS: [&str; 10] = [
    "",
    "diez",
    "veinte",
    "treinta",
    "cuarenta",
    "cincuenta",
    "sesenta",
    "setenta",
    "ochenta",
    "noventa",
];

/// Multiples of one hundred, indexed by the hundreds digit. Index 0 is empty.
pub const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Number of decimal digits in one magnitude group.
pub const GROUP_DIGITS: u32 = 6;

/// A named power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    /// Exponent of ten this scale names.
    pub power: u32,
    /// Form used when the group in front of it is exactly one.
    pub singular: &'static str,
    /// Form used for every other group value.
    pub plural: &'static str,
}

impl Scale {
    /// Pick the singular or plural word.
    pub fn word(&self, singular: bool) -> &'static str {
        if singular { self.singular } else { self.plural }
    }
}

/// Scale list ordered by power.
///
/// Above the thousands every name covers a six-digit group, so the powers
/// past 6 advance in steps of six.
pub const SCALES: &[Scale] = &[
    Scale { power: 0, singular: "", plural: "" },
    Scale { power: 3, singular: "mil", plural: "mil" },
    Scale { power: 6, singular: "millón", plural: "millones" },
    Scale { power: 12, singular: "billón", plural: "billones" },
    Scale { power: 18, singular: "trilón", plural: "trillones" },
    Scale { power: 24, singular: "cuatrillón", plural: "cuatrillones" },
    Scale { power: 30, singular: "quintillón", plural: "quintillones" },
    Scale { power: 36, singular: "sextillón", plural: "sextillones" },
    Scale { power: 42, singular: "septillón", plural: "septillones" },
    Scale { power: 48, singular: "octallón", plural: "octallones" },
    Scale { power: 54, singular: "nonallón", plural: "nonallones" },
    Scale { power: 60, singular: "decallón", plural: "decallones" },
];

/// Look up the scale naming `power`, if one is defined.
pub fn scale(power: u32) -> Option<&'static Scale> {
    SCALES.iter().find(|scale| scale.power == power)
}

/// Highest power with a name.
pub fn max_power() -> u32 {
    SCALES.last().map_or(0, |scale| scale.power)
}

/// Power of ten occupied by the `index`-th six-digit group, counting from
/// the least significant group.
///
/// The lowest group (units and thousands) sits at power 0; every group
/// above it is named by the scale at `6 * index`.
pub fn group_power(index: u32) -> u32 {
    index.saturating_mul(GROUP_DIGITS)
}
