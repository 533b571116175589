//! Decomposition of a six-digit group into the digits the grammar looks at.

/// Digits of a value below one million.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup {
    /// Everything above the hundreds digit (0-999).
    pub thousands: u32,
    pub hundreds: u8,
    pub tens: u8,
    pub units: u8,
}

/// How the last two digits are spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensCase {
    /// 10-19: one irregular word, indexed by the units digit.
    Teen(u8),
    /// 21-29: "veinti" fused with the unit word.
    Twenty(u8),
    /// Everything else: a tens word and, when non-zero, a separate units word.
    Regular { tens: u8, units: u8 },
}

impl DigitGroup {
    pub fn new(value: u32) -> Self {
        Self {
            thousands: value.div_euclid(1000),
            hundreds: digit(value.div_euclid(100)),
            tens: digit(value.div_euclid(10)),
            units: digit(value),
        }
    }

    /// Exactly one hundred in the lower three digits ("cien", not "ciento").
    pub fn is_exact_hundred(&self) -> bool {
        matches!((self.hundreds, self.tens, self.units), (1, 0, 0))
    }

    /// Lower three digits equal one, which selects a singular scale word.
    ///
    /// The thousands part is deliberately ignored.
    pub fn is_single_unit(&self) -> bool {
        matches!((self.hundreds, self.tens, self.units), (0, 0, 1))
    }

    pub fn tens_case(&self) -> TensCase {
        match (self.tens, self.units) {
            (1, units) => TensCase::Teen(units),
            (2, units @ 1..=9) => TensCase::Twenty(units),
            (tens, units) => TensCase::Regular { tens, units },
        }
    }
}

fn digit(value: u32) -> u8 {
    u8::try_from(value.rem_euclid(10)).unwrap_or_default()
}
