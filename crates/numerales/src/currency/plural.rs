//! Singular/plural selection for currency unit names.
//!
//! The level follows the CLDR Spanish cardinal rules: category "one" takes
//! the singular name and every other category the plural. Plural rules are
//! built once per thread and reused.

use std::cell::OnceCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

thread_local! {
    /// Per-thread Spanish cardinal rules, built on first use.
    static SPANISH_RULES: OnceCell<Option<PluralRules>> = const { OnceCell::new() };
}

/// Which name form a quantity takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralLevel {
    /// Exactly one.
    Singular,
    /// Anything else, zero included.
    Plural,
}

impl PluralLevel {
    /// Level for `quantity`.
    ///
    /// # Example
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use numerales::PluralLevel;
    ///
    /// assert_eq!(PluralLevel::of(&BigInt::from(1)), PluralLevel::Singular);
    /// assert_eq!(PluralLevel::of(&BigInt::from(0)), PluralLevel::Plural);
    /// ```
    pub fn of(quantity: &BigInt) -> Self {
        match quantity.to_i64() {
            Some(n) => Self::from_category(category_for(n)),
            None => Self::Plural,
        }
    }

    /// Numeric level: 0 for singular, 1 for plural.
    pub fn index(self) -> usize {
        match self {
            Self::Singular => 0,
            Self::Plural => 1,
        }
    }

    fn from_category(category: PluralCategory) -> Self {
        match category {
            PluralCategory::One => Self::Singular,
            PluralCategory::Zero
            | PluralCategory::Two
            | PluralCategory::Few
            | PluralCategory::Many
            | PluralCategory::Other => Self::Plural,
        }
    }
}

fn build_rules() -> Option<PluralRules> {
    PluralRules::try_new(locale!("es").into(), PluralRuleType::Cardinal.into()).ok()
}

/// CLDR category of `n`; exact unity stays "one" even without rule data.
fn category_for(n: i64) -> PluralCategory {
    SPANISH_RULES.with(|cell| match cell.get_or_init(build_rules) {
        Some(rules) => rules.category_for(n),
        None if n == 1 => PluralCategory::One,
        None => PluralCategory::Other,
    })
}
