//! Integration tests for cardinal numbers in words.

use insta::assert_snapshot;
use num_bigint::BigInt;
use numerales::{ConvertError, convert};

fn words(n: i64) -> String {
    convert(n).unwrap()
}

// =============================================================================
// Units, teens and tens
// =============================================================================

#[test]
fn zero_is_cero() {
    assert_eq!(words(0), "cero");
}

#[test]
fn single_digits() {
    let expected = [
        "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    ];
    for (n, word) in (1..).zip(expected) {
        assert_eq!(words(n), word);
    }
}

#[test]
fn teens_are_single_words() {
    assert_eq!(words(10), "diez");
    assert_eq!(words(11), "once");
    assert_eq!(words(15), "quince");
    assert_eq!(words(16), "dieciseis");
    assert_eq!(words(19), "diecinueve");
}

#[test]
fn twenties_contract_with_veinti() {
    assert_eq!(words(20), "veinte");
    assert_eq!(words(21), "veintiuno");
    assert_eq!(words(22), "veintidos");
    assert_eq!(words(29), "veintinueve");
}

#[test]
fn tens_join_units_with_y() {
    assert_eq!(words(30), "treinta");
    assert_eq!(words(32), "treinta y dos");
    assert_eq!(words(41), "cuarenta y uno");
    assert_eq!(words(99), "noventa y nueve");
}

// =============================================================================
// Hundreds and thousands
// =============================================================================

#[test]
fn exactly_one_hundred_is_cien() {
    assert_eq!(words(100), "cien");
    assert_eq!(words(101), "ciento uno");
    assert_eq!(words(110), "ciento diez");
    assert_eq!(words(121), "ciento veintiuno");
    assert_eq!(words(200), "doscientos");
    assert_eq!(words(500), "quinientos");
    assert_eq!(words(999), "novecientos noventa y nueve");
}

#[test]
fn one_thousand_is_mil_alone() {
    assert_eq!(words(1000), "mil");
    assert_eq!(words(1001), "mil uno");
    assert_eq!(words(1100), "mil cien");
    assert_eq!(words(2000), "dos mil");
}

#[test]
fn thousands_group_uses_short_forms() {
    assert_eq!(words(21_000), "veintiún mil");
    assert_eq!(words(100_000), "cien mil");
    assert_eq!(words(101_000), "ciento un mil");
    assert_eq!(
        words(123_456),
        "ciento veintitres mil cuatrocientos cincuenta y seis"
    );
}

// =============================================================================
// Millions and above
// =============================================================================

#[test]
fn one_million_takes_un_and_singular() {
    assert_eq!(words(1_000_000), "un millón");
    assert_eq!(words(1_000_001), "un millón uno");
    assert_eq!(words(2_000_000), "dos millones");
}

#[test]
fn twenty_one_before_scale_is_veintiun() {
    assert_eq!(words(21_000_000), "veintiún millones");
    assert_eq!(words(21_000_021), "veintiún millones veintiuno");
}

#[test]
fn thousands_of_millions() {
    assert_eq!(words(2_500_000), "dos millones quinientos mil");
    assert_eq!(words(1_000_000_000), "mil millones");
    assert_eq!(words(1_500_000_000), "mil quinientos millones");
}

#[test]
fn higher_scales() {
    assert_eq!(words(1_000_000_000_000), "un billón");
    assert_eq!(words(3_000_000_000_000), "tres billones");
    assert_eq!(words(1_000_000_000_000_000_000), "un trilón");
    assert_eq!(words(2_000_000_000_000_000_000), "dos trillones");
}

#[test]
fn zero_groups_between_scales_are_silent() {
    assert_eq!(words(1_000_000_000_001), "un billón uno");
    assert_eq!(words(5_000_000_300_000), "cinco billones trescientos mil");
}

#[test]
fn long_number_spans_every_group() {
    assert_snapshot!(
        words(1_234_567_890_123),
        @"un billón doscientos treinta y cuatro mil quinientos sesenta y siete millones ochocientos noventa mil ciento veintitres"
    );
}

// =============================================================================
// Sign
// =============================================================================

#[test]
fn negatives_prefix_menos() {
    for n in [1, 21, 100, 1000, 21_000_000, 1_234_567] {
        assert_eq!(words(-n), format!("menos {}", words(n)));
    }
}

#[test]
fn i64_extremes() {
    assert!(words(i64::MIN).starts_with("menos nueve trillones"));
    assert!(words(i64::MAX).starts_with("nueve trillones"));
}

// =============================================================================
// Magnitude limits
// =============================================================================

#[test]
fn largest_named_magnitude_converts() {
    let largest = BigInt::from(10).pow(66) - 1;
    let result = convert(largest).unwrap();
    assert!(result.starts_with("novecientos noventa y nueve mil novecientos noventa y nueve decallones"));
    assert!(result.ends_with("novecientos noventa y nueve mil novecientos noventa y nueve"));
}

#[test]
fn one_decallon() {
    assert_eq!(convert(BigInt::from(10).pow(60)).unwrap(), "un decallón");
}

#[test]
fn unnamed_magnitude_overflows() {
    let err = convert(BigInt::from(10).pow(66)).unwrap_err();
    assert_eq!(
        err,
        ConvertError::MagnitudeOverflow {
            power: 66,
            max_power: 60
        }
    );

    let err = convert(-BigInt::from(10).pow(80)).unwrap_err();
    assert!(matches!(err, ConvertError::MagnitudeOverflow { power: 66, .. }));
}

#[test]
fn accepts_any_integer_width() {
    assert_eq!(convert(7u8).unwrap(), "siete");
    assert_eq!(convert(7u64).unwrap(), "siete");
    assert_eq!(convert(-7i128).unwrap(), "menos siete");
}
