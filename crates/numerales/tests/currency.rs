//! Integration tests for currency amounts in words.

use num_bigint::BigInt;
use numerales::{ConvertError, convert, convert_currency, currency_words};

// =========================================================================
// Major unit only
// =========================================================================

#[test]
fn one_dollar_uses_un_and_singular() {
    assert_eq!(convert_currency("USD", 1, None).unwrap(), "un dólar");
}

#[test]
fn zero_takes_plural() {
    assert_eq!(convert_currency("USD", 0, None).unwrap(), "cero dólares");
}

#[test]
fn single_form_pluralizes_with_s() {
    assert_eq!(convert_currency("EUR", 1, None).unwrap(), "un euro");
    assert_eq!(convert_currency("EUR", 3, None).unwrap(), "tres euros");
    assert_eq!(convert_currency("GBP", 2, None).unwrap(), "dos libras");
}

#[test]
fn two_forms_pick_by_level() {
    assert_eq!(convert_currency("JPY", 1, None).unwrap(), "un yen");
    assert_eq!(convert_currency("JPY", 2, None).unwrap(), "dos yenes");
    assert_eq!(
        convert_currency("DOP", 1, None).unwrap(),
        "un peso dominicano"
    );
    assert_eq!(
        convert_currency("DOP", 7, None).unwrap(),
        "siete pesos dominicanos"
    );
}

#[test]
fn short_unit_form_applies_after_y() {
    assert_eq!(
        convert_currency("USD", 31, None).unwrap(),
        "treinta y un dólares"
    );
    assert_eq!(convert_currency("USD", 101, None).unwrap(), "ciento un dólares");
}

#[test]
fn short_unit_form_reaches_twenty_contraction() {
    assert_eq!(convert_currency("USD", 21, None).unwrap(), "veintiun dólares");
}

#[test]
fn large_amounts() {
    assert_eq!(
        convert_currency("USD", 1_000_000, None).unwrap(),
        "un millón dólares"
    );
    assert_eq!(
        convert_currency("MXN", 21_000_000, None).unwrap(),
        "veintiún millones pesos"
    );
    assert_eq!(convert_currency("MXN", 1000, None).unwrap(), "mil pesos");
}

// =========================================================================
// Fractional part
// =========================================================================

#[test]
fn dollars_and_cents() {
    assert_eq!(
        convert_currency("USD", 2, Some(30)).unwrap(),
        "dos dólares con treinta centavos"
    );
}

#[test]
fn one_cent_is_singular() {
    assert_eq!(
        convert_currency("USD", 1, Some(1)).unwrap(),
        "un dólar con un centavo"
    );
}

#[test]
fn zero_cents_are_spelled() {
    assert_eq!(
        convert_currency("USD", 2, Some(0)).unwrap(),
        "dos dólares con cero centavos"
    );
}

#[test]
fn minor_with_two_forms() {
    assert_eq!(
        convert_currency("BYR", 2, Some(1)).unwrap(),
        "dos rublos bielorrusos con un kopek"
    );
    assert_eq!(
        convert_currency("BYR", 2, Some(5)).unwrap(),
        "dos rublos bielorrusos con cinco kopeks"
    );
    assert_eq!(
        convert_currency("ILS", 1, Some(2)).unwrap(),
        "un new sheqel con dos agorot"
    );
}

#[test]
fn currency_without_minor_name_omits_it() {
    assert_eq!(
        convert_currency("SKK", 5, Some(10)).unwrap(),
        "cinco slovak korunas con diez"
    );
}

#[test]
fn code_is_case_insensitive() {
    assert_eq!(
        convert_currency("usd", 2, Some(30)).unwrap(),
        convert_currency("USD", 2, Some(30)).unwrap()
    );
    assert_eq!(convert_currency("Eur", 1, None).unwrap(), "un euro");
}

#[test]
fn big_integer_parts_are_accepted() {
    let amount = BigInt::from(10).pow(30);
    let words = currency_words("EUR", &amount, Some(&BigInt::from(99))).unwrap();
    assert_eq!(
        words,
        "un quintillón euros con noventa y nueve centavos"
    );
}

// =========================================================================
// Isolation
// =========================================================================

#[test]
fn short_form_does_not_leak() {
    assert_eq!(
        convert_currency("USD", 1, Some(1)).unwrap(),
        "un dólar con un centavo"
    );
    assert_eq!(convert(1).unwrap(), "uno");
    assert_eq!(convert(21).unwrap(), "veintiuno");
}

#[test]
fn short_form_does_not_leak_after_error() {
    assert!(convert_currency("ZZZ", 1, None).is_err());
    assert!(convert_currency("USD", 1, Some(-1)).is_err());
    assert_eq!(convert(1).unwrap(), "uno");
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn unknown_currency_is_rejected() {
    let err = convert_currency("ZZZ", 1, None).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnsupportedCurrency {
            code: "ZZZ".to_string(),
            locale: "Spanish".to_string(),
            suggestions: vec![],
        }
    );
    assert_eq!(
        err.to_string(),
        "currency \"ZZZ\" is not available for \"Spanish\" language"
    );
}

#[test]
fn unknown_currency_reports_code_as_given() {
    let err = convert_currency(" zzz ", 1, None).unwrap_err();
    let ConvertError::UnsupportedCurrency { code, .. } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(code, " zzz ");
}

#[test]
fn unknown_currency_suggests_close_codes() {
    let err = convert_currency("usx", 1, None).unwrap_err();
    let ConvertError::UnsupportedCurrency { suggestions, .. } = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(suggestions, &vec!["USD".to_string()]);
    assert!(err.to_string().contains("did you mean USD?"));
}

#[test]
fn currency_is_checked_before_amounts() {
    let err = convert_currency("ZZZ", -1, Some(-5)).unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedCurrency { .. }));
}

#[test]
fn negative_parts_are_invalid() {
    let err = convert_currency("USD", -1, None).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidArgument { .. }), "{err:?}");

    let err = convert_currency("USD", 1, Some(-1)).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidArgument { .. }), "{err:?}");
    assert!(err.to_string().contains("fractional part"));
}

#[test]
fn fraction_must_be_a_sub_unit_count() {
    assert!(convert_currency("USD", 1, Some(99)).is_ok());
    let err = convert_currency("USD", 1, Some(100)).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidArgument { .. }), "{err:?}");
}

#[test]
fn integer_part_past_largest_scale_overflows() {
    let amount = BigInt::from(10).pow(66);
    let err = currency_words("USD", &amount, None).unwrap_err();
    assert!(matches!(err, ConvertError::MagnitudeOverflow { power: 66, .. }));
}
