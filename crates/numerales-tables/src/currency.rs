//! Currency unit names in Spanish.

/// Names for one currency.
///
/// `major` always has one or two forms. A single form is pluralized by
/// appending "s"; two forms are `[singular, plural]`. `minor` follows the
/// same rule and may be empty when the currency has no named sub-unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Three-letter uppercase code.
    pub code: &'static str,
    /// Name forms for the major unit.
    pub major: &'static [&'static str],
    /// Name forms for the minor unit.
    pub minor: &'static [&'static str],
}

impl Currency {
    /// Whether the currency names a sub-unit.
    pub fn has_minor(&self) -> bool {
        !self.minor.is_empty()
    }
}

const fn entry(
    code: &'static str,
    major: &'static [&'static str],
    minor: &'static [&'static str],
) -> Currency {
    Currency { code, major, minor }
}

/// Sorted by code so lookups can binary search.
const CURRENCIES: &[Currency] = &[
    entry("ALL", &["lek"], &["qindarka"]),
    entry("ARS", &["peso"], &["centavo"]),
    entry("AUD", &["dólar australiano", "dólares australianos"], &["centavo"]),
    entry("BAM", &["convertible marka"], &["fenig"]),
    entry("BGN", &["lev"], &["stotinka"]),
    entry("BRL", &["real", "reales"], &["centavo"]),
    entry("BYR", &["rublo bielorruso", "rublos bielorrusos"], &["kopek", "kopeks"]),
    entry("CAD", &["dólar canadiense", "dólares canadienses"], &["centavo"]),
    entry("CHF", &["swiss franc"], &["rapp"]),
    entry("CRC", &["colón", "colones"], &["centavo"]),
    entry("CYP", &["cypriot pound"], &["cent"]),
    entry("CZK", &["czech koruna"], &["halerz"]),
    entry("DKK", &["danish krone"], &["ore"]),
    entry("DOP", &["peso dominicano", "pesos dominicanos"], &["centavo", "centavos"]),
    entry("DZD", &["dinar", "dinares"], &["céntimo"]),
    entry("EEK", &["kroon"], &["senti"]),
    entry("EUR", &["euro"], &["centavo"]),
    entry("GBP", &["libra"], &["peñique"]),
    entry("HKD", &["dólar de hong kong", "dólares de hong kong"], &["centavo"]),
    entry("HRK", &["croatian kuna"], &["lipa"]),
    entry("HUF", &["forint"], &["filler"]),
    entry("ILS", &["new sheqel", "new sheqels"], &["agora", "agorot"]),
    entry("ISK", &["icelandic króna"], &["aurar"]),
    entry("JPY", &["yen", "yenes"], &["sen"]),
    entry("LTL", &["litas"], &["cent"]),
    entry("LVL", &["lat"], &["sentim"]),
    entry("LYD", &["dinar", "dinares"], &["céntimo"]),
    entry("MAD", &["dírham"], &["céntimo"]),
    entry("MKD", &["denar macedonio", "denares macedonios"], &["deni"]),
    entry("MRO", &["ouguiya"], &["khoums"]),
    entry("MTL", &["lira maltesa"], &["céntimo"]),
    entry("MXN", &["peso"], &["centavo"]),
    entry("NOK", &["norwegian krone"], &["oere"]),
    entry("PEN", &["sol", "soles"], &["centavo"]),
    entry("PLN", &["zloty", "zlotys"], &["grosz"]),
    entry("ROL", &["romanian leu"], &["bani"]),
    entry("RUB", &["rublo ruso", "rublos rusos"], &["kopek"]),
    entry("SEK", &["Swedish krona"], &["oere"]),
    entry("SIT", &["tolar"], &["stotinia"]),
    entry("SKK", &["slovak koruna"], &[]),
    entry("TND", &["dinar", "dinares"], &["céntimo"]),
    entry("TRL", &["lira"], &["kuruþ"]),
    entry("UAH", &["hryvna"], &["cent"]),
    entry("USD", &["dólar", "dólares"], &["centavo"]),
    entry("UYU", &["peso uruguayo", "pesos uruguayos"], &["centavo"]),
    entry("VEB", &["bolívar", "bolívares"], &["céntimo"]),
    entry("XAF", &["franco CFA", "francos CFA"], &["céntimo"]),
    entry("XOF", &["franco CFA", "francos CFA"], &["céntimo"]),
    entry("YUM", &["dinar", "dinares"], &["para"]),
    entry("ZAR", &["rand"], &["cent"]),
];

/// Look up a currency by its uppercase code.
pub fn currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .and_then(|index| CURRENCIES.get(index))
}

/// All supported currencies, sorted by code.
pub fn currencies() -> &'static [Currency] {
    CURRENCIES
}

/// Supported currency codes, sorted.
pub fn currency_codes() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|entry| entry.code)
}
