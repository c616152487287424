use crate::model::MISSING;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Distances above this without a unit are assumed to be centimeters.
const BARE_CENTIMETER_THRESHOLD: Decimal = Decimal::TEN;

static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("valid numeric-run regex"));

/// A value handed to [`format_fixed2`] or the classifier: raw text from
/// the reply or a number already computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    Text(&'a str),
    Number(Decimal),
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(s: &'a str) -> Self {
        NumericInput::Text(s)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(s: &'a String) -> Self {
        NumericInput::Text(s.as_str())
    }
}

impl From<Decimal> for NumericInput<'_> {
    fn from(d: Decimal) -> Self {
        NumericInput::Number(d)
    }
}

impl NumericInput<'_> {
    pub fn to_decimal(self) -> Option<Decimal> {
        match self {
            NumericInput::Text(s) => parse_locale_float(s),
            NumericInput::Number(d) => Some(d),
        }
    }
}

/// Parse a number that may use a decimal comma.
///
/// - "1.5" -> 1.5
/// - "1,5" -> 1.5
/// - "", "abc", "1.2.3" -> None
pub fn parse_locale_float(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Parse an electrode spacing into meters, rounded to 4 decimals.
///
/// - "50cm", "50 см" -> 0.5
/// - "1.5 m", "1,5 м" -> 1.5
/// - "150" -> 1.5 (bare values above 10 are read as centimeters)
/// - "1.5" -> 1.5
pub fn parse_distance_to_meters(raw: &str) -> Option<Decimal> {
    let s = raw.trim().to_lowercase();

    if s.contains("cm") || s.contains("см") {
        let run = NUMERIC_RUN.find(&s)?;
        let cm = parse_locale_float(run.as_str())?;
        return Some(centimeters_to_meters(cm));
    }

    if let Some(meters) = s.strip_suffix('m').or_else(|| s.strip_suffix('м')) {
        return parse_locale_float(meters).map(|m| m.round_dp(4));
    }

    let value = parse_locale_float(&s)?;
    if value.abs() > BARE_CENTIMETER_THRESHOLD {
        Some(centimeters_to_meters(value))
    } else {
        Some(value.round_dp(4))
    }
}

fn centimeters_to_meters(cm: Decimal) -> Decimal {
    (cm / Decimal::ONE_HUNDRED).round_dp(4)
}

/// Render a value with exactly two fractional digits, or [`MISSING`].
///
/// Formatting an already formatted value returns it unchanged.
pub fn format_fixed2<'a>(val: impl Into<NumericInput<'a>>) -> String {
    match val.into().to_decimal() {
        Some(d) => format!("{:.2}", d.round_dp(2)),
        None => MISSING.to_string(),
    }
}

/// Like [`format_fixed2`] for an optional value.
pub fn format_optional(val: Option<Decimal>) -> String {
    match val {
        Some(d) => format_fixed2(d),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_dot_decimal() {
        assert_eq!(parse_locale_float("62.83"), Some(dec!(62.83)));
    }

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(parse_locale_float("62,83"), Some(dec!(62.83)));
        assert_eq!(parse_locale_float("0,030"), parse_locale_float("0.030"));
    }

    #[test]
    fn test_parse_whitespace_trimming() {
        assert_eq!(parse_locale_float("  68  "), Some(dec!(68)));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_locale_float(""), None);
        assert_eq!(parse_locale_float("-"), None);
        assert_eq!(parse_locale_float("abc"), None);
        assert_eq!(parse_locale_float("1.2.3"), None);
        assert_eq!(parse_locale_float("1,2.3"), None);
    }

    #[test]
    fn test_distance_bare_meters() {
        assert_eq!(parse_distance_to_meters("1.5"), Some(dec!(1.5)));
        assert_eq!(parse_distance_to_meters("10"), Some(dec!(10)));
    }

    #[test]
    fn test_distance_bare_centimeters_heuristic() {
        assert_eq!(parse_distance_to_meters("150"), Some(dec!(1.5)));
        assert_eq!(parse_distance_to_meters("10,5"), Some(dec!(0.105)));
    }

    #[test]
    fn test_distance_centimeter_marker() {
        assert_eq!(parse_distance_to_meters("50cm"), Some(dec!(0.5)));
        assert_eq!(parse_distance_to_meters("50 CM"), Some(dec!(0.5)));
        assert_eq!(parse_distance_to_meters("75 см"), Some(dec!(0.75)));
        assert_eq!(parse_distance_to_meters("a = 2,5 см"), Some(dec!(0.025)));
    }

    #[test]
    fn test_distance_meter_marker_skips_heuristic() {
        assert_eq!(parse_distance_to_meters("15 m"), Some(dec!(15)));
        assert_eq!(parse_distance_to_meters("1,5 м"), Some(dec!(1.5)));
    }

    #[test]
    fn test_distance_rounds_to_four_places() {
        assert_eq!(parse_distance_to_meters("12.345"), Some(dec!(0.1234)));
        assert_eq!(parse_distance_to_meters("1.23456"), Some(dec!(1.2346)));
    }

    #[test]
    fn test_distance_failures() {
        assert_eq!(parse_distance_to_meters("-"), None);
        assert_eq!(parse_distance_to_meters("cm"), None);
        assert_eq!(parse_distance_to_meters("n/a"), None);
    }

    #[test]
    fn test_format_fixed2_text_and_number() {
        assert_eq!(format_fixed2("62,8318"), "62.83");
        assert_eq!(format_fixed2("7"), "7.00");
        assert_eq!(format_fixed2(dec!(1.5)), "1.50");
        assert_eq!(format_fixed2(dec!(0)), "0.00");
    }

    #[test]
    fn test_format_fixed2_sentinel() {
        assert_eq!(format_fixed2(""), MISSING);
        assert_eq!(format_fixed2("-"), MISSING);
        assert_eq!(format_fixed2("nan"), MISSING);
        assert_eq!(format_fixed2("ten"), MISSING);
        assert_eq!(format_fixed2("1e999"), MISSING);
    }

    #[test]
    fn test_format_fixed2_idempotent() {
        for raw in ["62.83185", "0,005", "100", "-3.14159", "12.345", "-"] {
            let once = format_fixed2(raw);
            assert_eq!(format_fixed2(once.as_str()), once, "input {raw}");
        }
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None), MISSING);
        assert_eq!(format_optional(Some(dec!(2.5))), "2.50");
    }
}
