//! Cell value conversions.

use polars::prelude::AnyValue;

/// Text form of a cell as written to `cleaned_data.csv`.
///
/// Missing cells become an empty string and floats drop trailing zeros.
///
/// ```
/// use polars::prelude::AnyValue;
/// use sweep_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Float64(2.0)), "2");
/// assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
/// assert_eq!(any_to_string(AnyValue::String("a b")), "a b");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(text) => text.to_owned(),
        AnyValue::StringOwned(text) => text.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => unquote(other.to_string()),
    }
}

/// Missing cells are nulls and empty text.
///
/// ```
/// use polars::prelude::AnyValue;
/// use sweep_common::is_missing;
///
/// assert!(is_missing(&AnyValue::Null));
/// assert!(is_missing(&AnyValue::String("")));
/// assert!(!is_missing(&AnyValue::String(" ")));
/// ```
pub fn is_missing(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(text) => text.is_empty(),
        AnyValue::StringOwned(text) => text.is_empty(),
        _ => false,
    }
}

/// Display of nested values wraps strings in quotes.
fn unquote(text: String) -> String {
    match text.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        None => text,
    }
}

/// Shortest decimal form of `v`: `1.0` is `"1"`, `1.50` is `"1.5"`.
///
/// ```
/// use sweep_common::format_numeric;
///
/// assert_eq!(format_numeric(40.0), "40");
/// assert_eq!(format_numeric(0.125), "0.125");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        // Also covers -0.0
        "0".to_string()
    } else {
        v.to_string()
    }
}

/// Numeric value of a cell.
///
/// Integers and floats convert directly and text goes through
/// [`parse_numeric`]. Booleans and missing cells have no numeric value.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null | AnyValue::Boolean(_) => None,
        AnyValue::String(text) => parse_numeric(text),
        AnyValue::StringOwned(text) => parse_numeric(&text),
        AnyValue::Float64(v) => Some(v),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt64(v) => Some(v as f64),
        _ => None,
    }
}

/// Parse numeric text.
///
/// Accepts surrounding whitespace, a sign, decimals, exponents and
/// `inf`/`infinity`. Empty text, `NaN`, thousands separators and anything
/// else yield `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    match text.trim() {
        "" => None,
        trimmed => trimmed.parse::<f64>().ok().filter(|v| !v.is_nan()),
    }
}
