use std::str::FromStr;

/// A numeric field value parsed from the raw text the clinician typed.
///
/// Every numeric field in [`PatientRecord`](crate::PatientRecord) is stored
/// as text. Calculators and validators read it through this type so that an
/// empty or malformed entry is never mistaken for zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumeric<T> {
    /// Nothing entered (empty or whitespace-only text).
    Empty,
    /// Text entered, but it does not parse as the expected numeric type.
    Invalid,
    Value(T),
}

impl<T: Copy> ParsedNumeric<T> {
    /// The parsed number, or `None` for both empty and invalid input.
    pub fn value(&self) -> Option<T> {
        match self {
            ParsedNumeric::Value(v) => Some(*v),
            ParsedNumeric::Empty | ParsedNumeric::Invalid => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParsedNumeric::Empty)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ParsedNumeric::Invalid)
    }
}

/// Parse an integer field. Leading/trailing whitespace is ignored; anything
/// else that is not a plain integer (including decimals like `"12.5"`) is
/// [`ParsedNumeric::Invalid`].
pub fn parse_integer<T: FromStr>(raw: &str) -> ParsedNumeric<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedNumeric::Empty;
    }
    match trimmed.parse::<T>() {
        Ok(v) => ParsedNumeric::Value(v),
        Err(_) => ParsedNumeric::Invalid,
    }
}

/// Parse a decimal field. `NaN` and infinities are rejected as invalid.
pub fn parse_decimal(raw: &str) -> ParsedNumeric<f64> {
    match parse_integer::<f64>(raw) {
        ParsedNumeric::Value(v) if !v.is_finite() => ParsedNumeric::Invalid,
        other => other,
    }
}
