//! Rules for coercing literal text against primitive datatypes.
use crate::graph::RawValue;
use crate::iris::{rdf, xsd};

/// The primitive datatypes a literal can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Primitive {
    String,
    Boolean,
    Integer,
    Float,
    Json,
}

impl Primitive {
    /// Recognizes a primitive datatype IRI. Unknown IRIs are not primitives.
    pub(crate) fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            xsd::STRING => Some(Primitive::String),
            xsd::BOOLEAN => Some(Primitive::Boolean),
            xsd::INTEGER | xsd::NUMBER | xsd::INT | xsd::BYTE | xsd::LONG => Some(Primitive::Integer),
            xsd::FLOAT | xsd::DECIMAL | xsd::DOUBLE => Some(Primitive::Float),
            rdf::JSON => Some(Primitive::Json),
            _ => None,
        }
    }

    /// Checks `text` against this primitive.
    ///
    /// Returns `Err(())` when the text is not a valid lexical form, otherwise the
    /// typed value to store on the literal (strings carry none).
    pub(crate) fn coerce(self, text: &str) -> Result<Option<RawValue>, ()> {
        match self {
            Primitive::String => Ok(None),
            Primitive::Boolean => match text {
                "true" => Ok(Some(RawValue::Boolean(true))),
                "false" => Ok(Some(RawValue::Boolean(false))),
                _ => Err(()),
            },
            Primitive::Integer => parse_canonical_integer(text).map(|i| Some(RawValue::Integer(i))),
            Primitive::Float => parse_leading_float(text).map(|f| Some(RawValue::Float(f))),
            Primitive::Json => serde_json::from_str(text)
                .map(|v| Some(RawValue::Json(v)))
                .map_err(|_| ()),
        }
    }
}

/// Parses a base-10 integer whose canonical rendering is exactly `text`.
///
/// This rejects floats (`1.0`), leading zeros (`04`), explicit plus signs and `-0`.
/// Values outside `i64` are rejected too, even when written canonically, since the
/// coerced value must fit `RawValue::Integer`.
pub(crate) fn parse_canonical_integer(text: &str) -> Result<i64, ()> {
    let parsed: i64 = text.parse().map_err(|_| ())?;
    if parsed.to_string() != text {
        return Err(());
    }
    Ok(parsed)
}

/// Parses the longest numeric prefix of `text`, after leading whitespace.
///
/// Trailing garbage is ignored (`3.5px` is `3.5`); text without a numeric prefix fails.
pub(crate) fn parse_leading_float(text: &str) -> Result<f64, ()> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return Ok(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return Err(());
    }

    // The exponent only counts when it has at least one digit.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().map_err(|_| ())
}
