//! Renders ranges in the textual form used by diagnostics.
use super::types::ParamRange;
use std::fmt;

impl fmt::Display for ParamRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamRange::Any => f.write_str("any"),
            ParamRange::Undefined => f.write_str("undefined"),
            ParamRange::Literal(term) => f.write_str(&term.value),
            ParamRange::Type(iri) => f.write_str(iri),
            ParamRange::Array(element) => write!(f, "{}[]", element),
            ParamRange::Rest(element) => write!(f, "...{}", element),
            ParamRange::Tuple(entries) => {
                f.write_str("[")?;
                write_joined(f, entries, ", ")?;
                f.write_str("]")
            }
            ParamRange::Union(options) => write_joined(f, options, " | "),
            ParamRange::Intersection(options) => write_joined(f, options, " & "),
            ParamRange::CollectEntries => f.write_str("collectEntries"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, ranges: &[ParamRange], separator: &str) -> fmt::Result {
    for (i, range) in ranges.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", range)?;
    }
    Ok(())
}

/// The display form of `range`.
pub fn display(range: &ParamRange) -> String {
    range.to_string()
}
