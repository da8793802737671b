//! Defines the error types for the range module.
use crate::graph::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// An argument value does not satisfy its parameter's declared range.
    #[error(
        "The value \"{value}\"{} for parameter \"{parameter}\" is not of required range type \"{expected}\"",
        with_types(.types)
    )]
    Violation {
        /// The rendered value, `[a, b]` for lists or `undefined` when absent.
        value: String,
        /// Declared types of the value, if any.
        types: Vec<String>,
        parameter: String,
        /// The display form of the expected range.
        expected: String,
    },
    /// A composite range resource lacks the value it wraps.
    #[error("Invalid range \"{range}\": missing {property}")]
    MissingValue { range: String, property: &'static str },
    /// A range reference points at no resource in the graph.
    #[error("Unknown range resource {0:?}")]
    UnknownRange(NodeId),
}

fn with_types(types: &[String]) -> String {
    if types.is_empty() {
        String::new()
    } else {
        format!(" with types \"{}\"", types.join(","))
    }
}
