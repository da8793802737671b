use crate::graph::ConfigGraph;
use crate::range::{self, ParamRange};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn parse_range(range_json: &str) -> PyResult<ParamRange> {
    serde_json::from_str(range_json).map_err(|e| PyValueError::new_err(format!("Invalid range: {}", e)))
}

/// Renders a JSON-encoded range the way diagnostics show it.
#[pyfunction]
pub fn display_range(range_json: &str) -> PyResult<String> {
    Ok(range::display(&parse_range(range_json)?))
}

/// Checks a literal against a JSON-encoded range.
///
/// Returns whether it matched and, for primitive ranges, the coerced value as JSON.
#[pyfunction]
pub fn check_literal(range_json: &str, text: &str) -> PyResult<(bool, Option<String>)> {
    let range = parse_range(range_json)?;
    let graph = ConfigGraph::new();
    let literal = graph.literal(text);
    let matched = range::matches(&graph, Some(literal), &range);
    let raw = graph
        .resource(literal)
        .and_then(|r| r.raw_value().map(|v| v.to_json().to_string()));
    Ok((matched, raw))
}
