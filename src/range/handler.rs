//! Applies a parameter's range to an argument value and reports violations.
use super::checker::matches;
use super::error::RangeError;
use super::types::{ParamRange, Parameter};
use crate::graph::{ConfigGraph, NodeId};
use tracing::debug;

/// Validates argument values against the range declared on their parameter.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeHandler;

impl RangeHandler {
    pub fn new() -> Self {
        Self
    }

    /// Only parameters with a declared range are checked.
    pub fn can_handle(&self, param: &Parameter) -> bool {
        !matches!(param.range, ParamRange::Any)
    }

    /// Checks `value` against `param`'s range, coercing literals on success.
    pub fn capture_type(
        &self,
        graph: &ConfigGraph,
        value: Option<NodeId>,
        param: &Parameter,
    ) -> Result<(), RangeError> {
        if matches(graph, value, &param.range) {
            return Ok(());
        }
        let error = RangeError::Violation {
            value: render_value(graph, value),
            types: value.map(|id| graph.types(id)).unwrap_or_default(),
            parameter: param.id.clone(),
            expected: param.range.to_string(),
        };
        debug!(parameter = %param.id, %error, "range violation");
        Err(error)
    }
}

/// Lists render as `[a, b]` from their items' values.
fn render_value(graph: &ConfigGraph, value: Option<NodeId>) -> String {
    let id = match value {
        Some(id) => id,
        None => return "undefined".to_string(),
    };
    match graph.list_items(id) {
        Some(items) => {
            let rendered: Vec<String> = items
                .into_iter()
                .filter_map(|item| graph.term(item))
                .map(|term| term.value)
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        None => graph.term(id).map(|term| term.value).unwrap_or_else(|| "undefined".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RawValue;
    use crate::iris::xsd;

    fn int_param() -> Parameter {
        Parameter::new("ex:port", ParamRange::of_type(xsd::INTEGER))
    }

    #[test]
    fn test_can_handle_only_declared_ranges() {
        let handler = RangeHandler::new();
        assert!(handler.can_handle(&int_param()));
        assert!(!handler.can_handle(&Parameter::new("ex:free", ParamRange::Any)));
    }

    #[test]
    fn test_capture_type_coerces_on_success() {
        let graph = ConfigGraph::new();
        let lit = graph.literal("8080");
        RangeHandler::new().capture_type(&graph, Some(lit), &int_param()).unwrap();
        let resource = graph.resource(lit).unwrap();
        assert_eq!(resource.raw_value(), Some(RawValue::Integer(8080)));
    }

    #[test]
    fn test_violation_message_for_literal() {
        let graph = ConfigGraph::new();
        let lit = graph.literal("abc");
        let err = RangeHandler::new().capture_type(&graph, Some(lit), &int_param()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "The value \"abc\" for parameter \"ex:port\" is not of required range type \"{}\"",
                xsd::INTEGER
            )
        );
    }

    #[test]
    fn test_violation_message_for_list_with_types() {
        let graph = ConfigGraph::new();
        let list = graph.list(&[graph.literal("a"), graph.literal("b")]);
        graph.add_type(list, "ex:Pair");
        graph.add_type(list, "ex:Seq");
        let param = Parameter::new("ex:flag", ParamRange::of_type(xsd::BOOLEAN));
        let err = RangeHandler::new().capture_type(&graph, Some(list), &param).unwrap_err();
        assert_eq!(
            err,
            RangeError::Violation {
                value: "[a, b]".to_string(),
                types: vec!["ex:Pair".to_string(), "ex:Seq".to_string()],
                parameter: "ex:flag".to_string(),
                expected: xsd::BOOLEAN.to_string(),
            }
        );
        assert!(err.to_string().contains("\"[a, b]\" with types \"ex:Pair,ex:Seq\""));
    }

    #[test]
    fn test_violation_for_absent_value() {
        let graph = ConfigGraph::new();
        let param = Parameter::new(
            "ex:items",
            ParamRange::array(ParamRange::Union(vec![ParamRange::of_type("ex:A"), ParamRange::of_type("ex:B")])),
        );
        let err = RangeHandler::new().capture_type(&graph, None, &param).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The value \"undefined\" for parameter \"ex:items\" is not of required range type \"ex:A | ex:B[]\""
        );
    }
}
