//! The parameter range algebra and its lowering from config resources.

use super::error::RangeError;
use crate::graph::{ConfigGraph, NodeId, NodeKind, Term};
use crate::iris::{oo, rdfs};
use serde::{Deserialize, Serialize};

/// The declared structural type constraint of a constructor parameter.
///
/// Ranges are built once from the config document and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamRange {
    /// No constraint at all.
    Any,
    /// Only an absent value is accepted.
    Undefined,
    /// The value must equal this exact term.
    Literal(Term),
    /// A primitive datatype IRI, or a type the value must be tagged with.
    Type(String),
    /// A list whose items all match the element range.
    Array(Box<ParamRange>),
    /// Inside a tuple: zero or more consecutive items matching the element range.
    Rest(Box<ParamRange>),
    Tuple(Vec<ParamRange>),
    Union(Vec<ParamRange>),
    Intersection(Vec<ParamRange>),
    /// Nested field collections. Their entries are not checked.
    CollectEntries,
}

impl ParamRange {
    pub fn array(element: ParamRange) -> Self {
        ParamRange::Array(Box::new(element))
    }

    pub fn rest(element: ParamRange) -> Self {
        ParamRange::Rest(Box::new(element))
    }

    pub fn of_type(iri: impl Into<String>) -> Self {
        ParamRange::Type(iri.into())
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, ParamRange::Rest(_))
    }

    /// Lowers the range resource `id` into a `ParamRange`.
    ///
    /// The range kind is taken from its `ParameterRange*` type tag. A resource without
    /// such a tag stands for a type IRI.
    pub fn from_graph(graph: &ConfigGraph, id: NodeId) -> Result<Self, RangeError> {
        let term = graph.term(id).ok_or(RangeError::UnknownRange(id))?;
        let types = graph.types(id);
        let tagged = |iri: &str| types.iter().any(|t| t == iri);

        if tagged(oo::RANGE_UNDEFINED) {
            Ok(ParamRange::Undefined)
        } else if tagged(oo::RANGE_ARRAY) {
            Ok(ParamRange::array(Self::inner_value(graph, id, &term)?))
        } else if tagged(oo::RANGE_REST) {
            Ok(ParamRange::rest(Self::inner_value(graph, id, &term)?))
        } else if tagged(oo::RANGE_UNION) {
            Ok(ParamRange::Union(Self::elements(graph, id)?))
        } else if tagged(oo::RANGE_INTERSECTION) {
            Ok(ParamRange::Intersection(Self::elements(graph, id)?))
        } else if tagged(oo::RANGE_TUPLE) {
            Ok(ParamRange::Tuple(Self::elements(graph, id)?))
        } else if tagged(oo::RANGE_LITERAL) {
            let value = graph
                .property(id, oo::PARAMETER_RANGE_VALUE)
                .and_then(|v| graph.term(v))
                .ok_or_else(|| RangeError::MissingValue {
                    range: term.value.clone(),
                    property: "parameterRangeValue",
                })?;
            Ok(ParamRange::Literal(value))
        } else if tagged(oo::RANGE_COLLECT_ENTRIES) {
            Ok(ParamRange::CollectEntries)
        } else {
            Ok(ParamRange::Type(term.value))
        }
    }

    fn inner_value(graph: &ConfigGraph, id: NodeId, term: &Term) -> Result<Self, RangeError> {
        let value = graph
            .property(id, oo::PARAMETER_RANGE_VALUE)
            .ok_or_else(|| RangeError::MissingValue {
                range: term.value.clone(),
                property: "parameterRangeValue",
            })?;
        Self::from_graph(graph, value)
    }

    /// Composite members, either from a single list value or from all values in order.
    fn elements(graph: &ConfigGraph, id: NodeId) -> Result<Vec<Self>, RangeError> {
        let values = graph.properties(id, oo::PARAMETER_RANGE_ELEMENTS);
        let members = match values.as_slice() {
            [single] if graph.kind(*single) == Some(NodeKind::List) => {
                graph.list_items(*single).unwrap_or_default()
            }
            _ => values,
        };
        members.into_iter().map(|m| Self::from_graph(graph, m)).collect()
    }
}

/// Describes one constructor argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The parameter's identifier, used in diagnostics.
    pub id: String,
    pub range: ParamRange,
}

impl Parameter {
    pub fn new(id: impl Into<String>, range: ParamRange) -> Self {
        Self { id: id.into(), range }
    }

    /// Reads a parameter resource; a missing `rdfs:range` means `Any`.
    pub fn from_graph(graph: &ConfigGraph, id: NodeId) -> Result<Self, RangeError> {
        let name = graph.term(id).map(|t| t.value).unwrap_or_default();
        let range = match graph.property(id, rdfs::RANGE) {
            Some(range) => ParamRange::from_graph(graph, range)?,
            None => ParamRange::Any,
        };
        Ok(Self { id: name, range })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iris::xsd;

    fn range_node(graph: &ConfigGraph, tag: &str) -> NodeId {
        let node = graph.blank();
        graph.add_type(node, tag);
        node
    }

    #[test]
    fn test_lowers_named_type() {
        let graph = ConfigGraph::new();
        let int = graph.named(xsd::INTEGER);
        assert_eq!(ParamRange::from_graph(&graph, int).unwrap(), ParamRange::of_type(xsd::INTEGER));
    }

    #[test]
    fn test_lowers_nested_array_and_union() {
        let graph = ConfigGraph::new();
        let union = range_node(&graph, oo::RANGE_UNION);
        graph.add_property(union, oo::PARAMETER_RANGE_ELEMENTS, graph.named(xsd::INTEGER));
        graph.add_property(union, oo::PARAMETER_RANGE_ELEMENTS, graph.named(xsd::STRING));
        let array = range_node(&graph, oo::RANGE_ARRAY);
        graph.add_property(array, oo::PARAMETER_RANGE_VALUE, union);

        assert_eq!(
            ParamRange::from_graph(&graph, array).unwrap(),
            ParamRange::array(ParamRange::Union(vec![
                ParamRange::of_type(xsd::INTEGER),
                ParamRange::of_type(xsd::STRING),
            ]))
        );
    }

    #[test]
    fn test_lowers_tuple_from_list_elements() {
        let graph = ConfigGraph::new();
        let rest = range_node(&graph, oo::RANGE_REST);
        graph.add_property(rest, oo::PARAMETER_RANGE_VALUE, graph.named(xsd::INTEGER));
        let tuple = range_node(&graph, oo::RANGE_TUPLE);
        let members = graph.list(&[graph.named(xsd::STRING), rest]);
        graph.add_property(tuple, oo::PARAMETER_RANGE_ELEMENTS, members);

        assert_eq!(
            ParamRange::from_graph(&graph, tuple).unwrap(),
            ParamRange::Tuple(vec![
                ParamRange::of_type(xsd::STRING),
                ParamRange::rest(ParamRange::of_type(xsd::INTEGER)),
            ])
        );
    }

    #[test]
    fn test_lowers_literal_and_markers() {
        let graph = ConfigGraph::new();
        let literal = range_node(&graph, oo::RANGE_LITERAL);
        graph.add_property(literal, oo::PARAMETER_RANGE_VALUE, graph.literal("on"));
        assert_eq!(
            ParamRange::from_graph(&graph, literal).unwrap(),
            ParamRange::Literal(Term::literal("on", xsd::STRING))
        );

        let undefined = range_node(&graph, oo::RANGE_UNDEFINED);
        assert_eq!(ParamRange::from_graph(&graph, undefined).unwrap(), ParamRange::Undefined);

        let entries = range_node(&graph, oo::RANGE_COLLECT_ENTRIES);
        assert_eq!(ParamRange::from_graph(&graph, entries).unwrap(), ParamRange::CollectEntries);
    }

    #[test]
    fn test_missing_inner_value_is_reported() {
        let graph = ConfigGraph::new();
        let array = range_node(&graph, oo::RANGE_ARRAY);
        let err = ParamRange::from_graph(&graph, array).unwrap_err();
        assert!(matches!(err, RangeError::MissingValue { property: "parameterRangeValue", .. }));
    }

    #[test]
    fn test_dangling_range_reference_is_reported() {
        let graph = ConfigGraph::new();
        let missing = NodeId::new(99);
        assert_eq!(ParamRange::from_graph(&graph, missing), Err(RangeError::UnknownRange(missing)));
    }

    #[test]
    fn test_parameter_without_range_is_unconstrained() {
        let graph = ConfigGraph::new();
        let param = graph.named("ex:param");
        let parsed = Parameter::from_graph(&graph, param).unwrap();
        assert_eq!(parsed, Parameter::new("ex:param", ParamRange::Any));

        graph.add_property(param, rdfs::RANGE, graph.named(xsd::BOOLEAN));
        let parsed = Parameter::from_graph(&graph, param).unwrap();
        assert_eq!(parsed.range, ParamRange::of_type(xsd::BOOLEAN));
    }
}
