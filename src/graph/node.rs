//! Defines the `Resource` and its associated types, representing a single
//! addressable unit of a configuration document.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use parking_lot::RwLock;
use std::fmt;

/// A unique, stable identifier for a resource within the config graph.
///
/// This is a type alias for `petgraph::graph::NodeIndex` to abstract the
/// underlying graph implementation.
pub type NodeId = NodeIndex;

/// The kind of term a resource is identified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A resource identified by a global IRI.
    Named,
    /// An anonymous, composite resource.
    Blank,
    /// A scalar textual value.
    Literal,
    /// An ordered sequence of child resources.
    List,
    /// A placeholder resolved against construction settings.
    Variable,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Named => "NamedNode",
            NodeKind::Blank => "BlankNode",
            NodeKind::Literal => "Literal",
            NodeKind::List => "List",
            NodeKind::Variable => "Variable",
        };
        f.write_str(name)
    }
}

/// The identifying term of a resource.
///
/// Two terms are structurally equal when kind, value and datatype all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub kind: NodeKind,
    /// IRI, blank id, variable name, or the literal's lexical text.
    pub value: String,
    /// Only set for literals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl Term {
    pub fn named(iri: impl Into<String>) -> Self {
        Self { kind: NodeKind::Named, value: iri.into(), datatype: None }
    }

    pub fn literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self { kind: NodeKind::Literal, value: value.into(), datatype: Some(datatype.into()) }
    }

    pub fn is_literal(&self) -> bool {
        self.kind == NodeKind::Literal
    }
}

/// A literal's value after it has been coerced against a primitive range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Json(serde_json::Value),
}

impl RawValue {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            RawValue::Boolean(b) => serde_json::Value::Bool(*b),
            RawValue::Integer(i) => serde_json::Value::from(*i),
            // Non-finite floats have no JSON number form.
            RawValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(f.to_string())),
            RawValue::Json(value) => value.clone(),
        }
    }
}

/// A resource in the config graph.
///
/// Resources are immutable apart from `raw`, which the range checker sets each
/// time a literal passes a primitive check. The last successful check decides.
#[derive(Debug)]
pub struct Resource {
    pub term: Term,
    raw: RwLock<Option<RawValue>>,
}

impl Resource {
    pub fn new(term: Term) -> Self {
        Self { term, raw: RwLock::new(None) }
    }

    pub fn kind(&self) -> NodeKind {
        self.term.kind
    }

    pub fn value(&self) -> &str {
        &self.term.value
    }

    /// The typed value stored by a successful coercion, if any.
    pub fn raw_value(&self) -> Option<RawValue> {
        self.raw.read().clone()
    }

    /// Stores the coerced value, replacing any earlier coercion.
    pub(crate) fn coerce(&self, value: RawValue) {
        *self.raw.write() = Some(value);
    }
}
