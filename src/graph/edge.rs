//! Defines the `Edge` type, representing a link between two resources.

use serde::{Deserialize, Serialize};

/// Describes how a resource refers to another resource in the config graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// A predicate-labelled property value.
    /// Example: `ex:server oo:arguments _:list`. The link from `ex:server` to `_:list` carries
    /// the `oo:arguments` predicate.
    Property(String),
    /// Membership of an ordered list at the given position.
    Item(u32),
}

impl Edge {
    pub fn predicate(&self) -> Option<&str> {
        match self {
            Edge::Property(predicate) => Some(predicate),
            Edge::Item(_) => None,
        }
    }
}
