//! Defines the error types for the construction module.
use crate::graph::{NodeId, NodeKind};
use crate::range::RangeError;
use thiserror::Error;

/// Errors raised while resolving and building a config.
///
/// Errors are `Clone` because one in-flight construction hands the same error to
/// every waiter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// A required shape field is absent from a raw config.
    #[error("Invalid config: Missing {field}")]
    MissingField { field: String, config: String },
    /// A shape field is present but has the wrong term kind.
    #[error("Invalid config: {field} \"{value}\" must be a {expected}, but got {actual}")]
    WrongFieldType {
        field: String,
        value: String,
        expected: NodeKind,
        actual: NodeKind,
        config: String,
    },
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("Unknown config node {0:?}")]
    UnknownNode(NodeId),
    /// A construction strategy failed for its own reasons.
    #[error("Failed to construct \"{config}\": {message}")]
    Strategy { config: String, message: String },
}

impl ConstructionError {
    /// The identifier of the config this error is attached to, if any.
    pub fn config(&self) -> Option<&str> {
        match self {
            ConstructionError::MissingField { config, .. }
            | ConstructionError::WrongFieldType { config, .. }
            | ConstructionError::Strategy { config, .. } => Some(config),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let missing = ConstructionError::MissingField { field: "requireName".into(), config: "ex:a".into() };
        assert_eq!(missing.to_string(), "Invalid config: Missing requireName");
        assert_eq!(missing.config(), Some("ex:a"));

        let wrong = ConstructionError::WrongFieldType {
            field: "requireElement".into(),
            value: "ex:el".into(),
            expected: NodeKind::Literal,
            actual: NodeKind::Named,
            config: "ex:a".into(),
        };
        assert_eq!(
            wrong.to_string(),
            "Invalid config: requireElement \"ex:el\" must be a Literal, but got NamedNode"
        );

        let var = ConstructionError::UndefinedVariable { name: "port".into() };
        assert_eq!(var.to_string(), "Undefined variable: port");
        assert_eq!(var.config(), None);
    }
}
