//! Defines the core data structures for the config graph.
pub mod edge;
pub mod node;
pub mod store;

// Re-export key types for convenient access
pub use edge::Edge;
pub use node::{NodeId, NodeKind, RawValue, Resource, Term};
pub use store::ConfigGraph;
