//! store.rs
//! Append-only config graph. Resources are node weights, properties and list
//! membership are edges.

use super::edge::Edge;
use super::node::{NodeId, NodeKind, Resource, Term};
use crate::iris::{oo, rdf, xsd};
use parking_lot::RwLock;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct GraphInner {
    graph: StableDiGraph<Arc<Resource>, Edge>,
    // Named nodes and variables are unique per (kind, value). Literals are never indexed.
    index: HashMap<(NodeKind, String), NodeId>,
    blank_counter: u64,
}

impl GraphInner {
    fn push(&mut self, term: Term) -> NodeId {
        self.graph.add_node(Arc::new(Resource::new(term)))
    }

    fn intern(&mut self, kind: NodeKind, value: &str) -> NodeId {
        if let Some(&id) = self.index.get(&(kind, value.to_string())) {
            return id;
        }
        let id = self.push(Term { kind, value: value.to_string(), datatype: None });
        self.index.insert((kind, value.to_string()), id);
        id
    }

    fn next_blank(&mut self, prefix: &str) -> String {
        self.blank_counter += 1;
        format!("_:{}{}", prefix, self.blank_counter)
    }

    /// Outgoing edges matching `pred`, in insertion order.
    fn targets(&self, id: NodeId, pred: impl Fn(&Edge) -> bool) -> Vec<(usize, Edge, NodeId)> {
        if !self.graph.contains_node(id) {
            return Vec::new();
        }
        let mut out: Vec<_> = self
            .graph
            .edges_directed(id, Direction::Outgoing)
            .filter(|e| pred(e.weight()))
            .map(|e| (e.id().index(), e.weight().clone(), e.target()))
            .collect();
        out.sort_by_key(|(order, _, _)| *order);
        out
    }
}

/// Thread-safe, append-only store of config resources.
///
/// Every accessor takes the lock only for the duration of the call, so callers
/// never hold a guard while recursing through the graph.
#[derive(Debug, Default)]
pub struct ConfigGraph {
    inner: RwLock<GraphInner>,
}

impl ConfigGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- Construction ---

    /// Returns the named resource for `iri`, creating it on first use.
    pub fn named(&self, iri: &str) -> NodeId {
        self.inner.write().intern(NodeKind::Named, iri)
    }

    /// Returns the variable resource called `name`, creating it on first use.
    pub fn variable(&self, name: &str) -> NodeId {
        self.inner.write().intern(NodeKind::Variable, name)
    }

    pub fn blank(&self) -> NodeId {
        let mut inner = self.inner.write();
        let value = inner.next_blank("b");
        let id = inner.push(Term { kind: NodeKind::Blank, value: value.clone(), datatype: None });
        inner.index.insert((NodeKind::Blank, value), id);
        id
    }

    /// A plain literal, typed `xsd:string`.
    pub fn literal(&self, value: &str) -> NodeId {
        self.typed_literal(value, xsd::STRING)
    }

    pub fn typed_literal(&self, value: &str, datatype: &str) -> NodeId {
        self.inner.write().push(Term::literal(value, datatype))
    }

    pub fn list(&self, items: &[NodeId]) -> NodeId {
        let mut inner = self.inner.write();
        let value = inner.next_blank("l");
        let id = inner.push(Term { kind: NodeKind::List, value: value.clone(), datatype: None });
        inner.index.insert((NodeKind::List, value), id);
        for (position, &item) in items.iter().enumerate() {
            inner.graph.add_edge(id, item, Edge::Item(position as u32));
        }
        id
    }

    pub fn add_property(&self, subject: NodeId, predicate: &str, object: NodeId) {
        self.inner.write().graph.add_edge(subject, object, Edge::Property(predicate.to_string()));
    }

    pub fn add_type(&self, subject: NodeId, type_iri: &str) {
        let mut inner = self.inner.write();
        let object = inner.intern(NodeKind::Named, type_iri);
        inner.graph.add_edge(subject, object, Edge::Property(rdf::TYPE.to_string()));
    }

    // --- Accessors ---

    pub fn resource(&self, id: NodeId) -> Option<Arc<Resource>> {
        self.inner.read().graph.node_weight(id).cloned()
    }

    pub fn term(&self, id: NodeId) -> Option<Term> {
        self.resource(id).map(|r| r.term.clone())
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.inner.read().graph.node_weight(id).map(|r| r.kind())
    }

    /// Looks up an interned (non-literal) resource.
    pub fn find(&self, kind: NodeKind, value: &str) -> Option<NodeId> {
        self.inner.read().index.get(&(kind, value.to_string())).copied()
    }

    /// The first value of `predicate` on `id`.
    pub fn property(&self, id: NodeId, predicate: &str) -> Option<NodeId> {
        self.properties(id, predicate).into_iter().next()
    }

    /// All values of `predicate` on `id`, in insertion order.
    pub fn properties(&self, id: NodeId, predicate: &str) -> Vec<NodeId> {
        let inner = self.inner.read();
        inner
            .targets(id, |e| e.predicate() == Some(predicate))
            .into_iter()
            .map(|(_, _, target)| target)
            .collect()
    }

    /// The ordered items of a list resource, or `None` if `id` is not a list.
    pub fn list_items(&self, id: NodeId) -> Option<Vec<NodeId>> {
        let inner = self.inner.read();
        if inner.graph.node_weight(id)?.kind() != NodeKind::List {
            return None;
        }
        let mut items: Vec<(u32, NodeId)> = inner
            .targets(id, |e| matches!(e, Edge::Item(_)))
            .into_iter()
            .filter_map(|(_, edge, target)| match edge {
                Edge::Item(position) => Some((position, target)),
                Edge::Property(_) => None,
            })
            .collect();
        items.sort_by_key(|(position, _)| *position);
        Some(items.into_iter().map(|(_, target)| target).collect())
    }

    /// The IRIs of all declared types of `id`.
    pub fn types(&self, id: NodeId) -> Vec<String> {
        let inner = self.inner.read();
        inner
            .targets(id, |e| e.predicate() == Some(rdf::TYPE))
            .into_iter()
            .filter_map(|(_, _, target)| inner.graph.node_weight(target))
            .map(|r| r.term.value.clone())
            .collect()
    }

    pub fn is_a(&self, id: NodeId, type_iri: &str) -> bool {
        self.types(id).iter().any(|t| t == type_iri)
    }

    pub fn is_variable(&self, id: NodeId) -> bool {
        self.kind(id) == Some(NodeKind::Variable) || self.is_a(id, oo::VARIABLE)
    }
}
