//! Checks argument values against declared parameter ranges.
use super::rules::primitives::Primitive;
use super::types::ParamRange;
use crate::graph::{ConfigGraph, NodeId, NodeKind};
use tracing::trace;

/// Checks whether `value` satisfies `range`.
///
/// When `value` is a literal and `range` a recognized primitive, a successful
/// check also stores the typed value on the literal.
pub fn matches(graph: &ConfigGraph, value: Option<NodeId>, range: &ParamRange) -> bool {
    RangeChecker { graph }.matches(value, range)
}

struct RangeChecker<'a> {
    graph: &'a ConfigGraph,
}

impl RangeChecker<'_> {
    fn matches(&self, value: Option<NodeId>, range: &ParamRange) -> bool {
        if let ParamRange::Any = range {
            return true;
        }
        let value = value.and_then(|id| self.graph.resource(id).map(|r| (id, r)));

        let (id, resource) = match value {
            None => return self.matches_absent(range),
            Some(value) => value,
        };

        // --- PHASE 1: PRIMITIVES ---
        if let ParamRange::Type(iri) = range {
            if let Some(primitive) = Primitive::from_iri(iri) {
                match resource.kind() {
                    NodeKind::Literal => {
                        return match primitive.coerce(resource.value()) {
                            Ok(raw) => {
                                if let Some(raw) = raw {
                                    trace!(value = resource.value(), ?raw, "coerced literal");
                                    resource.coerce(raw);
                                }
                                true
                            }
                            Err(()) => false,
                        };
                    }
                    // Identifiers may stand in for strings.
                    NodeKind::Named if primitive == Primitive::String => return true,
                    _ => {}
                }
            }
        }

        // --- PHASE 2: TAGS ---
        // Variables are resolved later, and values already tagged with the expected
        // type pass without structural inspection.
        if self.graph.is_variable(id) {
            return true;
        }
        if let ParamRange::Type(iri) = range {
            if self.graph.is_a(id, iri) {
                return true;
            }
        }

        // --- PHASE 3: STRUCTURE ---
        match range {
            ParamRange::Array(element) => match self.graph.list_items(id) {
                Some(items) => items.into_iter().all(|item| self.matches(Some(item), element)),
                None => false,
            },
            ParamRange::Union(options) => options.iter().any(|option| self.matches(Some(id), option)),
            ParamRange::Intersection(options) => {
                options.iter().all(|option| self.matches(Some(id), option))
            }
            ParamRange::Tuple(entries) => match self.graph.list_items(id) {
                Some(items) => self.matches_tuple(&items, entries),
                None => false,
            },
            ParamRange::Literal(expected) => resource.term == *expected,
            ParamRange::CollectEntries => true,
            ParamRange::Any => true,
            ParamRange::Undefined | ParamRange::Type(_) | ParamRange::Rest(_) => false,
        }
    }

    /// Checks an absent value. Only composite ranges can still accept it.
    fn matches_absent(&self, range: &ParamRange) -> bool {
        match range {
            ParamRange::Any | ParamRange::Undefined | ParamRange::CollectEntries => true,
            ParamRange::Union(options) => options.iter().any(|option| self.matches(None, option)),
            ParamRange::Intersection(options) => options.iter().all(|option| self.matches(None, option)),
            ParamRange::Literal(_)
            | ParamRange::Type(_)
            | ParamRange::Array(_)
            | ParamRange::Rest(_)
            | ParamRange::Tuple(_) => false,
        }
    }

    /// Walks list items and tuple entries in lockstep.
    ///
    /// A rest entry consumes items while they match its element range and hands over
    /// to the next entry at the first item that does not.
    fn matches_tuple(&self, items: &[NodeId], entries: &[ParamRange]) -> bool {
        let mut item_index = 0;
        let mut entry_index = 0;

        while item_index < items.len() && entry_index < entries.len() {
            let item = Some(items[item_index]);
            match &entries[entry_index] {
                ParamRange::Rest(element) => {
                    if self.matches(item, element) {
                        item_index += 1;
                    } else {
                        entry_index += 1;
                    }
                }
                entry => {
                    if !self.matches(item, entry) {
                        return false;
                    }
                    entry_index += 1;
                    item_index += 1;
                }
            }
        }

        item_index == items.len()
            && (entry_index == entries.len()
                || (entry_index == entries.len() - 1 && entries[entry_index].is_rest()))
    }
}
