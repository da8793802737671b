//! Config preprocessors turn config dialects into the canonical raw form.
use super::error::ConstructionError;
use crate::graph::{ConfigGraph, NodeId};

/// Rewrites one config dialect into a raw config.
///
/// `can_handle` returns a handle describing what it recognized; that handle is
/// passed back to `transform`, so the work done while recognizing is not repeated.
pub trait ConfigPreprocessor: Send + Sync + 'static {
    type Handle;

    fn can_handle(&self, graph: &ConfigGraph, config: NodeId) -> Option<Self::Handle>;

    fn transform(
        &self,
        graph: &ConfigGraph,
        config: NodeId,
        handle: Self::Handle,
    ) -> Result<NodeId, ConstructionError>;
}

/// Object-safe view of a preprocessor, with its handle type erased.
pub(crate) trait DynPreprocessor: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` when the preprocessor does not handle `config`.
    fn try_transform(&self, graph: &ConfigGraph, config: NodeId) -> Option<Result<NodeId, ConstructionError>>;
}

impl<P: ConfigPreprocessor> DynPreprocessor for P {
    fn name(&self) -> &'static str {
        std::any::type_name::<P>()
    }

    fn try_transform(&self, graph: &ConfigGraph, config: NodeId) -> Option<Result<NodeId, ConstructionError>> {
        let handle = self.can_handle(graph, config)?;
        Some(self.transform(graph, config, handle))
    }
}
