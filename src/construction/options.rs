//! Configuration record for a `ConstructionPool`.
use super::preprocess::{ConfigPreprocessor, DynPreprocessor};
use super::strategy::ConstructionStrategy;
use crate::graph::ConfigGraph;
use std::sync::Arc;

/// Everything a pool is built from.
pub struct PoolOptions<S: ConstructionStrategy> {
    pub graph: Arc<ConfigGraph>,
    pub strategy: S,
    pub(crate) preprocessors: Vec<Box<dyn DynPreprocessor>>,
}

impl<S: ConstructionStrategy> PoolOptions<S> {
    pub fn new(graph: Arc<ConfigGraph>, strategy: S) -> Self {
        Self { graph, strategy, preprocessors: Vec::new() }
    }

    /// Appends a preprocessor. Preprocessors are tried in the order they are added.
    pub fn with_preprocessor<P: ConfigPreprocessor>(mut self, preprocessor: P) -> Self {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    pub fn preprocessor_count(&self) -> usize {
        self.preprocessors.len()
    }
}
