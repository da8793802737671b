//! The construction pool: builds every config at most once.
//!
//! Each config id maps to one shared future. The first request for an id creates
//! and stores the future under the cache lock; every later request, nested or
//! concurrent, awaits a clone of that same future.

use super::error::ConstructionError;
use super::options::PoolOptions;
use super::preprocess::DynPreprocessor;
use super::settings::ConstructionSettings;
use super::strategy::ConstructionStrategy;
use crate::graph::{ConfigGraph, NodeId, NodeKind};
use crate::iris::oo;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

type InstanceFuture<I> = Shared<BoxFuture<'static, Result<I, ConstructionError>>>;

struct PoolInner<S: ConstructionStrategy> {
    graph: Arc<ConfigGraph>,
    strategy: S,
    preprocessors: Vec<Box<dyn DynPreprocessor>>,
    instances: Mutex<HashMap<String, InstanceFuture<S::Instance>>>,
}

/// Creates instances of configs, reusing one instance per config id.
///
/// Cloning the pool is cheap; all clones share one cache.
pub struct ConstructionPool<S: ConstructionStrategy> {
    inner: Arc<PoolInner<S>>,
}

impl<S: ConstructionStrategy> Clone for ConstructionPool<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: ConstructionStrategy> ConstructionPool<S> {
    pub fn new(options: PoolOptions<S>) -> Self {
        let PoolOptions { graph, strategy, preprocessors } = options;
        Self {
            inner: Arc::new(PoolInner {
                graph,
                strategy,
                preprocessors,
                instances: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub fn graph(&self) -> &Arc<ConfigGraph> {
        &self.inner.graph
    }

    pub fn strategy(&self) -> &S {
        &self.inner.strategy
    }

    /// Number of configs with a cache entry, finished or in flight.
    pub fn cached_count(&self) -> usize {
        self.inner.instances.lock().len()
    }

    /// Returns the instance for `config`, building it on first request.
    ///
    /// A config that is already being built on the current path resolves to the
    /// strategy's undefined placeholder. Variables resolve against `settings` on
    /// every call and are never cached.
    pub async fn instantiate(
        &self,
        config: NodeId,
        settings: &ConstructionSettings<S::Instance>,
    ) -> Result<S::Instance, ConstructionError> {
        let term = self.inner.graph.term(config).ok_or(ConstructionError::UnknownNode(config))?;
        let id = term.value;

        if settings.is_in_progress(&id) {
            trace!(config = %id, "breaking cycle with undefined placeholder");
            return Ok(self.inner.strategy.create_undefined());
        }
        if self.inner.graph.is_variable(config) {
            trace!(variable = %id, "resolving variable");
            return self.inner.strategy.variable_value(settings, &id);
        }

        // Lookup and insert under one lock acquisition.
        let instance = {
            let mut instances = self.inner.instances.lock();
            match instances.get(&id) {
                Some(existing) => existing.clone(),
                None => {
                    debug!(config = %id, "constructing config");
                    let future = Self::construct(self.clone(), config, id.clone(), settings.descend(&id))
                        .boxed()
                        .shared();
                    instances.insert(id, future.clone());
                    future
                }
            }
        };
        instance.await
    }

    async fn construct(
        pool: Self,
        config: NodeId,
        id: String,
        settings: ConstructionSettings<S::Instance>,
    ) -> Result<S::Instance, ConstructionError> {
        let result = match pool.get_raw_config(config) {
            Ok(raw) => pool.inner.strategy.build(&pool, raw, &settings).await,
            Err(error) => Err(error),
        };
        if let Err(error) = &result {
            // Waiters of this attempt still see the error; the next request retries.
            debug!(config = %id, %error, "construction failed, dropping cache entry");
            pool.inner.instances.lock().remove(&id);
        }
        result
    }

    /// Resolves the raw form of `config`.
    ///
    /// The first preprocessor that handles `config` transforms it; otherwise the
    /// config itself is used. The result is validated either way.
    pub fn get_raw_config(&self, config: NodeId) -> Result<NodeId, ConstructionError> {
        for preprocessor in &self.inner.preprocessors {
            if let Some(transformed) = preprocessor.try_transform(&self.inner.graph, config) {
                let raw = transformed?;
                debug!(preprocessor = preprocessor.name(), ?config, ?raw, "preprocessed config");
                self.validate_raw_config(raw)?;
                return Ok(raw);
            }
        }
        self.validate_raw_config(config)?;
        Ok(config)
    }

    /// Checks the shape fields of a raw config.
    pub fn validate_raw_config(&self, raw_config: NodeId) -> Result<(), ConstructionError> {
        self.validate_param(raw_config, oo::REQUIRE_NAME, NodeKind::Literal, false)?;
        self.validate_param(raw_config, oo::REQUIRE_ELEMENT, NodeKind::Literal, true)?;
        self.validate_param(raw_config, oo::REQUIRE_NO_CONSTRUCTOR, NodeKind::Literal, true)
    }

    /// Checks that `field` is present on `config` (unless `optional`) with a value of kind `expected`.
    pub fn validate_param(
        &self,
        config: NodeId,
        field: &str,
        expected: NodeKind,
        optional: bool,
    ) -> Result<(), ConstructionError> {
        let graph = &self.inner.graph;
        let config_id = graph.term(config).ok_or(ConstructionError::UnknownNode(config))?.value;

        let value = match graph.property(config, field).and_then(|v| graph.term(v)) {
            Some(value) => value,
            None if optional => return Ok(()),
            None => {
                return Err(ConstructionError::MissingField {
                    field: local_name(field).to_string(),
                    config: config_id,
                })
            }
        };
        if value.kind != expected {
            return Err(ConstructionError::WrongFieldType {
                field: local_name(field).to_string(),
                value: value.value,
                expected,
                actual: value.kind,
                config: config_id,
            });
        }
        Ok(())
    }
}

/// The part of an IRI after its last `#` or `/`.
fn local_name(iri: &str) -> &str {
    iri.rsplit(|c: char| c == '#' || c == '/').next().unwrap_or(iri)
}
