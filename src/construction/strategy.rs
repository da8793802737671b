//! The seam between the pool and whatever actually builds instances.
use super::error::ConstructionError;
use super::pool::ConstructionPool;
use super::settings::ConstructionSettings;
use crate::graph::NodeId;
use async_trait::async_trait;

/// Builds instances from raw configs.
///
/// `build` receives the pool so arguments referring to other configs can be
/// resolved through `ConstructionPool::instantiate` with the settings it is given.
#[async_trait]
pub trait ConstructionStrategy: Sized + Send + Sync + 'static {
    type Instance: Clone + Send + Sync + 'static;

    /// The placeholder returned where a config refers back to itself.
    fn create_undefined(&self) -> Self::Instance;

    fn variable_value(
        &self,
        settings: &ConstructionSettings<Self::Instance>,
        name: &str,
    ) -> Result<Self::Instance, ConstructionError>;

    async fn build(
        &self,
        pool: &ConstructionPool<Self>,
        raw_config: NodeId,
        settings: &ConstructionSettings<Self::Instance>,
    ) -> Result<Self::Instance, ConstructionError>;
}
