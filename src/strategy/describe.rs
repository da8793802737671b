//! A construction strategy that describes components as JSON instead of building them.
use crate::construction::{ConstructionError, ConstructionPool, ConstructionSettings, ConstructionStrategy};
use crate::graph::{ConfigGraph, NodeId, NodeKind};
use crate::iris::oo;
use crate::range::{Parameter, RangeHandler};
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use serde_json::{Map, Value};
use tracing::trace;

/// Materializes each component as a JSON description:
/// `{"@component": <requireName>, "@element"?: .., "@static"?: true, "@args": [..]}`.
///
/// Arguments bound to a parameter are range-checked before they are resolved, so
/// literals come out as their coerced values.
#[derive(Debug, Default)]
pub struct DescribeStrategy {
    handler: RangeHandler,
}

type Settings = ConstructionSettings<Value>;

impl DescribeStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    async fn resolve_argument(
        &self,
        pool: &ConstructionPool<Self>,
        argument: NodeId,
        settings: &Settings,
    ) -> Result<Value, ConstructionError> {
        let graph = pool.graph();
        let param_node = match graph.property(argument, oo::PARAMETER) {
            Some(param) => param,
            None => return self.resolve(pool, Some(argument), settings).await,
        };
        let param = Parameter::from_graph(graph, param_node)?;
        let value = graph.property(argument, oo::VALUE);
        if self.handler.can_handle(&param) {
            self.handler.capture_type(graph, value, &param)?;
        }
        self.resolve(pool, value, settings).await
    }

    fn resolve<'a>(
        &'a self,
        pool: &'a ConstructionPool<Self>,
        value: Option<NodeId>,
        settings: &'a Settings,
    ) -> BoxFuture<'a, Result<Value, ConstructionError>> {
        async move {
            let id = match value {
                Some(id) => id,
                None => return Ok(self.create_undefined()),
            };
            let graph = pool.graph();
            let resource = graph.resource(id).ok_or(ConstructionError::UnknownNode(id))?;

            match resource.kind() {
                NodeKind::Literal => Ok(resource
                    .raw_value()
                    .map(|raw| raw.to_json())
                    .unwrap_or_else(|| Value::String(resource.value().to_string()))),
                NodeKind::List => {
                    let mut items = Vec::new();
                    for item in graph.list_items(id).unwrap_or_default() {
                        items.push(self.resolve(pool, Some(item), settings).await?);
                    }
                    Ok(Value::Array(items))
                }
                _ if graph.is_variable(id) || is_component(graph, id) => pool.instantiate(id, settings).await,
                _ => Ok(Value::String(resource.value().to_string())),
            }
        }
        .boxed()
    }
}

fn is_component(graph: &ConfigGraph, id: NodeId) -> bool {
    graph.property(id, oo::REQUIRE_NAME).is_some() || !graph.types(id).is_empty()
}

fn literal_text(graph: &ConfigGraph, config: NodeId, field: &str) -> Option<String> {
    graph.property(config, field).and_then(|v| graph.term(v)).map(|t| t.value)
}

/// The config's arguments: the items of a list value, or all values in order.
fn arguments(graph: &ConfigGraph, config: NodeId) -> Vec<NodeId> {
    let values = graph.properties(config, oo::ARGUMENTS);
    match values.as_slice() {
        [single] => graph.list_items(*single).unwrap_or_else(|| values.clone()),
        _ => values,
    }
}

#[async_trait]
impl ConstructionStrategy for DescribeStrategy {
    type Instance = Value;

    fn create_undefined(&self) -> Value {
        Value::Null
    }

    fn variable_value(&self, settings: &Settings, name: &str) -> Result<Value, ConstructionError> {
        trace!(variable = name, "looking up variable");
        settings
            .variable(name)
            .cloned()
            .ok_or_else(|| ConstructionError::UndefinedVariable { name: name.to_string() })
    }

    async fn build(
        &self,
        pool: &ConstructionPool<Self>,
        raw_config: NodeId,
        settings: &Settings,
    ) -> Result<Value, ConstructionError> {
        let graph = pool.graph();
        let config_id = graph.term(raw_config).ok_or(ConstructionError::UnknownNode(raw_config))?.value;
        let component = literal_text(graph, raw_config, oo::REQUIRE_NAME).ok_or_else(|| {
            ConstructionError::MissingField { field: "requireName".to_string(), config: config_id.clone() }
        })?;

        let mut args = Vec::new();
        for argument in arguments(graph, raw_config) {
            args.push(self.resolve_argument(pool, argument, settings).await?);
        }

        let mut description = Map::new();
        description.insert("@component".to_string(), Value::String(component));
        if let Some(element) = literal_text(graph, raw_config, oo::REQUIRE_ELEMENT) {
            description.insert("@element".to_string(), Value::String(element));
        }
        if literal_text(graph, raw_config, oo::REQUIRE_NO_CONSTRUCTOR).as_deref() == Some("true") {
            description.insert("@static".to_string(), Value::Bool(true));
        }
        description.insert("@args".to_string(), Value::Array(args));
        trace!(config = %config_id, "described component");
        Ok(Value::Object(description))
    }
}
