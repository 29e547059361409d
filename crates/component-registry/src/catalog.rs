//! # Component Catalog
//!
//! The fixed set of platform components. Every component is a `static`
//! created at compile time; there is no way to add or remove one at runtime.
//!
//! | Component    | Source | StoreAPI | StoreType |
//! |--------------|--------|----------|-----------|
//! | `bucket`     | yes    | no       | -         |
//! | `compact`    | yes    | no       | -         |
//! | `downsample` | yes    | no       | -         |
//! | `query`      | yes    | yes      | `QUERY`   |
//! | `rule`       | yes    | yes      | `RULE`    |
//! | `sidecar`    | yes    | yes      | `SIDECAR` |
//! | `store`      | yes    | yes      | `STORE`   |
//! | `receive`    | yes    | yes      | `RECEIVE` |

use serde::Serialize;
use shared_types::StoreType;

use crate::component::{Capabilities, Component, SourceComponent, SourceStoreApiComponent, StoreApi};
use crate::errors::ComponentError;

/// Object-storage bucket tooling.
pub static BUCKET: SourceComponent = SourceComponent::new("bucket");
/// Block compactor.
pub static COMPACT: SourceComponent = SourceComponent::new("compact");
/// Block downsampler.
pub static DOWNSAMPLE: SourceComponent = SourceComponent::new("downsample");
/// Query layer.
pub static QUERY: SourceStoreApiComponent = SourceStoreApiComponent::new("query");
/// Rule evaluator.
pub static RULE: SourceStoreApiComponent = SourceStoreApiComponent::new("rule");
/// Sidecar next to a scraping server.
pub static SIDECAR: SourceStoreApiComponent = SourceStoreApiComponent::new("sidecar");
/// Store gateway.
pub static STORE: SourceStoreApiComponent = SourceStoreApiComponent::new("store");
/// Remote-write receiver.
pub static RECEIVE: SourceStoreApiComponent = SourceStoreApiComponent::new("receive");

static CATALOG: [&dyn Component; 8] = [
    &BUCKET,
    &COMPACT,
    &DOWNSAMPLE,
    &QUERY,
    &RULE,
    &SIDECAR,
    &STORE,
    &RECEIVE,
];

static STORE_APIS: [&SourceStoreApiComponent; 5] = [&QUERY, &RULE, &SIDECAR, &STORE, &RECEIVE];

/// All components in declaration order.
#[must_use]
pub fn catalog() -> &'static [&'static dyn Component] {
    &CATALOG
}

/// Components queryable over StoreAPI.
#[must_use]
pub fn store_apis() -> &'static [&'static SourceStoreApiComponent] {
    &STORE_APIS
}

/// Find a component by display name, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static dyn Component> {
    CATALOG
        .iter()
        .copied()
        .find(|c| c.name().eq_ignore_ascii_case(name))
}

/// Find a StoreAPI component by display name, ignoring ASCII case.
///
/// Distinguishes a name nobody uses from a component that exists but
/// cannot be queried.
pub fn lookup_store_api(name: &str) -> Result<&'static SourceStoreApiComponent, ComponentError> {
    if let Some(component) = STORE_APIS
        .iter()
        .copied()
        .find(|c| c.name().eq_ignore_ascii_case(name))
    {
        return Ok(component);
    }

    match lookup(name) {
        Some(component) => Err(ComponentError::NotStoreApi(component.name())),
        None => Err(ComponentError::UnknownComponent(name.to_string())),
    }
}

/// Serializable summary of one catalog component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub capabilities: Capabilities,
    /// Wire value, present only for StoreAPI components.
    pub store_type: Option<StoreType>,
}

impl CatalogEntry {
    fn describe(component: &'static dyn Component) -> Self {
        let store_type = lookup_store_api(component.name())
            .ok()
            .and_then(|c| c.to_proto().ok());

        Self {
            name: component.name(),
            capabilities: component.capabilities(),
            store_type,
        }
    }
}

/// Summaries of every component, in declaration order.
#[must_use]
pub fn entries() -> Vec<CatalogEntry> {
    CATALOG.iter().copied().map(CatalogEntry::describe).collect()
}
