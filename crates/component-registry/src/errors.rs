//! # Error Types

use thiserror::Error;

/// Errors raised by the component registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// The component's upper-cased name has no entry in the protocol table.
    #[error("No store type named {expected:?} for component {component}")]
    UnknownStoreType {
        component: &'static str,
        expected: String,
    },

    /// No component is registered under this name.
    #[error("Unknown component: {0:?}")]
    UnknownComponent(String),

    /// The component exists but cannot be queried over StoreAPI.
    #[error("Component {0} does not implement StoreAPI")]
    NotStoreApi(&'static str),
}
