//! # Protocol Translation
//!
//! Maps between StoreAPI components and the retrieval protocol's
//! [`StoreType`].
//!
//! ## Encoding
//!
//! A component's wire value is the protocol entry named after the
//! upper-cased component name. A name with no entry is an error; the
//! legacy zero-value fallback is kept behind
//! [`StoreApi::to_proto_or_unknown`](crate::StoreApi::to_proto_or_unknown).
//!
//! ## Decoding
//!
//! Each known value resolves to exactly one `static` component, so the
//! returned reference is identity-equal to the catalog constant. Values
//! with no local component decode to `None`.

use shared_types::StoreType;
use tracing::{debug, warn};

use crate::catalog::{QUERY, RECEIVE, RULE, SIDECAR, STORE};
use crate::component::SourceStoreApiComponent;
use crate::errors::ComponentError;

pub(crate) fn store_type_for(name: &'static str) -> Result<StoreType, ComponentError> {
    let expected = name.to_ascii_uppercase();
    StoreType::from_str_name(&expected).ok_or(ComponentError::UnknownStoreType {
        component: name,
        expected,
    })
}

pub(crate) fn store_type_or_unknown(name: &'static str) -> StoreType {
    store_type_for(name).unwrap_or_else(|e| {
        warn!(component = name, error = %e, "Falling back to UNKNOWN store type");
        StoreType::Unknown
    })
}

/// Resolve a protocol value to the component that announces it.
///
/// Returns `None` for values no local component answers to
/// (`UNKNOWN`, `DEBUG`).
#[must_use]
pub fn from_proto(store_type: StoreType) -> Option<&'static SourceStoreApiComponent> {
    match store_type {
        StoreType::Query => Some(&QUERY),
        StoreType::Rule => Some(&RULE),
        StoreType::Sidecar => Some(&SIDECAR),
        StoreType::Store => Some(&STORE),
        StoreType::Receive => Some(&RECEIVE),
        StoreType::Unknown | StoreType::Debug => {
            debug!(store_type = %store_type, "No component for store type");
            None
        }
    }
}

/// Resolve a raw wire integer, as found in a decoded message.
///
/// Integers outside the enumeration decode to `None` like any other value
/// without a component.
#[must_use]
pub fn from_proto_value(value: i32) -> Option<&'static SourceStoreApiComponent> {
    match StoreType::try_from(value) {
        Ok(store_type) => from_proto(store_type),
        Err(e) => {
            debug!(value, error = %e, "Ignoring store type outside the protocol");
            None
        }
    }
}
