//! # Component Registry
//!
//! Identity and capability profile of every named platform component, and
//! the translation between a component and the retrieval protocol's
//! [`StoreType`](shared_types::StoreType).
//!
//! ## Capabilities
//!
//! - [`Source`]: produces durable metric blocks.
//! - [`StoreApi`]: queryable over the retrieval protocol; exposes
//!   [`StoreApi::to_proto`].
//! - [`SourceStoreApi`]: both of the above.
//!
//! Capabilities are checked by the compiler. Block-only components have no
//! protocol value and cannot be asked for one:
//!
//! ```compile_fail
//! use component_registry::{StoreApi, BUCKET};
//!
//! let _ = BUCKET.to_proto();
//! ```
//!
//! ## Usage
//!
//! ```
//! use component_registry::{from_proto, StoreApi, SIDECAR};
//!
//! let store_type = SIDECAR.to_proto().unwrap();
//! assert_eq!(store_type.as_str_name(), "SIDECAR");
//!
//! let component = from_proto(store_type).unwrap();
//! assert!(std::ptr::eq(component, &SIDECAR));
//! ```

pub mod catalog;
pub mod component;
pub mod errors;
pub mod proto;

pub use catalog::{
    catalog, entries, lookup, lookup_store_api, store_apis, CatalogEntry, BUCKET, COMPACT,
    DOWNSAMPLE, QUERY, RECEIVE, RULE, SIDECAR, STORE,
};
pub use component::{
    Capabilities, Component, Source, SourceComponent, SourceStoreApi, SourceStoreApiComponent,
    StoreApi,
};
pub use errors::ComponentError;
pub use proto::{from_proto, from_proto_value};
