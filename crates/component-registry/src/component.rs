//! # Component Identity and Capabilities
//!
//! Every component has a stable display name. On top of that identity a
//! component may carry two orthogonal capabilities:
//!
//! - **StoreAPI**: it can be queried over the retrieval protocol and
//!   therefore has a `StoreType` on the wire.
//! - **Source**: it produces durable metric blocks.
//!
//! Capabilities are marker traits implemented by the component's type, so a
//! function that needs a queryable component takes `&dyn StoreApi` (or
//! `impl StoreApi`) and the compiler rejects block-only components.
//!
//! All traits are sealed: the set of components is closed.

use serde::{Serialize, Serializer};
use shared_types::StoreType;
use std::fmt;

use crate::errors::ComponentError;
use crate::proto;

mod sealed {
    pub trait Sealed {}
}

/// Capability profile of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Capabilities {
    /// Queryable over the retrieval protocol.
    pub store_api: bool,
    /// Produces durable metric blocks.
    pub source: bool,
}

impl Capabilities {
    /// Identity only.
    pub const PLAIN: Self = Self {
        store_api: false,
        source: false,
    };
    /// Block producer that cannot be queried.
    pub const SOURCE: Self = Self {
        store_api: false,
        source: true,
    };
    /// Queryable, produces no blocks.
    pub const STORE_API: Self = Self {
        store_api: true,
        source: false,
    };
    /// Queryable block producer.
    pub const SOURCE_STORE_API: Self = Self {
        store_api: true,
        source: true,
    };

    #[must_use]
    pub const fn implements_store_api(self) -> bool {
        self.store_api
    }

    #[must_use]
    pub const fn produces_blocks(self) -> bool {
        self.source
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match (self.source, self.store_api) {
            (false, false) => "plain",
            (true, false) => "source",
            (false, true) => "storeapi",
            (true, true) => "source+storeapi",
        };
        f.pad(label)
    }
}

/// A named platform component.
pub trait Component: sealed::Sealed + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Stable, lower-case display name. Used as log and metric label.
    fn name(&self) -> &'static str;

    /// Capability profile fixed by the component's type.
    fn capabilities(&self) -> Capabilities;
}

/// A component that implements the StoreAPI retrieval protocol.
pub trait StoreApi: Component {
    /// Protocol value whose name is this component's upper-cased name.
    ///
    /// Fails with [`ComponentError::UnknownStoreType`] when the protocol
    /// has no such name, instead of silently returning the zero value.
    fn to_proto(&self) -> Result<StoreType, ComponentError> {
        proto::store_type_for(self.name())
    }

    /// Legacy encoding: an unknown name maps to [`StoreType::Unknown`].
    ///
    /// The result cannot tell "not in the protocol" apart from a component
    /// that really is `UNKNOWN`; prefer [`StoreApi::to_proto`].
    fn to_proto_or_unknown(&self) -> StoreType {
        proto::store_type_or_unknown(self.name())
    }
}

/// A component that produces blocks of metrics. Carries no behaviour.
pub trait Source: Component {}

/// A block producer that is also queryable over StoreAPI.
pub trait SourceStoreApi: Source + StoreApi {}

impl<T: Source + StoreApi> SourceStoreApi for T {}

/// Component that produces blocks but is not queryable.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SourceComponent {
    name: &'static str,
}

impl SourceComponent {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl sealed::Sealed for SourceComponent {}

impl Component for SourceComponent {
    fn name(&self) -> &'static str {
        self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SOURCE
    }
}

impl Source for SourceComponent {}

impl fmt::Display for SourceComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for SourceComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Component that produces blocks and answers StoreAPI requests.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SourceStoreApiComponent {
    name: &'static str,
}

impl SourceStoreApiComponent {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl sealed::Sealed for SourceStoreApiComponent {}

impl Component for SourceStoreApiComponent {
    fn name(&self) -> &'static str {
        self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SOURCE_STORE_API
    }
}

impl Source for SourceStoreApiComponent {}

impl StoreApi for SourceStoreApiComponent {}

impl fmt::Display for SourceStoreApiComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for SourceStoreApiComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
