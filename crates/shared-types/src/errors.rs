//! # Error Types
//!
//! Errors raised while decoding protocol values.

use thiserror::Error;

/// Errors that can occur when reading a `StoreType` off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreTypeError {
    /// Integer has no entry in the enumeration.
    #[error("Unknown store type value: {0}")]
    UnknownValue(i32),

    /// Name has no entry in the enumeration.
    #[error("Unknown store type name: {0:?}")]
    UnknownName(String),
}
