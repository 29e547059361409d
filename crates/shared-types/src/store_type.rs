//! # Store Type
//!
//! The retrieval protocol's enumeration of which kind of component answered
//! a store request. Values and upper-case names are fixed by the protocol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::StoreTypeError;

/// Kind of component behind a StoreAPI endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum StoreType {
    /// Zero value; the endpoint did not say.
    #[default]
    Unknown = 0,
    /// Query layer fanning out to other stores.
    Query = 1,
    /// Recording/alerting rule evaluator.
    Rule = 2,
    /// Sidecar next to a scraping server.
    Sidecar = 3,
    /// Gateway over object-storage blocks.
    Store = 4,
    /// Remote-write receiver.
    Receive = 5,
    /// Debugging endpoint.
    Debug = 6,
}

impl StoreType {
    /// Every value in protocol order.
    pub const ALL: [StoreType; 7] = [
        StoreType::Unknown,
        StoreType::Query,
        StoreType::Rule,
        StoreType::Sidecar,
        StoreType::Store,
        StoreType::Receive,
        StoreType::Debug,
    ];

    /// Upper-case protocol name of this value.
    #[must_use]
    pub const fn as_str_name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Query => "QUERY",
            Self::Rule => "RULE",
            Self::Sidecar => "SIDECAR",
            Self::Store => "STORE",
            Self::Receive => "RECEIVE",
            Self::Debug => "DEBUG",
        }
    }

    /// Name→value table of the protocol.
    ///
    /// Matching is exact: names are upper-case on the wire.
    #[must_use]
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "UNKNOWN" => Some(Self::Unknown),
            "QUERY" => Some(Self::Query),
            "RULE" => Some(Self::Rule),
            "SIDECAR" => Some(Self::Sidecar),
            "STORE" => Some(Self::Store),
            "RECEIVE" => Some(Self::Receive),
            "DEBUG" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Get the raw wire value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for StoreType {
    type Error = StoreTypeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Query),
            2 => Ok(Self::Rule),
            3 => Ok(Self::Sidecar),
            4 => Ok(Self::Store),
            5 => Ok(Self::Receive),
            6 => Ok(Self::Debug),
            other => Err(StoreTypeError::UnknownValue(other)),
        }
    }
}

impl From<StoreType> for i32 {
    fn from(value: StoreType) -> Self {
        value.as_i32()
    }
}

impl FromStr for StoreType {
    type Err = StoreTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| StoreTypeError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}
