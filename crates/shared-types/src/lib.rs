//! # Shared Types Crate
//!
//! Wire-level types of the retrieval protocol ("StoreAPI") shared by every
//! component that answers or issues store requests.
//!
//! ## Design Principles
//!
//! - **Protocol owned**: Values and names mirror the protocol definition;
//!   nothing here knows which local component a value stands for.
//! - **Lossless names**: Every value has exactly one upper-case name, and
//!   the name table is the only way to go from text to a value.

pub mod errors;
pub mod store_type;

pub use errors::*;
pub use store_type::StoreType;
