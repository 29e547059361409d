//! # Component Registry Test Suite
//!
//! Cross-crate flows that a single crate's unit tests cannot cover.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # StoreAPI info exchange between components
//!     └── concurrency.rs  # Unsynchronized reads from many threads
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p platform-tests
//! cargo test -p platform-tests integration::flows
//! ```
