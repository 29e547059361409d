//! # Component Telemetry
//!
//! Logging setup shared by every platform component.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use component_registry::STORE;
//! use component_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::for_component(&STORE);
//! init_logging(&config)?;
//! component_telemetry::component_event!(info, &STORE, "Serving StoreAPI");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MP_SERVICE_NAME` | `metrics-platform` | Service name in logs |
//! | `MP_LOG_LEVEL` | `info` | Log level filter |
//! | `MP_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `MP_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;

pub use component_registry::Component;
pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
