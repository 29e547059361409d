//! Telemetry configuration from environment variables.

use component_registry::Component;
use std::env;

/// Configuration for component logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Display name of the component this process runs as, if any
    pub component: Option<&'static str>,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "metrics-platform".to_string(),
            component: None,
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MP_SERVICE_NAME`: Service name (default: metrics-platform)
    /// - `MP_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `MP_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `MP_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let is_container =
            var("KUBERNETES_SERVICE_HOST").is_some() || var("DOCKER_CONTAINER").is_some();

        Self {
            service_name: var("MP_SERVICE_NAME").unwrap_or_else(|| "metrics-platform".to_string()),

            component: None,

            log_level: var("MP_LOG_LEVEL")
                .or_else(|| var("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            console_output: var("MP_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: var("MP_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Create configuration for a process running as `component`.
    pub fn for_component(component: &dyn Component) -> Self {
        let mut config = Self::from_env();
        config.component = Some(component.name());
        config
    }

    /// Get the full service name including the component.
    pub fn full_service_name(&self) -> String {
        match self.component {
            Some(component) => format!("{}-{}", self.service_name, component),
            None => self.service_name.clone(),
        }
    }
}
