//! Configuration schema definitions.
//!
//! This module defines the complete settings structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root settings for a service instance.
///
/// Immutable once loaded: the loader constructs it exactly once at startup
/// and the rest of the process shares it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    /// Bind address (e.g., "0.0.0.0").
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Service name reported by the liveness endpoint.
    pub service_name: String,

    /// URL prefix for versioned API routes (e.g., "/v1").
    pub api_prefix: String,

    /// Free-form deployment metadata, echoed into startup logs.
    pub metadata: BTreeMap<String, String>,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
            service_name: "exec-agent".to_string(),
            api_prefix: "/v1".to_string(),
            metadata: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Emit JSON-formatted log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppSettings {
    /// The socket address string the listener should bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
