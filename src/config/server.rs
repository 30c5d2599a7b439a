//! Server configuration module.
//!
//! This module defines configuration related to the Switchboard server
//! itself, including transport selection and basic server settings.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Transport type for the Switchboard server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// Standard I/O transport, one JSON-RPC message per line
    Stdio,
}

impl Default for TransportType {
    fn default() -> Self {
        Self::Stdio
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// Transport to use for communication
    pub transport: TransportType,

    /// Number of worker threads for request processing
    pub worker_threads: usize,

    /// Maximum message size in bytes
    pub max_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "switchboard".to_string(),
            transport: TransportType::default(),
            worker_threads: num_cpus::get(),
            max_message_size: 10 * 1024 * 1024, // 10 MiB
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        if self.max_message_size == 0 {
            return Err(ConfigError::ValidationError(
                "max_message_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
