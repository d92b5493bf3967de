//! Broker configuration
//!
//! Provides configuration file handling and validation for the event
//! broker. Supports JSON and TOML file formats selected by extension.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default capacity of the event queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

/// Configuration of the event broker
///
/// The queue capacity is fixed once the broker is created; changing the
/// configuration afterwards has no effect on a running broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Capacity of the bounded event queue
    pub queue_capacity: usize,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl BrokerConfig {
    /// Create a configuration with the given queue capacity
    pub fn with_capacity(queue_capacity: usize) -> Self {
        Self { queue_capacity }
    }

    /// Load configuration from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                reason: format!("invalid JSON config: {}", e),
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                reason: format!("invalid TOML config: {}", e),
            })?
        } else {
            return Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into());
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
                reason: format!("failed to serialize config: {}", e),
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
                reason: format!("failed to serialize config: {}", e),
            })?
        } else {
            return Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into());
        };

        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "queue_capacity".to_string(),
                reason: "must be > 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
