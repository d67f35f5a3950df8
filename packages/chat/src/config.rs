//! Configuration loaded from environment variables.

use std::env;

use thiserror::Error;

use crate::infrastructure::publisher::DEFAULT_EVENT_CAPACITY;

/// Environment variable holding the event channel capacity
pub const EVENT_CAPACITY_VAR: &str = "AGORA_EVENT_CAPACITY";

/// Environment variable holding the default log level
pub const LOG_LEVEL_VAR: &str = "AGORA_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while reading configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer (got: {value})")]
    InvalidCapacity { var: &'static str, value: String },

    #[error("{var} must be one of trace, debug, info, warn, error (got: {value})")]
    InvalidLogLevel { var: &'static str, value: String },
}

/// Runtime configuration for [`ChatService`](crate::service::ChatService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Number of events buffered per observer before it starts lagging
    pub event_capacity: usize,
    /// Level passed to `setup_logger` when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ChatConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let event_capacity = match lookup(EVENT_CAPACITY_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: EVENT_CAPACITY_VAR,
                        value,
                    });
                }
            },
            None => defaults.event_capacity,
        };

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => {
                let level = value.trim().to_ascii_lowercase();
                if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
                    return Err(ConfigError::InvalidLogLevel {
                        var: LOG_LEVEL_VAR,
                        value,
                    });
                }
                level
            }
            None => defaults.log_level,
        };

        Ok(Self {
            event_capacity,
            log_level,
        })
    }
}
