//! Error handling for WifiKit
//!
//! Provides error types for all layers of the event-coordination core:
//! - Adapter errors (driver/protocol-stack operations)
//! - Broker errors (initialization, queue capacity)
//! - Configuration errors (file handling, validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::data::AdapterRole;
use crate::event::EventKind;
use thiserror::Error;

/// Adapter operation error
///
/// Represents failures reported by the adapter driver or protocol stack
/// while a default handler drives bring-up or bring-down. These are local
/// to the handler that triggered them and never fatal to the broker.
#[derive(Error, Debug, Clone)]
pub enum AdapterError {
    /// Adapter has not been started
    #[error("{role} adapter not started")]
    NotStarted {
        /// The adapter role.
        role: AdapterRole,
    },

    /// Adapter is already started
    #[error("{role} adapter already started")]
    AlreadyStarted {
        /// The adapter role.
        role: AdapterRole,
    },

    /// The driver rejected an operation
    #[error("driver rejected {operation} on {role} adapter: {reason}")]
    OperationRejected {
        /// The adapter role.
        role: AdapterRole,
        /// The operation that was rejected.
        operation: String,
        /// The reason the driver gave.
        reason: String,
    },

    /// Address-assignment client error
    #[error("DHCP client error on {role} adapter: {reason}")]
    Dhcp {
        /// The adapter role.
        role: AdapterRole,
        /// The reason for the failure.
        reason: String,
    },

    /// Generic adapter error
    #[error("adapter error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Event broker error
///
/// Represents failures of the broker's own machinery: double
/// initialization and queue capacity exhaustion.
#[derive(Error, Debug, Clone)]
pub enum BrokerError {
    /// The broker task is already running
    #[error("event broker already started")]
    AlreadyStarted,

    /// The event queue is full; the event was dropped
    #[error("event queue full, dropped {kind} event")]
    QueueFull {
        /// Kind of the dropped event.
        kind: EventKind,
    },

    /// The queue has no remaining endpoints
    #[error("event queue closed")]
    Closed,
}

/// Configuration error
///
/// Represents failures while loading, saving, or validating the broker
/// configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contents could not be parsed
    #[error("invalid config: {reason}")]
    Parse {
        /// The reason parsing failed.
        reason: String,
    },

    /// The configuration file format is not supported
    #[error("unsupported config format: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// A configuration value is out of range
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// The setting name.
        key: String,
        /// The reason the value is invalid.
        reason: String,
    },
}

/// Main error type for WifiKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Adapter error
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// Broker error
    #[error(transparent)]
    Broker(#[from] BrokerError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a queue-capacity error
    pub fn is_queue_full(&self) -> bool {
        matches!(self, Error::Broker(BrokerError::QueueFull { .. }))
    }

    /// Check if this is an adapter error
    pub fn is_adapter_error(&self) -> bool {
        matches!(self, Error::Adapter(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
