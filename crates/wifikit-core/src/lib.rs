//! # WifiKit Core
//!
//! Core types, traits, and utilities for WifiKit.
//! Provides the fundamental abstractions for the adapter event broker:
//! addressing types, system event definitions, the adapter control surface,
//! error taxonomy, and broker configuration.

pub mod adapter;
pub mod config;
pub mod data;
pub mod error;
pub mod event;

pub use adapter::{AdapterControl, NoOpAdapter};

pub use config::BrokerConfig;

pub use data::{AdapterRole, AuthMode, DhcpClientStatus, IpConfig, MacAddr};

pub use error::{AdapterError, BrokerError, ConfigError, Error, Result};

pub use event::{EventKind, SystemEvent};
