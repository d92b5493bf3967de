//! # WifiKit
//!
//! Event-coordination core for a WiFi device firmware stack:
//! - Ordered single-consumer broker for adapter lifecycle notifications
//! - Built-in bring-up/bring-down default handlers per event kind
//! - Single registered application callback with atomic replacement
//! - Bounded, best-effort event queue with non-blocking producers
//!
//! ## Architecture
//!
//! WifiKit is organized as a workspace with multiple crates:
//!
//! 1. **wifikit-core** - Events, addressing types, adapter control surface,
//!    errors, configuration
//! 2. **wifikit-broker** - Bounded queue, dispatch, default handlers,
//!    broker task, registration API
//! 3. **wifikit** - Main binary that wires an adapter to the broker
//!
//! The boot-time attestation procedure, the adapter driver, and the
//! protocol stack are external collaborators: the broker assumes boot has
//! already been allowed to proceed and reaches the driver only through the
//! `AdapterControl` trait.

pub use wifikit_broker::{EventBroker, EventCallback, EventSender};

pub use wifikit_core::{
    AdapterControl, AdapterError, AdapterRole, AuthMode, BrokerConfig, BrokerError, ConfigError,
    DhcpClientStatus, Error, EventKind, IpConfig, MacAddr, NoOpAdapter, Result, SystemEvent,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
