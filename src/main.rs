//! Demo bring-up of the event broker against a no-op adapter.
//!
//! Loads the broker configuration from an optional path argument, starts
//! the broker, and feeds a scripted station lifecycle so the delivered
//! events can be observed in the log.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use wifikit::{
    init_logging, AuthMode, BrokerConfig, EventBroker, EventCallback, MacAddr, NoOpAdapter,
    SystemEvent,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!(version = wifikit::VERSION, built = wifikit::BUILD_DATE, "wifikit starting");

    let config = match std::env::args().nth(1) {
        Some(path) => BrokerConfig::load_from_file(Path::new(&path))?,
        None => BrokerConfig::default(),
    };
    tracing::info!(queue_capacity = config.queue_capacity, "broker configured");

    let callback: EventCallback = Arc::new(|event: &SystemEvent| {
        tracing::info!(kind = %event.kind(), "application observed: {}", event);
    });

    let broker = EventBroker::initialize(&config, Arc::new(NoOpAdapter), Some(callback))?;

    broker.send(SystemEvent::WifiReady)?;
    broker.send(SystemEvent::StaStart)?;
    broker.send(SystemEvent::StaConnected {
        ssid: "demo".to_string(),
        bssid: MacAddr([0xaa, 0xbb, 0xcc, 0x00, 0x00, 0x01]),
        channel: 6,
        auth_mode: AuthMode::Wpa2Psk,
    })?;

    // Give the broker task time to drain the scripted events.
    tokio::time::sleep(Duration::from_millis(100)).await;

    tracing::info!("wifikit demo finished");
    Ok(())
}
