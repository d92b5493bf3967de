//! Event broker: bounded queue, consumer task, and registration API
//!
//! The broker owns the one bounded FIFO queue between producers (driver,
//! protocol stack, default handlers) and the single consumer task. The
//! consumer dequeues with unbounded wait, runs the default-handler stage,
//! then the user-callback stage, and discards the event.

use crate::dispatch;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::mpsc;
use wifikit_core::{AdapterControl, BrokerConfig, BrokerError, Error, SystemEvent};

/// Application callback invoked once per delivered event
///
/// Runs on the broker task after the default-handler stage. Caller context
/// lives in the closure's captured state.
pub type EventCallback = Arc<dyn Fn(&SystemEvent) + Send + Sync>;

/// Cloneable producer handle for the event queue
///
/// Handed to collaborators that were initialized before the broker so they
/// can still feed it. Sending never blocks: a full queue fails immediately
/// and drops the event.
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::Sender<SystemEvent>,
}

impl EventSender {
    /// Enqueue an event at the back of the queue
    ///
    /// Returns `BrokerError::QueueFull` without waiting if capacity is
    /// exhausted. The producer owns any retry policy.
    pub fn send(&self, event: SystemEvent) -> Result<(), BrokerError> {
        let kind = event.kind();
        self.tx.try_send(event).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => {
                tracing::warn!(%kind, "event queue full, dropping event");
                BrokerError::QueueFull { kind }
            }
            mpsc::error::TrySendError::Closed(_) => BrokerError::Closed,
        })
    }

    /// Current capacity remaining in the queue
    pub fn free_capacity(&self) -> usize {
        self.tx.capacity()
    }
}

impl std::fmt::Debug for EventSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSender")
            .field("free_capacity", &self.tx.capacity())
            .finish()
    }
}

/// The event-coordination core
///
/// Owns the bounded queue and the registered user callback, and spawns the
/// single consumer task. Created by whoever initializes the firmware stack
/// and shared from there; there is no hidden global instance.
pub struct EventBroker {
    sender: EventSender,
    callback: Arc<RwLock<Option<EventCallback>>>,
    /// Consumer endpoint, taken exactly once by `start`.
    receiver: Mutex<Option<mpsc::Receiver<SystemEvent>>>,
}

impl EventBroker {
    /// Allocate the event queue with the configured capacity
    ///
    /// The configuration is validated first; a zero capacity is rejected.
    /// The capacity is fixed for the life of the broker.
    pub fn new(config: &BrokerConfig) -> Result<Self, Error> {
        config.validate()?;
        let (tx, rx) = mpsc::channel(config.queue_capacity);
        Ok(Self {
            sender: EventSender { tx },
            callback: Arc::new(RwLock::new(None)),
            receiver: Mutex::new(Some(rx)),
        })
    }

    /// Allocate the queue, install a callback, and start the consumer task
    ///
    /// One-call bring-up for the common case. Must run inside a tokio
    /// runtime.
    pub fn initialize(
        config: &BrokerConfig,
        adapter: Arc<dyn AdapterControl>,
        callback: Option<EventCallback>,
    ) -> Result<Self, Error> {
        let broker = Self::new(config)?;
        broker.set_callback(callback);
        broker.start(adapter)?;
        Ok(broker)
    }

    /// Start the consumer task
    ///
    /// The task runs for the life of the process; there is no stop
    /// primitive. A second call returns `BrokerError::AlreadyStarted` and
    /// leaves the running task, the queue, and the registered callback
    /// unchanged.
    pub fn start(&self, adapter: Arc<dyn AdapterControl>) -> Result<(), BrokerError> {
        let rx = self
            .receiver
            .lock()
            .take()
            .ok_or(BrokerError::AlreadyStarted)?;

        let sender = self.sender.clone();
        let callback = Arc::clone(&self.callback);
        tokio::spawn(run_broker(rx, adapter, sender, callback));
        Ok(())
    }

    /// Enqueue an event at the back of the queue
    pub fn send(&self, event: SystemEvent) -> Result<(), BrokerError> {
        self.sender.send(event)
    }

    /// Install a new user callback, returning the previous one
    ///
    /// The swap is atomic with respect to the consumer task: every event is
    /// delivered to exactly one callback, either the old or the new. Passing
    /// `None` uninstalls the callback; events are then discarded after the
    /// default-handler stage.
    pub fn set_callback(&self, callback: Option<EventCallback>) -> Option<EventCallback> {
        std::mem::replace(&mut *self.callback.write(), callback)
    }

    /// Get a producer handle for the underlying queue
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }
}

impl std::fmt::Debug for EventBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBroker")
            .field("started", &self.receiver.lock().is_none())
            .field("has_callback", &self.callback.read().is_some())
            .finish()
    }
}

/// Consumer loop: dequeue, default handler, user callback, discard
///
/// The loop holds its own producer handle for synthetic events, so the
/// queue stays open as long as the task lives. No event failure at any
/// stage stops the loop.
async fn run_broker(
    mut rx: mpsc::Receiver<SystemEvent>,
    adapter: Arc<dyn AdapterControl>,
    sender: EventSender,
    callback: Arc<RwLock<Option<EventCallback>>>,
) {
    tracing::debug!("broker task started");

    while let Some(event) = rx.recv().await {
        tracing::debug!(%event, "received event");

        if let Some(handler) = dispatch::default_handler(event.kind()) {
            if let Err(err) = handler(adapter.as_ref(), &sender, &event) {
                tracing::warn!(kind = %event.kind(), error = %err, "default handler failed");
            }
        }

        // Snapshot the callback outside the lock so a slow callback never
        // blocks set_callback.
        let user_callback = callback.read().clone();
        if let Some(cb) = user_callback {
            cb(&event);
        }
    }

    tracing::debug!("event queue closed, broker task exiting");
}


#[cfg(test)]
mod tests {
    use super::*;
    use wifikit_core::{ConfigError, EventKind, NoOpAdapter};

    #[test]
    fn test_send_before_start_is_buffered() {
        let broker = EventBroker::new(&BrokerConfig::with_capacity(4)).unwrap();
        broker.send(SystemEvent::WifiReady).unwrap();
        broker.send(SystemEvent::StaStart).unwrap();
        assert_eq!(broker.sender().free_capacity(), 2);
    }

    #[test]
    fn test_zero_capacity_rejected_at_construction() {
        let err = EventBroker::new(&BrokerConfig::with_capacity(0)).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_full_queue_rejects_without_blocking() {
        let broker = EventBroker::new(&BrokerConfig::with_capacity(1)).unwrap();
        broker.send(SystemEvent::WifiReady).unwrap();

        let err = broker.send(SystemEvent::StaStart).unwrap_err();
        assert!(matches!(
            err,
            BrokerError::QueueFull {
                kind: EventKind::StaStart
            }
        ));
    }

    #[test]
    fn test_set_callback_returns_previous() {
        let broker = EventBroker::new(&BrokerConfig::default()).unwrap();
        assert!(broker.set_callback(None).is_none());

        let first: EventCallback = Arc::new(|_| {});
        assert!(broker.set_callback(Some(first)).is_none());

        let second: EventCallback = Arc::new(|_| {});
        let previous = broker.set_callback(Some(second));
        assert!(previous.is_some());
    }

    #[tokio::test]
    async fn test_double_start_rejected() {
        let broker = EventBroker::new(&BrokerConfig::default()).unwrap();
        broker.start(Arc::new(NoOpAdapter)).unwrap();

        let err = broker.start(Arc::new(NoOpAdapter)).unwrap_err();
        assert!(matches!(err, BrokerError::AlreadyStarted));
    }
}
