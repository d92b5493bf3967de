//! # WifiKit Broker
//!
//! Ordered single-consumer event broker for adapter lifecycle
//! notifications.
//!
//! The broker serializes `SystemEvent` values produced by the driver and
//! protocol stack through a bounded FIFO queue, runs the built-in default
//! handler for each event kind (adapter bring-up/bring-down side effects),
//! and then forwards the event to the one registered user callback.
//!
//! Delivery order to both stages is exactly enqueue order. Producers never
//! block: enqueueing into a full queue fails immediately and the event is
//! dropped. Default handlers may synthesize follow-up events, which always
//! re-enter at the back of the queue and are never processed inline.

pub mod broker;

mod dispatch;
mod handlers;

pub use broker::{EventBroker, EventCallback, EventSender};
