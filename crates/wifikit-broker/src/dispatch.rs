//! Default-handler dispatch
//!
//! Maps each event kind to its built-in first-stage handler. The mapping
//! is an exhaustive match, so completeness is checked at compile time and
//! a kind can never fall outside the table. Kinds with no default handler
//! get a no-op first stage; the user callback still runs for them.

use crate::broker::EventSender;
use crate::handlers;
use wifikit_core::{AdapterControl, EventKind, Result, SystemEvent};

/// Built-in first-stage handler for one event kind
pub(crate) type DefaultHandler =
    fn(&dyn AdapterControl, &EventSender, &SystemEvent) -> Result<()>;

/// Look up the default handler for an event kind
pub(crate) fn default_handler(kind: EventKind) -> Option<DefaultHandler> {
    match kind {
        EventKind::StaStart => Some(handlers::sta_start),
        EventKind::StaStop => Some(handlers::sta_stop),
        EventKind::StaConnected => Some(handlers::sta_connected),
        EventKind::StaDisconnected => Some(handlers::sta_disconnected),
        EventKind::StaGotIp => Some(handlers::sta_got_ip),
        EventKind::ApStart => Some(handlers::ap_start),
        EventKind::ApStop => Some(handlers::ap_stop),
        EventKind::WifiReady
        | EventKind::ScanDone
        | EventKind::AuthModeChanged
        | EventKind::ApStaJoined
        | EventKind::ApStaLeft
        | EventKind::ApProbeRequest => None,
    }
}
