//! System event definitions
//!
//! Provides:
//! - `SystemEvent`, the tagged notification value produced by the driver
//!   and protocol stack and consumed by the broker
//! - `EventKind`, the payload-free discriminator used for dispatch and
//!   diagnostics
//!
//! Events are transient values: a producer creates one, the broker runs the
//! default-handler and user-callback stages, and the event is discarded.

use crate::data::{AuthMode, IpConfig, MacAddr};
use std::fmt;

/// Notification about the network adapter's lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum SystemEvent {
    /// The radio finished initialization
    WifiReady,
    /// An access-point scan completed
    ScanDone {
        /// Driver-reported scan status code
        status: u32,
        /// Number of access points found
        count: u8,
        /// Identifier of the scan request
        scan_id: u8,
    },
    /// The station adapter was started
    StaStart,
    /// The station adapter was stopped
    StaStop,
    /// The station associated with an access point
    StaConnected {
        /// SSID of the access point
        ssid: String,
        /// BSSID (link address) of the access point
        bssid: MacAddr,
        /// Channel of the access point
        channel: u8,
        /// Authentication mode of the association
        auth_mode: AuthMode,
    },
    /// The station disassociated from an access point
    StaDisconnected {
        /// SSID of the access point
        ssid: String,
        /// BSSID of the access point
        bssid: MacAddr,
        /// Disassociation reason code
        reason: u8,
    },
    /// The access point the station is associated with changed auth mode
    AuthModeChanged {
        /// Previous authentication mode
        old_mode: AuthMode,
        /// New authentication mode
        new_mode: AuthMode,
    },
    /// The station acquired an address configuration
    StaGotIp {
        /// The acquired address, netmask, and gateway
        config: IpConfig,
    },
    /// The access-point adapter was started
    ApStart,
    /// The access-point adapter was stopped
    ApStop,
    /// A peer station joined the access point
    ApStaJoined {
        /// Link address of the peer
        mac: MacAddr,
        /// Association id given to the peer
        aid: u8,
    },
    /// A peer station left the access point
    ApStaLeft {
        /// Link address of the peer
        mac: MacAddr,
        /// Association id the peer held
        aid: u8,
    },
    /// A probe request was received on the access-point interface
    ApProbeRequest {
        /// Received signal strength
        rssi: i32,
        /// Link address of the probing station
        mac: MacAddr,
    },
}

impl SystemEvent {
    /// The discriminator identifying this event's variant
    pub fn kind(&self) -> EventKind {
        match self {
            Self::WifiReady => EventKind::WifiReady,
            Self::ScanDone { .. } => EventKind::ScanDone,
            Self::StaStart => EventKind::StaStart,
            Self::StaStop => EventKind::StaStop,
            Self::StaConnected { .. } => EventKind::StaConnected,
            Self::StaDisconnected { .. } => EventKind::StaDisconnected,
            Self::AuthModeChanged { .. } => EventKind::AuthModeChanged,
            Self::StaGotIp { .. } => EventKind::StaGotIp,
            Self::ApStart => EventKind::ApStart,
            Self::ApStop => EventKind::ApStop,
            Self::ApStaJoined { .. } => EventKind::ApStaJoined,
            Self::ApStaLeft { .. } => EventKind::ApStaLeft,
            Self::ApProbeRequest { .. } => EventKind::ApProbeRequest,
        }
    }
}

impl fmt::Display for SystemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WifiReady => write!(f, "wifi ready"),
            Self::ScanDone {
                status,
                count,
                scan_id,
            } => write!(
                f,
                "scan done: status {}, {} APs, scan id {}",
                status, count, scan_id
            ),
            Self::StaStart => write!(f, "station start"),
            Self::StaStop => write!(f, "station stop"),
            Self::StaConnected {
                ssid,
                bssid,
                channel,
                auth_mode,
            } => write!(
                f,
                "station connected to {} ({}) on channel {}, auth {}",
                ssid, bssid, channel, auth_mode
            ),
            Self::StaDisconnected {
                ssid,
                bssid,
                reason,
            } => write!(
                f,
                "station disconnected from {} ({}), reason {}",
                ssid, bssid, reason
            ),
            Self::AuthModeChanged { old_mode, new_mode } => {
                write!(f, "auth mode changed: {} -> {}", old_mode, new_mode)
            }
            Self::StaGotIp { config } => write!(f, "station got IP ({})", config),
            Self::ApStart => write!(f, "access point start"),
            Self::ApStop => write!(f, "access point stop"),
            Self::ApStaJoined { mac, aid } => {
                write!(f, "peer {} joined, aid {}", mac, aid)
            }
            Self::ApStaLeft { mac, aid } => {
                write!(f, "peer {} left, aid {}", mac, aid)
            }
            Self::ApProbeRequest { rssi, mac } => {
                write!(f, "probe request from {}, rssi {}", mac, rssi)
            }
        }
    }
}

/// Payload-free event discriminator
///
/// Used to select the default handler for an event and to name the event
/// in logs and errors without carrying its payload along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Radio ready
    WifiReady,
    /// Scan completed
    ScanDone,
    /// Station adapter started
    StaStart,
    /// Station adapter stopped
    StaStop,
    /// Station associated
    StaConnected,
    /// Station disassociated
    StaDisconnected,
    /// Auth mode changed
    AuthModeChanged,
    /// Station acquired an address
    StaGotIp,
    /// Access-point adapter started
    ApStart,
    /// Access-point adapter stopped
    ApStop,
    /// Peer joined the access point
    ApStaJoined,
    /// Peer left the access point
    ApStaLeft,
    /// Probe request received
    ApProbeRequest,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WifiReady => "wifi-ready",
            Self::ScanDone => "scan-done",
            Self::StaStart => "sta-start",
            Self::StaStop => "sta-stop",
            Self::StaConnected => "sta-connected",
            Self::StaDisconnected => "sta-disconnected",
            Self::AuthModeChanged => "auth-mode-changed",
            Self::StaGotIp => "sta-got-ip",
            Self::ApStart => "ap-start",
            Self::ApStop => "ap-stop",
            Self::ApStaJoined => "ap-sta-joined",
            Self::ApStaLeft => "ap-sta-left",
            Self::ApProbeRequest => "ap-probe-request",
        };
        write!(f, "{}", name)
    }
}
