//! Data models for adapter addressing and state
//!
//! This module provides:
//! - Link-layer addresses (`MacAddr`)
//! - Cached IPv4 address configuration (`IpConfig`)
//! - Adapter role selection (station vs. access point)
//! - Address-assignment client status
//! - Authentication mode enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Role of a network adapter.
///
/// The same physical radio can host a station-role adapter, an
/// access-point-role adapter, or both. Every operation on the adapter
/// control surface is addressed by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterRole {
    /// Station (client) adapter
    Station,
    /// Access point adapter
    AccessPoint,
}

impl fmt::Display for AdapterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Station => write!(f, "station"),
            Self::AccessPoint => write!(f, "access-point"),
        }
    }
}

/// 48-bit link-layer (MAC) address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// The all-zero address, reported by adapters that have no
    /// address assigned yet.
    pub const UNSPECIFIED: MacAddr = MacAddr([0; 6]);

    /// Whether this is the all-zero address
    pub fn is_unspecified(&self) -> bool {
        self.0 == [0; 6]
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split(':');
        for byte in &mut bytes {
            let part = parts
                .next()
                .ok_or_else(|| format!("MAC address too short: {}", s))?;
            *byte = u8::from_str_radix(part, 16)
                .map_err(|e| format!("Invalid MAC octet '{}': {}", part, e))?;
        }
        if parts.next().is_some() {
            return Err(format!("MAC address too long: {}", s));
        }
        Ok(MacAddr(bytes))
    }
}

/// Cached IPv4 address configuration of an adapter
///
/// Holds the address, netmask, and gateway either assigned statically or
/// acquired through the address-assignment client. `0.0.0.0` in any field
/// means that field is not configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpConfig {
    /// IPv4 address of the adapter
    pub ip: Ipv4Addr,
    /// Network mask
    pub netmask: Ipv4Addr,
    /// Default gateway
    pub gateway: Ipv4Addr,
}

impl IpConfig {
    /// Create a configuration from its three parts
    pub fn new(ip: Ipv4Addr, netmask: Ipv4Addr, gateway: Ipv4Addr) -> Self {
        Self {
            ip,
            netmask,
            gateway,
        }
    }

    /// Whether address, netmask, and gateway are all configured.
    ///
    /// A static configuration is only usable when every field is non-zero;
    /// a partially filled configuration is treated as absent.
    pub fn is_fully_specified(&self) -> bool {
        !self.ip.is_unspecified() && !self.netmask.is_unspecified() && !self.gateway.is_unspecified()
    }
}

impl Default for IpConfig {
    fn default() -> Self {
        Self {
            ip: Ipv4Addr::UNSPECIFIED,
            netmask: Ipv4Addr::UNSPECIFIED,
            gateway: Ipv4Addr::UNSPECIFIED,
        }
    }
}

impl fmt::Display for IpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip: {}, mask: {}, gw: {}",
            self.ip, self.netmask, self.gateway
        )
    }
}

/// Status of the address-assignment (DHCP) client on an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DhcpClientStatus {
    /// Client has never been started on this adapter
    NotStarted,
    /// Client is running and acquiring or holding a lease
    Started,
    /// Client was stopped; the adapter holds a static configuration
    Stopped,
}

impl fmt::Display for DhcpClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::Started => write!(f, "started"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Authentication mode of an access point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    /// No authentication
    Open,
    /// WEP (legacy)
    Wep,
    /// WPA with pre-shared key
    WpaPsk,
    /// WPA2 with pre-shared key
    Wpa2Psk,
    /// Mixed WPA/WPA2 with pre-shared key
    WpaWpa2Psk,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Wep => write!(f, "WEP"),
            Self::WpaPsk => write!(f, "WPA-PSK"),
            Self::Wpa2Psk => write!(f, "WPA2-PSK"),
            Self::WpaWpa2Psk => write!(f, "WPA/WPA2-PSK"),
        }
    }
}
