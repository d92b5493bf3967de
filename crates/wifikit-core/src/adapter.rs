//! Adapter control surface
//!
//! Defines the trait through which default handlers drive the network
//! adapter: bring-up/bring-down, inbound-packet callback wiring, cached
//! address configuration, and the address-assignment client. The driver
//! and protocol stack implement this trait; the broker only calls it.

use crate::data::{AdapterRole, DhcpClientStatus, IpConfig, MacAddr};
use crate::error::Result;

/// Control surface of the network adapter and its protocol stack
///
/// Every method is called synchronously from inside a default handler on
/// the broker task. Implementations should return quickly; a non-success
/// return abandons the remaining steps of the calling handler but is
/// never fatal to the broker.
pub trait AdapterControl: Send + Sync {
    /// Fetch the adapter's link-layer address
    fn link_address(&self, role: AdapterRole) -> Result<MacAddr>;

    /// Fetch the adapter's cached address configuration
    fn ip_config(&self, role: AdapterRole) -> Result<IpConfig>;

    /// Replace the adapter's cached address configuration
    fn set_ip_config(&self, role: AdapterRole, config: IpConfig) -> Result<()>;

    /// Mark the adapter active with the given link address and configuration
    fn start(&self, role: AdapterRole, mac: MacAddr, config: IpConfig) -> Result<()>;

    /// Mark the adapter inactive
    fn stop(&self, role: AdapterRole) -> Result<()>;

    /// Bring the adapter's link up
    fn link_up(&self, role: AdapterRole) -> Result<()>;

    /// Bring the adapter's link down
    fn link_down(&self, role: AdapterRole) -> Result<()>;

    /// Register the adapter's inbound-packet callback with the driver
    fn register_inbound(&self, role: AdapterRole) -> Result<()>;

    /// Unregister the adapter's inbound-packet callback
    fn unregister_inbound(&self, role: AdapterRole) -> Result<()>;

    /// Query the status of the address-assignment client
    fn dhcp_status(&self, role: AdapterRole) -> Result<DhcpClientStatus>;

    /// Start the address-assignment client (asynchronous acquisition)
    fn dhcp_start(&self, role: AdapterRole) -> Result<()>;

    /// Commit the station's acquired address at the driver level
    fn commit_station_address(&self, config: &IpConfig) -> Result<()>;
}

/// No-op adapter implementation
///
/// Accepts every control operation and reports an all-zero link address,
/// an empty cached configuration, and a running address-assignment
/// client. Useful as a placeholder before a real driver is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpAdapter;

impl AdapterControl for NoOpAdapter {
    fn link_address(&self, _role: AdapterRole) -> Result<MacAddr> {
        Ok(MacAddr::UNSPECIFIED)
    }

    fn ip_config(&self, _role: AdapterRole) -> Result<IpConfig> {
        Ok(IpConfig::default())
    }

    fn set_ip_config(&self, _role: AdapterRole, _config: IpConfig) -> Result<()> {
        Ok(())
    }

    fn start(&self, _role: AdapterRole, _mac: MacAddr, _config: IpConfig) -> Result<()> {
        Ok(())
    }

    fn stop(&self, _role: AdapterRole) -> Result<()> {
        Ok(())
    }

    fn link_up(&self, _role: AdapterRole) -> Result<()> {
        Ok(())
    }

    fn link_down(&self, _role: AdapterRole) -> Result<()> {
        Ok(())
    }

    fn register_inbound(&self, _role: AdapterRole) -> Result<()> {
        Ok(())
    }

    fn unregister_inbound(&self, _role: AdapterRole) -> Result<()> {
        Ok(())
    }

    fn dhcp_status(&self, _role: AdapterRole) -> Result<DhcpClientStatus> {
        Ok(DhcpClientStatus::Started)
    }

    fn dhcp_start(&self, _role: AdapterRole) -> Result<()> {
        Ok(())
    }

    fn commit_station_address(&self, _config: &IpConfig) -> Result<()> {
        Ok(())
    }
}
