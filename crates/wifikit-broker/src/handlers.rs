//! Built-in default handlers
//!
//! One routine per lifecycle event kind, performing the adapter
//! bring-up/bring-down side effects before the user callback runs. A
//! failed adapter operation abandons the remaining steps of that handler
//! only; the caller logs it and still delivers the event to the user
//! callback.

use crate::broker::EventSender;
use wifikit_core::{
    AdapterControl, AdapterRole, DhcpClientStatus, Result, SystemEvent,
};

/// Station adapter started: bring the station interface into service
pub(crate) fn sta_start(
    adapter: &dyn AdapterControl,
    _sender: &EventSender,
    _event: &SystemEvent,
) -> Result<()> {
    adapter_start(adapter, AdapterRole::Station)
}

/// Station adapter stopped: take the station interface out of service
pub(crate) fn sta_stop(
    adapter: &dyn AdapterControl,
    _sender: &EventSender,
    _event: &SystemEvent,
) -> Result<()> {
    adapter_stop(adapter, AdapterRole::Station)
}

/// Access-point adapter started
pub(crate) fn ap_start(
    adapter: &dyn AdapterControl,
    _sender: &EventSender,
    _event: &SystemEvent,
) -> Result<()> {
    adapter_start(adapter, AdapterRole::AccessPoint)
}

/// Access-point adapter stopped
pub(crate) fn ap_stop(
    adapter: &dyn AdapterControl,
    _sender: &EventSender,
    _event: &SystemEvent,
) -> Result<()> {
    adapter_stop(adapter, AdapterRole::AccessPoint)
}

/// Station associated with an access point
///
/// Brings the link up and kicks off address acquisition. With the DHCP
/// client stopped and a fully specified static configuration cached, a
/// `StaGotIp` event is synthesized and enqueued at the back of the queue;
/// it is never processed inline here. A partially specified static
/// configuration is logged and ignored.
pub(crate) fn sta_connected(
    adapter: &dyn AdapterControl,
    sender: &EventSender,
    _event: &SystemEvent,
) -> Result<()> {
    adapter.register_inbound(AdapterRole::Station)?;
    adapter.link_up(AdapterRole::Station)?;

    match adapter.dhcp_status(AdapterRole::Station)? {
        DhcpClientStatus::NotStarted => {
            adapter.dhcp_start(AdapterRole::Station)?;
        }
        DhcpClientStatus::Stopped => {
            let config = adapter.ip_config(AdapterRole::Station)?;
            if config.is_fully_specified() {
                sender.send(SystemEvent::StaGotIp { config })?;
            } else {
                tracing::warn!(%config, "invalid static configuration, ignoring");
            }
        }
        DhcpClientStatus::Started => {}
    }

    Ok(())
}

/// Station disassociated from an access point
pub(crate) fn sta_disconnected(
    adapter: &dyn AdapterControl,
    _sender: &EventSender,
    _event: &SystemEvent,
) -> Result<()> {
    adapter.link_down(AdapterRole::Station)?;
    adapter.unregister_inbound(AdapterRole::Station)?;
    Ok(())
}

/// Station acquired an address: commit it at the driver level
pub(crate) fn sta_got_ip(
    adapter: &dyn AdapterControl,
    _sender: &EventSender,
    event: &SystemEvent,
) -> Result<()> {
    let config = match event {
        SystemEvent::StaGotIp { config } => config,
        _ => return Ok(()),
    };

    adapter.commit_station_address(config)?;
    tracing::info!(ip = %config.ip, netmask = %config.netmask, gateway = %config.gateway,
        "station address acquired");
    Ok(())
}

fn adapter_start(adapter: &dyn AdapterControl, role: AdapterRole) -> Result<()> {
    let mac = adapter.link_address(role)?;
    let config = adapter.ip_config(role)?;
    adapter.register_inbound(role)?;
    adapter.start(role, mac, config)?;
    Ok(())
}

fn adapter_stop(adapter: &dyn AdapterControl, role: AdapterRole) -> Result<()> {
    adapter.unregister_inbound(role)?;
    adapter.stop(role)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc;
    use wifikit_core::{AdapterError, AuthMode, IpConfig, MacAddr};

    // Records every control-surface call so tests can assert step order.
    struct RecordingAdapter {
        calls: Mutex<Vec<String>>,
        dhcp_status: DhcpClientStatus,
        ip_config: IpConfig,
        fail_link_up: bool,
    }

    impl RecordingAdapter {
        fn new(dhcp_status: DhcpClientStatus, ip_config: IpConfig) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                dhcp_status,
                ip_config,
                fail_link_up: false,
            }
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AdapterControl for RecordingAdapter {
        fn link_address(&self, role: AdapterRole) -> Result<MacAddr> {
            self.record(format!("link_address {}", role));
            Ok(MacAddr([2, 0, 0, 0, 0, 1]))
        }

        fn ip_config(&self, role: AdapterRole) -> Result<IpConfig> {
            self.record(format!("ip_config {}", role));
            Ok(self.ip_config)
        }

        fn set_ip_config(&self, role: AdapterRole, _config: IpConfig) -> Result<()> {
            self.record(format!("set_ip_config {}", role));
            Ok(())
        }

        fn start(&self, role: AdapterRole, _mac: MacAddr, _config: IpConfig) -> Result<()> {
            self.record(format!("start {}", role));
            Ok(())
        }

        fn stop(&self, role: AdapterRole) -> Result<()> {
            self.record(format!("stop {}", role));
            Ok(())
        }

        fn link_up(&self, role: AdapterRole) -> Result<()> {
            self.record(format!("link_up {}", role));
            if self.fail_link_up {
                return Err(AdapterError::OperationRejected {
                    role,
                    operation: "link_up".to_string(),
                    reason: "radio off".to_string(),
                }
                .into());
            }
            Ok(())
        }

        fn link_down(&self, role: AdapterRole) -> Result<()> {
            self.record(format!("link_down {}", role));
            Ok(())
        }

        fn register_inbound(&self, role: AdapterRole) -> Result<()> {
            self.record(format!("register_inbound {}", role));
            Ok(())
        }

        fn unregister_inbound(&self, role: AdapterRole) -> Result<()> {
            self.record(format!("unregister_inbound {}", role));
            Ok(())
        }

        fn dhcp_status(&self, role: AdapterRole) -> Result<DhcpClientStatus> {
            self.record(format!("dhcp_status {}", role));
            Ok(self.dhcp_status)
        }

        fn dhcp_start(&self, role: AdapterRole) -> Result<()> {
            self.record(format!("dhcp_start {}", role));
            Ok(())
        }

        fn commit_station_address(&self, _config: &IpConfig) -> Result<()> {
            self.record("commit_station_address");
            Ok(())
        }
    }

    fn test_sender() -> (EventSender, mpsc::Receiver<SystemEvent>) {
        crate::broker::test_support::channel(8)
    }

    fn static_config() -> IpConfig {
        IpConfig::new(
            Ipv4Addr::new(192, 0, 2, 5),
            Ipv4Addr::new(255, 255, 255, 0),
            Ipv4Addr::new(192, 0, 2, 1),
        )
    }

    fn connected_event() -> SystemEvent {
        SystemEvent::StaConnected {
            ssid: "lab".to_string(),
            bssid: MacAddr([0xaa, 0xbb, 0xcc, 0, 0, 1]),
            channel: 6,
            auth_mode: AuthMode::Wpa2Psk,
        }
    }

    #[test]
    fn test_sta_start_step_order() {
        let adapter = RecordingAdapter::new(DhcpClientStatus::Started, IpConfig::default());
        let (sender, _rx) = test_sender();

        sta_start(&adapter, &sender, &SystemEvent::StaStart).unwrap();

        assert_eq!(
            adapter.calls(),
            vec![
                "link_address station",
                "ip_config station",
                "register_inbound station",
                "start station",
            ]
        );
    }

    #[test]
    fn test_ap_stop_unregisters_before_stopping() {
        let adapter = RecordingAdapter::new(DhcpClientStatus::Started, IpConfig::default());
        let (sender, _rx) = test_sender();

        ap_stop(&adapter, &sender, &SystemEvent::ApStop).unwrap();

        assert_eq!(
            adapter.calls(),
            vec!["unregister_inbound access-point", "stop access-point"]
        );
    }

    #[test]
    fn test_sta_connected_starts_dhcp_when_not_started() {
        let adapter = RecordingAdapter::new(DhcpClientStatus::NotStarted, IpConfig::default());
        let (sender, mut rx) = test_sender();

        sta_connected(&adapter, &sender, &connected_event()).unwrap();

        assert!(adapter.calls().contains(&"dhcp_start station".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sta_connected_synthesizes_got_ip_for_static_config() {
        let adapter = RecordingAdapter::new(DhcpClientStatus::Stopped, static_config());
        let (sender, mut rx) = test_sender();

        sta_connected(&adapter, &sender, &connected_event()).unwrap();

        let synthesized = rx.try_recv().unwrap();
        assert_eq!(
            synthesized,
            SystemEvent::StaGotIp {
                config: static_config()
            }
        );
        // Exactly one synthetic event
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sta_connected_ignores_partial_static_config() {
        let partial = IpConfig {
            gateway: Ipv4Addr::UNSPECIFIED,
            ..static_config()
        };
        let adapter = RecordingAdapter::new(DhcpClientStatus::Stopped, partial);
        let (sender, mut rx) = test_sender();

        sta_connected(&adapter, &sender, &connected_event()).unwrap();

        assert!(rx.try_recv().is_err());
        assert!(!adapter.calls().contains(&"dhcp_start station".to_string()));
    }

    #[test]
    fn test_sta_connected_running_dhcp_is_left_alone() {
        let adapter = RecordingAdapter::new(DhcpClientStatus::Started, static_config());
        let (sender, mut rx) = test_sender();

        sta_connected(&adapter, &sender, &connected_event()).unwrap();

        assert!(!adapter.calls().contains(&"dhcp_start station".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_handler_failure_abandons_remaining_steps() {
        let mut adapter = RecordingAdapter::new(DhcpClientStatus::Stopped, static_config());
        adapter.fail_link_up = true;
        let (sender, mut rx) = test_sender();

        let result = sta_connected(&adapter, &sender, &connected_event());
        assert!(result.is_err());

        // Failed at link_up; the DHCP query never ran and nothing was synthesized.
        assert!(!adapter.calls().iter().any(|c| c.starts_with("dhcp_status")));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sta_disconnected_brings_link_down_first() {
        let adapter = RecordingAdapter::new(DhcpClientStatus::Started, IpConfig::default());
        let (sender, _rx) = test_sender();

        sta_disconnected(
            &adapter,
            &sender,
            &SystemEvent::StaDisconnected {
                ssid: "lab".to_string(),
                bssid: MacAddr::UNSPECIFIED,
                reason: 8,
            },
        )
        .unwrap();

        assert_eq!(
            adapter.calls(),
            vec!["link_down station", "unregister_inbound station"]
        );
    }

    #[test]
    fn test_sta_got_ip_commits_address() {
        let adapter = RecordingAdapter::new(DhcpClientStatus::Started, IpConfig::default());
        let (sender, _rx) = test_sender();

        sta_got_ip(
            &adapter,
            &sender,
            &SystemEvent::StaGotIp {
                config: static_config(),
            },
        )
        .unwrap();

        assert_eq!(adapter.calls(), vec!["commit_station_address"]);
    }
}
