//! Driver facade: issues the per-feature commands and dispatches each raw
//! response to the matching parser.
//!
//! The facade holds no parse state; every getter is a fresh command round
//! trip followed by a pure parse. One driver instance serves one device
//! session; poll several devices by running one driver per session.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{
    ArpEntry, DeviceFacts, Environment, InterfaceTable, IpInterfaceTable, LldpNeighborTable,
    LldpTable,
};
use crate::parse;
use crate::transport::Transport;

/// Marker the device prints when it rejects a command.
const INVALID_MARKER: &str = "% Invalid";

/// State-extraction driver for one AlliedWare Plus device session.
pub struct AwplusDriver<T> {
    transport: T,
}

impl<T: Transport> AwplusDriver<T> {
    /// Wrap an open transport session.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Give the transport back, e.g. to close the session.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Issue candidate commands in order, stopping at the first response the
    /// device does not reject.
    ///
    /// Some commands vary across AlliedWare Plus releases; the stop
    /// condition is the absence of the `% Invalid` marker in the response.
    /// If every candidate is rejected the last response is returned and the
    /// parser decides what it can extract.
    async fn command(&mut self, candidates: &[&str]) -> Result<String> {
        let mut output = String::new();
        for candidate in candidates {
            debug!("sending command: {candidate}");
            output = self.transport.send_command(candidate).await?;
            trace!("received {} bytes", output.len());
            if !output.contains(INVALID_MARKER) {
                break;
            }
            debug!("command rejected by device: {candidate}");
        }
        Ok(output)
    }

    /// Identity facts: model, serial, OS version, hostname, fqdn, uptime and
    /// the interface list.
    pub async fn facts(&mut self) -> Result<DeviceFacts> {
        let show_system = self.command(&["show system"]).await?;
        let show_hosts = self.command(&["show hosts"]).await?;
        let show_interface = self.command(&["show interface brief"]).await?;
        Ok(parse::parse_facts(
            &show_system,
            &show_hosts,
            &show_interface,
        )?)
    }

    /// Detailed interface records, grouped by interface name.
    pub async fn interfaces(&mut self) -> Result<InterfaceTable> {
        let output = self.command(&["show interface"]).await?;
        Ok(parse::parse_interfaces(&output))
    }

    /// CPU, memory and the first stack member's sensor readings.
    pub async fn environment(&mut self) -> Result<Environment> {
        let show_cpu = self.command(&["show cpu"]).await?;
        let show_environment = self.command(&["show system environment"]).await?;
        let show_memory = self.command(&["show memory"]).await?;
        Ok(parse::parse_environment(
            &show_cpu,
            &show_environment,
            &show_memory,
        )?)
    }

    /// ARP entries in the order the device reported them.
    ///
    /// VRF-scoped lookups are not available on this platform and fail fast.
    pub async fn arp_table(&mut self, vrf: Option<&str>) -> Result<Vec<ArpEntry>> {
        if vrf.is_some_and(|name| !name.is_empty()) {
            return Err(Error::unsupported("VRF-scoped ARP"));
        }
        let output = self.command(&["show arp"]).await?;
        Ok(parse::parse_arp_table(&output))
    }

    /// Simplified `{port, hostname}` neighbor view per local interface.
    pub async fn lldp_neighbors(&mut self) -> Result<LldpNeighborTable> {
        let detail = self.lldp_neighbors_detail(None).await?;
        Ok(parse::simple_neighbors(&detail))
    }

    /// Fully structured LLDP neighbor entries, optionally scoped to one
    /// local interface.
    pub async fn lldp_neighbors_detail(&mut self, interface: Option<&str>) -> Result<LldpTable> {
        let output = match interface {
            Some(name) => {
                let command = format!("show lldp neighbors {name} detail");
                self.command(&[command.as_str()]).await?
            }
            None => self.command(&["show lldp neighbors detail"]).await?,
        };
        Ok(parse::parse_lldp_neighbors_detail(&output)?)
    }

    /// IPv4 address bindings per interface.
    pub async fn ip_interfaces(&mut self) -> Result<IpInterfaceTable> {
        let output = self.command(&["show ip interface"]).await?;
        Ok(parse::parse_ip_interfaces(&output))
    }

    /// Optics data is not available on this platform.
    pub fn optics(&self) -> Result<()> {
        Err(Error::unsupported("optics"))
    }

    /// VLAN extraction is not available on this platform.
    pub fn vlans(&self) -> Result<()> {
        Err(Error::unsupported("vlans"))
    }
}
