//! Canonical record types produced by the feature parsers.
//!
//! Every type here is a plain value object: built fresh by one parse call,
//! owned by the caller, never cached or diffed across polls. Fields that a
//! device may omit carry documented sentinels (`"Unknown"`, `-1`, `None`,
//! empty map) rather than being absent.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sentinel for string facts the device did not report.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel for an uptime that never matched.
pub const UPTIME_UNKNOWN: i64 = -1;

/// Identity facts for one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceFacts {
    /// Always "Allied Telesis" for this device family.
    pub vendor: String,
    pub model: String,
    pub serial_number: String,
    pub os_version: String,
    pub hostname: String,
    /// `"Unknown"` unless both hostname and domain are known and the domain
    /// is not the literal `not set`.
    pub fqdn: String,
    /// Seconds since boot of the first stack member, `-1` when no uptime
    /// line matched.
    pub uptime_seconds: i64,
    /// Interface names in the order the device listed them.
    pub interface_list: Vec<String>,
}

impl Default for DeviceFacts {
    fn default() -> Self {
        Self {
            vendor: crate::VENDOR.to_string(),
            model: UNKNOWN.to_string(),
            serial_number: UNKNOWN.to_string(),
            os_version: UNKNOWN.to_string(),
            hostname: UNKNOWN.to_string(),
            fqdn: UNKNOWN.to_string(),
            uptime_seconds: UPTIME_UNKNOWN,
            interface_list: Vec::new(),
        }
    }
}

/// One stanza of `show interface` output.
///
/// A device may emit several stanzas for the same interface name, so the
/// feature result maps each name to a `Vec<InterfaceRecord>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// Canonical lowercase colon-separated MAC, when the stanza reported one.
    pub mac_address: Option<String>,
    /// Seconds since the last state change, when the stanza reported one.
    pub last_flapped: Option<i64>,
    /// Remaining vendor-reported fields, keyed by field name, in stanza order.
    pub fields: IndexMap<String, String>,
}

/// Interfaces keyed by name, in order of appearance.
pub type InterfaceTable = IndexMap<String, Vec<InterfaceRecord>>;

/// CPU usage for one stack member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuUsage {
    /// Five-minute average, percent.
    #[serde(rename = "%usage")]
    pub usage: f64,
}

/// RAM figures for the first stack member, in the device's reported units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub used_ram: u64,
    pub available_ram: u64,
}

/// One temperature sensor row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSensor {
    pub temperature: f64,
    /// `true` when the device reports anything other than `Ok`.
    pub is_alert: bool,
}

/// One fan sensor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanSensor {
    /// `true` when the device reports `Ok`.
    pub status: bool,
}

/// One power supply resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSupply {
    pub capacity: f64,
    pub output: f64,
    /// `true` when the device reports `Ok`.
    pub status: bool,
}

/// Environmental state: CPU, memory, and the sensors of the first stack
/// member.
///
/// The CPU map always has at least index 0. Sections the device did not
/// report are left as empty maps (or `None` for memory) rather than omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Environment {
    /// Stack member index (0-based) to CPU usage. Index 0 is the first
    /// stack member.
    pub cpu: IndexMap<usize, CpuUsage>,
    pub memory: Option<Memory>,
    /// Sensor label to reading.
    pub temperature: IndexMap<String, TemperatureSensor>,
    /// Fan label to health.
    pub fans: IndexMap<String, FanSensor>,
    /// PSU name to figures.
    pub power: IndexMap<String, PowerSupply>,
}

/// One row of the ARP table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArpEntry {
    pub interface: String,
    /// Canonical lowercase colon-separated MAC.
    pub mac: String,
    /// Canonical dotted-quad IPv4 address.
    pub ip: String,
    /// Always `-1.0`; this device family does not report ARP age.
    pub age: f64,
}

/// Simplified LLDP neighbor view: `{port, hostname}` per local interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LldpNeighbor {
    pub port: String,
    /// Remote system name, or the remote chassis id when the system name
    /// was not advertised.
    pub hostname: String,
}

/// Fully structured LLDP neighbor entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LldpNeighborDetail {
    /// Always empty; this device family does not report parent interfaces.
    pub parent_interface: String,
    /// Canonical MAC when the device advertised a dotted chassis id;
    /// otherwise the raw token.
    pub remote_chassis_id: String,
    pub remote_port: String,
    pub remote_port_description: String,
    pub remote_system_name: String,
    /// Multi-line description joined into one string.
    pub remote_system_description: String,
    /// Sorted canonical capability names advertised by the neighbor.
    pub remote_system_capab: Vec<String>,
    /// Sorted canonical capability names enabled on the neighbor.
    pub remote_system_enable_capab: Vec<String>,
}

/// LLDP neighbors keyed by local interface; a port may see several neighbors.
pub type LldpTable = IndexMap<String, Vec<LldpNeighborDetail>>;

/// Simplified LLDP view keyed by local interface.
pub type LldpNeighborTable = IndexMap<String, Vec<LldpNeighbor>>;

/// Prefix length for one bound IPv4 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixLength {
    pub prefix_length: u8,
}

/// IPv4 bindings of one interface, address to prefix length, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfaceIp {
    pub ipv4: IndexMap<String, PrefixLength>,
}

/// IPv4 bindings keyed by interface name.
pub type IpInterfaceTable = IndexMap<String, InterfaceIp>;
