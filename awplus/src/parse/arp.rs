//! ARP table rows from `show arp`.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ArpEntry;
use crate::parse::normalize::{canonical_ip, canonical_mac};

/// This device family does not expose ARP entry age.
const ARP_AGE_UNKNOWN: f64 = -1.0;

// (ip, mac, interface, port, type); the interface column may hold one
// embedded space ("vlan 1").
static ARP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.\d+\.\d+\.\d+)\s+(\S+)\s+(\S+\s?\S+?)\s+(\S+)\s+(\S+)")
        .expect("static regex")
});

/// Parse every ARP row in the response, in order of appearance.
///
/// Rows whose address tokens do not canonicalize are dropped; the column
/// header never matches the row pattern.
pub fn parse_arp_table(text: &str) -> Vec<ArpEntry> {
    let mut table = Vec::new();
    for caps in ARP_RE.captures_iter(text) {
        let (Some(ip), Some(mac), Some(interface)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        let (Some(ip), Some(mac)) = (canonical_ip(ip.as_str()), canonical_mac(mac.as_str()))
        else {
            continue;
        };
        table.push(ArpEntry {
            interface: interface.as_str().to_string(),
            mac,
            ip,
            age: ARP_AGE_UNKNOWN,
        });
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let table = parse_arp_table("10.0.0.5  00:11:22:33:44:55  vlan1  dynamic  ARPA");
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].ip, "10.0.0.5");
        assert_eq!(table[0].mac, "00:11:22:33:44:55");
        assert_eq!(table[0].interface, "vlan1");
        assert_eq!(table[0].age, -1.0);
    }

    #[test]
    fn test_full_output_order_preserved() {
        let output = "\
IP Address       MAC Address        Interface  Port       Type
192.168.1.1      0000.cd28.0815     vlan1      port1.0.1  dynamic
192.168.1.20     001a.eb54.f0c1     vlan1      port1.0.3  dynamic
10.20.0.1        0000.cd28.0816     vlan20     sa1        static
";
        let table = parse_arp_table(output);
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].ip, "192.168.1.1");
        assert_eq!(table[0].mac, "00:00:cd:28:08:15");
        assert_eq!(table[1].ip, "192.168.1.20");
        assert_eq!(table[2].interface, "vlan20");
    }

    #[test]
    fn test_no_rows() {
        assert!(parse_arp_table("IP Address  MAC Address  Interface\n").is_empty());
    }
}
