//! IPv4 interface bindings from `show ip interface`.
//!
//! IPv4 only; this device family reports no usable IPv6 data here.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{IpInterfaceTable, PrefixLength};
use crate::parse::normalize::canonical_ip;

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})/(\d+)").expect("static regex")
});

/// Line-oriented scan of the IPv4 interface dump.
///
/// A line that does not begin with whitespace starts a new interface; every
/// following indented line contributes one more address/prefix pair to it.
/// The column-header line and rows reading `unassigned` are skipped, so an
/// interface with no address never appears in the result.
pub fn parse_ip_interfaces(text: &str) -> IpInterfaceTable {
    let mut table = IpInterfaceTable::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.contains("IP-Address") || line.contains("unassigned") || line.trim().is_empty() {
            continue;
        }
        if !line.starts_with(char::is_whitespace) {
            current = line.split_whitespace().next().map(str::to_string);
        }
        let Some(interface) = current.as_deref() else { continue };
        if let Some(caps) = ADDRESS_RE.captures(line) {
            let (Some(ip), Some(prefix)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let (Some(ip), Ok(prefix_length)) =
                (canonical_ip(ip.as_str()), prefix.as_str().parse::<u8>())
            else {
                continue;
            };
            table
                .entry(interface.to_string())
                .or_default()
                .ipv4
                .insert(ip, PrefixLength { prefix_length });
        }
    }

    table
}
