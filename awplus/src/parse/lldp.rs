//! LLDP neighbor records from `show lldp neighbors detail`.
//!
//! The detail parser does the structured extraction; the simplified
//! `{port, hostname}` view is derived from it, falling back to the remote
//! chassis id when the neighbor advertised no system name (matching the
//! convention of the richer vendor families).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::model::{LldpNeighbor, LldpNeighborDetail, LldpNeighborTable, LldpTable};
use crate::parse::normalize::{canonical_mac, capability_set};
use crate::parse::segment::segments;

const NOT_ADVERTISED: &str = "[not advertised]";

static NEIGHBOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Interface (\S+):").expect("static regex"));

static CHASSIS_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Chassis ID\s*\.+\s*(.*)$").expect("static regex"));

static PORT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Port ID\s*\.+\s*(.*)$").expect("static regex"));

static PORT_DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Port Description\s*\.+\s*(.*)$").expect("static regex"));

static SYSTEM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*System Name\s*\.+\s*(.*)$").expect("static regex"));

static SYSTEM_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*System Description\s*\.+\s*(.*)$").expect("static regex")
});

static CAPABILITIES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*System Capabilities\s*\.+\s*(.*)$").expect("static regex")
});

static ENABLED_CAPABILITIES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*Enabled Capabilities\s*\.+\s*(.*)$").expect("static regex")
});

/// Parse the detail dump into fully structured entries keyed by local
/// interface.
///
/// `[not advertised]` markers become empty strings; a dotted chassis id is
/// canonicalized to MAC form while dash and colon forms pass through raw.
/// An unrecognized capability code fails the parse, never a silent drop.
pub fn parse_lldp_neighbors_detail(text: &str) -> Result<LldpTable, ParseError> {
    let mut table = LldpTable::new();

    for neighbor in segments(text, &NEIGHBOR_RE) {
        let Some(local_interface) = neighbor.capture(1) else { continue };
        let body = neighbor.body();

        let mut detail = LldpNeighborDetail {
            remote_chassis_id: field(body, &CHASSIS_ID_RE),
            remote_port: field(body, &PORT_ID_RE),
            remote_port_description: field(body, &PORT_DESCRIPTION_RE),
            remote_system_name: field(body, &SYSTEM_NAME_RE),
            remote_system_description: join_description(body),
            ..LldpNeighborDetail::default()
        };

        // Dotted chassis ids are MAC addresses; UUID-style ids stay raw.
        if detail.remote_chassis_id.contains('.') {
            if let Some(mac) = canonical_mac(&detail.remote_chassis_id) {
                detail.remote_chassis_id = mac;
            }
        }
        detail.remote_system_capab = capability_set(&field(body, &CAPABILITIES_RE))?;
        detail.remote_system_enable_capab = capability_set(&field(body, &ENABLED_CAPABILITIES_RE))?;

        table
            .entry(local_interface.to_string())
            .or_default()
            .push(detail);
    }

    Ok(table)
}

/// Derive the simplified neighbor view from the detail table.
pub fn simple_neighbors(detail: &LldpTable) -> LldpNeighborTable {
    let mut table = LldpNeighborTable::new();
    for (local_interface, entries) in detail {
        let neighbors = entries
            .iter()
            .map(|entry| {
                let hostname = if entry.remote_system_name.is_empty() {
                    entry.remote_chassis_id.clone()
                } else {
                    entry.remote_system_name.clone()
                };
                LldpNeighbor {
                    port: entry.remote_port.clone(),
                    hostname,
                }
            })
            .collect();
        table.insert(local_interface.clone(), neighbors);
    }
    table
}

fn field(body: &str, re: &Regex) -> String {
    let value = re
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    if value.contains(NOT_ADVERTISED) {
        String::new()
    } else {
        value
    }
}

/// The system description may wrap onto continuation lines carrying no
/// dotted filler; join them into one string.
fn join_description(body: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let mut in_description = false;
    for line in body.lines() {
        if let Some(caps) = SYSTEM_DESCRIPTION_RE.captures(line) {
            if let Some(m) = caps.get(1) {
                parts.push(m.as_str().trim());
            }
            in_description = true;
            continue;
        }
        if in_description {
            let trimmed = line.trim();
            if trimmed.is_empty() || line.contains("..") {
                in_description = false;
                continue;
            }
            parts.push(trimmed);
        }
    }
    let joined = parts.join(" ");
    if joined.contains(NOT_ADVERTISED) {
        String::new()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW_LLDP_DETAIL: &str = "\
LLDP Detailed Neighbor Information
Interface port1.0.1:
  Chassis ID type ............. MAC address
  Chassis ID .................. 0000.cd28.0815
  Port ID type ................ Interface alias
  Port ID ..................... port1.0.2
  TTL ......................... 121
  Port Description ............ [not advertised]
  System Name ................. awplus-2
  System Description .......... Allied Telesis router/switch
                                AlliedWare Plus (TM) v5.4.8
  System Capabilities ......... Bridge, Router
  Enabled Capabilities ........ Bridge, Router
  Management Addresses ........ 192.168.1.2

Interface port1.0.4:
  Chassis ID type ............. Network address
  Chassis ID .................. 38353738-3833-5A43-4A38-323130333443
  Port ID ..................... 1
  TTL ......................... 120
  Port Description ............ ethernet0
  System Name ................. [not advertised]
  System Description .......... [not advertised]
  System Capabilities ......... Station Only
  Enabled Capabilities ........ Station Only
";

    #[test]
    fn test_detail_entries() {
        let table = parse_lldp_neighbors_detail(SHOW_LLDP_DETAIL).unwrap();
        assert_eq!(table.len(), 2);

        let entry = &table["port1.0.1"][0];
        assert_eq!(entry.remote_chassis_id, "00:00:cd:28:08:15");
        assert_eq!(entry.remote_port, "port1.0.2");
        assert_eq!(entry.remote_port_description, "");
        assert_eq!(entry.remote_system_name, "awplus-2");
        assert_eq!(
            entry.remote_system_description,
            "Allied Telesis router/switch AlliedWare Plus (TM) v5.4.8"
        );
        assert_eq!(entry.remote_system_capab, vec!["bridge", "router"]);
        assert_eq!(entry.remote_system_enable_capab, vec!["bridge", "router"]);
        assert_eq!(entry.parent_interface, "");
    }

    #[test]
    fn test_non_mac_chassis_id_passes_through() {
        let table = parse_lldp_neighbors_detail(SHOW_LLDP_DETAIL).unwrap();
        let entry = &table["port1.0.4"][0];
        assert_eq!(
            entry.remote_chassis_id,
            "38353738-3833-5A43-4A38-323130333443"
        );
        assert_eq!(entry.remote_system_name, "");
        assert_eq!(entry.remote_system_description, "");
        assert_eq!(entry.remote_system_capab, vec!["station"]);
    }

    #[test]
    fn test_simple_view_falls_back_to_chassis_id() {
        let detail = parse_lldp_neighbors_detail(SHOW_LLDP_DETAIL).unwrap();
        let simple = simple_neighbors(&detail);

        assert_eq!(simple["port1.0.1"][0].hostname, "awplus-2");
        assert_eq!(simple["port1.0.1"][0].port, "port1.0.2");
        assert_eq!(
            simple["port1.0.4"][0].hostname,
            "38353738-3833-5A43-4A38-323130333443"
        );
    }

    #[test]
    fn test_unknown_capability_fails() {
        let broken = SHOW_LLDP_DETAIL.replace("Bridge, Router", "Bridge, Mainframe");
        let err = parse_lldp_neighbors_detail(&broken).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCapability {
                code: "mainframe".to_string()
            }
        );
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_lldp_neighbors_detail("").unwrap().is_empty());
        assert!(
            parse_lldp_neighbors_detail("% No LLDP neighbor information\n")
                .unwrap()
                .is_empty()
        );
    }
}
