//! Interface detail records from `show interface`.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{InterfaceRecord, InterfaceTable};
use crate::parse::normalize::{canonical_mac, parse_uptime};
use crate::parse::segment::segments;

static INTERFACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Interface (\S+)").expect("static regex"));

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Link is (\S+), administrative state is (\S+)").expect("static regex")
});

// The hardware token must not swallow the comma, or the address group
// can never match.
static HARDWARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Hardware is ([^,\s]+)(?:, address is (\S+))?").expect("static regex")
});

static INDEX_MTU_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"index (\d+) metric (\d+) mtu (\d+)").expect("static regex"));

static DUPLEX_SPEED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"current duplex (\S+), current speed (\S+), current polarity (\S+)")
        .expect("static regex")
});

static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Description: (.*)$").expect("static regex"));

static LAST_CHANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*Time since last state change: (.*)$").expect("static regex")
});

/// Parse `show interface` stanzas, grouped by interface name.
///
/// A device may emit more than one stanza per name; each becomes its own
/// record under that name. Fields a stanza does not report are simply absent
/// from the record's field map.
pub fn parse_interfaces(text: &str) -> InterfaceTable {
    let mut table = InterfaceTable::new();

    for stanza in segments(text, &INTERFACE_RE) {
        let Some(name) = stanza.capture(1) else { continue };
        let body = stanza.body();
        let mut record = InterfaceRecord::default();

        if let Some(caps) = LINK_RE.captures(body) {
            insert_capture(&mut record, "link_status", caps.get(1));
            insert_capture(&mut record, "admin_state", caps.get(2));
        }
        if let Some(caps) = HARDWARE_RE.captures(body) {
            insert_capture(&mut record, "hardware", caps.get(1));
            if let Some(raw) = caps.get(2) {
                let raw = raw.as_str();
                record.mac_address =
                    Some(canonical_mac(raw).unwrap_or_else(|| raw.to_string()));
            }
        }
        if let Some(caps) = INDEX_MTU_RE.captures(body) {
            insert_capture(&mut record, "index", caps.get(1));
            insert_capture(&mut record, "metric", caps.get(2));
            insert_capture(&mut record, "mtu", caps.get(3));
        }
        if let Some(caps) = DUPLEX_SPEED_RE.captures(body) {
            insert_capture(&mut record, "duplex", caps.get(1));
            insert_capture(&mut record, "speed", caps.get(2));
            insert_capture(&mut record, "polarity", caps.get(3));
        }
        if let Some(caps) = DESCRIPTION_RE.captures(body) {
            insert_capture(&mut record, "description", caps.get(1));
        }
        if let Some(caps) = LAST_CHANGE_RE.captures(body) {
            if let Some(raw) = caps.get(1) {
                record.last_flapped = parse_uptime(raw.as_str());
            }
        }

        table.entry(name.to_string()).or_default().push(record);
    }

    table
}

fn insert_capture(record: &mut InterfaceRecord, key: &str, m: Option<regex::Match<'_>>) {
    if let Some(m) = m {
        record
            .fields
            .insert(key.to_string(), m.as_str().trim().to_string());
    }
}
