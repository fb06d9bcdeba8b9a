//! Device identity facts from `show system`, `show hosts` and
//! `show interface brief`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::model::{DeviceFacts, UNKNOWN, UPTIME_UNKNOWN};
use crate::parse::normalize::parse_uptime;
use crate::parse::segment::segments;

static STACK_MEMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Stack member (\d+)").expect("static regex"));

// Board table row: "Base  389  AT-x930-28GPX  X3-0  A10064A151700024".
// The board name may hold one embedded space; the serial is the last column.
static BASE_BOARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Base\s+\d+\s+(\S+(?:\s\S+)?)\s+(\S+)\s+(\S+)\s*$").expect("static regex")
});

static SOFTWARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Current software\s+:\s+(\S+)").expect("static regex"));

static SYSTEM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^System Name\n(.*?)\nSystem Contact").expect("static regex"));

/// Parse device facts out of the three raw command responses.
///
/// Optional fields keep their sentinels on a pattern miss; a `show system`
/// response with no stack-member block at all is a parse failure since the
/// uptime, model and serial all live inside it.
pub fn parse_facts(
    show_system: &str,
    show_hosts: &str,
    show_interface_brief: &str,
) -> Result<DeviceFacts, ParseError> {
    let mut facts = DeviceFacts::default();

    // Uptime, model and serial are reported per stack member; only the
    // first member's figures feed the facts record.
    let stack = segments(show_system, &STACK_MEMBER_RE);
    let first = stack
        .first()
        .ok_or_else(|| ParseError::missing_section("Stack member"))?;

    for line in first.body().lines() {
        if facts.uptime_seconds == UPTIME_UNKNOWN && line.contains("Uptime") {
            if let Some((_, rest)) = line.split_once(':') {
                if let Some(seconds) = parse_uptime(rest) {
                    facts.uptime_seconds = seconds;
                }
            }
        }
        if facts.serial_number == UNKNOWN {
            if let Some(caps) = BASE_BOARD_RE.captures(line) {
                if let (Some(model), Some(serial)) = (caps.get(1), caps.get(3)) {
                    facts.model = model.as_str().to_string();
                    facts.serial_number = serial.as_str().to_string();
                }
            }
        }
    }

    if let Some(caps) = SOFTWARE_RE.captures(show_system) {
        if let Some(version) = caps.get(1) {
            facts.os_version = version.as_str().to_string();
        }
    }

    // The system name sits on its own indented line between the
    // "System Name" and "System Contact" headers.
    if let Some(caps) = SYSTEM_NAME_RE.captures(show_system) {
        if let Some(name) = caps
            .get(1)
            .and_then(|m| m.as_str().split_whitespace().next())
        {
            facts.hostname = name.to_string();
        }
    }

    let mut domain_name = UNKNOWN.to_string();
    for line in show_hosts.lines() {
        if let Some((_, domain)) = line.split_once("Default domain is ") {
            domain_name = domain.trim().to_string();
            break;
        }
    }
    if domain_name != "not set" && domain_name != UNKNOWN && facts.hostname != UNKNOWN {
        facts.fqdn = format!("{}.{}", facts.hostname, domain_name);
    }

    for line in show_interface_brief.lines() {
        if line.contains("Interface ") {
            continue;
        }
        if let Some(name) = line.split_whitespace().next() {
            facts.interface_list.push(name.to_string());
        }
    }

    Ok(facts)
}
