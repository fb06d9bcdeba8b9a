//! Normalizers turning raw captured tokens into canonical domain values.
//!
//! All functions here are pure. Pattern misses return `None` and the caller
//! keeps whatever sentinel it initialized; the one deliberate exception is
//! [`capability_set`], which refuses to silently drop an unknown capability
//! code since that would corrupt topology state downstream.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

pub const HOUR_SECONDS: i64 = 3600;
pub const DAY_SECONDS: i64 = 24 * HOUR_SECONDS;

/// LLDP capability code (lowercased device token) to canonical name.
///
/// Enumerated once; an incoming code absent from this table is a parse
/// failure, never a silent drop.
const LLDP_CAPAB_TRANSFORM_TABLE: &[(&str, &str)] = &[
    ("o", "other"),
    ("other", "other"),
    ("p", "repeater"),
    ("repeater", "repeater"),
    ("b", "bridge"),
    ("bridge", "bridge"),
    ("w", "wlan-access-point"),
    ("wlan access point", "wlan-access-point"),
    ("r", "router"),
    ("router", "router"),
    ("t", "telephone"),
    ("telephone", "telephone"),
    ("c", "docsis-cable-device"),
    ("docsis cable device", "docsis-cable-device"),
    ("s", "station"),
    ("station", "station"),
    ("station only", "station"),
];

static UPTIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) days (\d+):(\d+):(\d+)").expect("static regex"));

/// Parse an AlliedWare Plus uptime string of the form
/// `"<days> days <HH>:<MM>:<SS>"` into seconds.
///
/// Returns `None` when the string does not match; callers initialize their
/// destination to a sentinel before calling.
pub fn parse_uptime(uptime_str: &str) -> Option<i64> {
    let caps = UPTIME_RE.captures(uptime_str.trim())?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<i64>().ok());
    let days = field(1)?;
    let hours = field(2)?;
    let minutes = field(3)?;
    let seconds = field(4)?;
    Some(days * DAY_SECONDS + hours * HOUR_SECONDS + minutes * 60 + seconds)
}

/// Canonicalize a MAC address token into lowercase colon-separated form.
///
/// Accepts colon- (`00:11:22:33:44:55`), dash- (`00-11-22-33-44-55`) and
/// dot-grouped (`0011.2233.4455`) notations. Returns `None` when the token
/// does not hold exactly twelve hex digits.
pub fn canonical_mac(raw: &str) -> Option<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | '.'))
        .collect();
    if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let lower = digits.to_ascii_lowercase();
    let octets: Vec<&str> = (0..6).map(|i| &lower[i * 2..i * 2 + 2]).collect();
    Some(octets.join(":"))
}

/// Canonicalize an IPv4 address token into dotted-quad form.
pub fn canonical_ip(raw: &str) -> Option<String> {
    raw.trim().parse::<Ipv4Addr>().ok().map(|ip| ip.to_string())
}

/// Map a comma-separated capability list through the transform table.
///
/// Tokens are trimmed and lowercased before lookup; the result is sorted and
/// deduplicated. An unknown code fails the parse.
pub fn capability_set(csv: &str) -> Result<Vec<String>, ParseError> {
    if csv.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for token in csv.split(',') {
        let code = token.trim().to_ascii_lowercase();
        if code.is_empty() {
            continue;
        }
        let name = LLDP_CAPAB_TRANSFORM_TABLE
            .iter()
            .find(|(k, _)| *k == code)
            .map(|(_, v)| v.to_string())
            .ok_or(ParseError::UnknownCapability { code })?;
        names.push(name);
    }
    names.sort();
    names.dedup();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uptime() {
        // 1*86400 + 17*3600 + 36*60 + 4
        assert_eq!(parse_uptime("1 days 17:36:04"), Some(149_764));
        assert_eq!(parse_uptime("0 days 00:00:00"), Some(0));
        assert_eq!(parse_uptime("12 days 03:10:59"), Some(1_048_259));
    }

    #[test]
    fn test_parse_uptime_miss_returns_none() {
        assert_eq!(parse_uptime("17:36:04"), None);
        assert_eq!(parse_uptime("forever"), None);
        assert_eq!(parse_uptime(""), None);
    }

    #[test]
    fn test_canonical_mac_forms() {
        assert_eq!(
            canonical_mac("0011.2233.4455").as_deref(),
            Some("00:11:22:33:44:55")
        );
        assert_eq!(
            canonical_mac("00-1A-EB-33-44-55").as_deref(),
            Some("00:1a:eb:33:44:55")
        );
        assert_eq!(
            canonical_mac("00:11:22:33:44:55").as_deref(),
            Some("00:11:22:33:44:55")
        );
    }

    #[test]
    fn test_canonical_mac_rejects_non_mac() {
        // UUID-style chassis ids are longer than twelve hex digits.
        assert_eq!(canonical_mac("38353738-3833-5A43-4A38-323130333443"), None);
        assert_eq!(canonical_mac("port1.0.1"), None);
        assert_eq!(canonical_mac(""), None);
    }

    #[test]
    fn test_canonical_ip() {
        assert_eq!(canonical_ip("10.0.0.5").as_deref(), Some("10.0.0.5"));
        assert_eq!(canonical_ip(" 192.168.1.1 ").as_deref(), Some("192.168.1.1"));
        assert_eq!(canonical_ip("not-an-ip"), None);
    }

    #[test]
    fn test_capability_set_case_and_whitespace() {
        let caps = capability_set("Router, Bridge").unwrap();
        assert_eq!(caps, vec!["bridge", "router"]);
        assert_eq!(capability_set("  bridge ,ROUTER ").unwrap(), caps);
    }

    #[test]
    fn test_capability_set_unknown_code_fails() {
        let err = capability_set("Bridge, Flux Capacitor").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCapability {
                code: "flux capacitor".to_string()
            }
        );
    }

    #[test]
    fn test_capability_set_empty() {
        assert!(capability_set("").unwrap().is_empty());
        assert!(capability_set("   ").unwrap().is_empty());
    }
}
