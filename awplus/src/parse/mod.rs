//! The extraction engine: segment scanning, field extraction, normalization
//! and the per-feature parsers.
//!
//! Everything here is a pure function of the raw text it receives plus fixed
//! pattern and lookup tables. No parser retains state across calls, so the
//! same fixture always yields the same records and parsers may run
//! concurrently over independent inputs.

pub mod arp;
pub mod environment;
pub mod facts;
pub mod interfaces;
pub mod ip_interfaces;
pub mod lldp;
pub mod normalize;
pub mod segment;

pub use arp::parse_arp_table;
pub use environment::parse_environment;
pub use facts::parse_facts;
pub use interfaces::parse_interfaces;
pub use ip_interfaces::parse_ip_interfaces;
pub use lldp::{parse_lldp_neighbors_detail, simple_neighbors};
pub use segment::{Segment, segments};
