//! # awplus
//!
//! Structured state extraction from Allied Telesis AlliedWare Plus CLI
//! output.
//!
//! The crate turns the free-form text of administrative `show` commands into
//! canonical typed records: device facts, interfaces, environmental sensors,
//! the ARP table, LLDP neighbors and IPv4 interface bindings. Parsing is
//! synchronous and side-effect-free; the only suspension point is the
//! [`Transport`] collaborator that runs a command and returns its raw text.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use awplus::{AwplusDriver, Transport};
//!
//! async fn poll<T: Transport>(session: T) -> Result<(), awplus::Error> {
//!     let mut driver = AwplusDriver::new(session);
//!
//!     let facts = driver.facts().await?;
//!     println!("{} ({})", facts.hostname, facts.model);
//!
//!     for entry in driver.arp_table(None).await? {
//!         println!("{} -> {} on {}", entry.ip, entry.mac, entry.interface);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every feature parser is also exposed directly under [`parse`], taking
//! only fixture text, so each is testable without a device session.

pub mod driver;
pub mod error;
pub mod model;
pub mod parse;
pub mod transport;

/// Vendor name reported in [`model::DeviceFacts`].
pub const VENDOR: &str = "Allied Telesis";

/// Platform identifier for this device family.
pub const PLATFORM: &str = "alliedtelesis";

// Re-export main types for convenience
pub use driver::AwplusDriver;
pub use error::{Error, ParseError, Result, TransportError};
pub use model::{
    ArpEntry, DeviceFacts, Environment, InterfaceRecord, LldpNeighbor, LldpNeighborDetail,
};
pub use transport::Transport;
