//! Error types for awplus.

use std::io;
use thiserror::Error;

/// Main error type for awplus operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level errors (connection closed, unreachable)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Extraction errors (mandatory section missing, unknown tokens)
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Feature not implemented on this device family
    #[error("{feature} has not been implemented for this platform")]
    Unsupported { feature: String },
}

impl Error {
    /// Build an [`Error::Unsupported`] for a named getter.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Error::Unsupported {
            feature: feature.into(),
        }
    }
}

/// Transport collaborator errors (session channel closed or unreachable).
///
/// The extraction engine never produces these itself; they surface from the
/// [`Transport`](crate::transport::Transport) implementation and are
/// propagated to the caller unchanged.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection was closed unexpectedly
    #[error("Connection closed: {0}")]
    ConnectionClosed(String),

    /// Failed to reach the device at all
    #[error("Connection failed to {host}: {source}")]
    ConnectionFailed {
        host: String,
        #[source]
        source: io::Error,
    },

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Extraction errors.
///
/// Optional fields never produce these; a pattern miss on an optional field
/// leaves its documented sentinel in place. A `ParseError` means a section
/// the rest of the parse depends on was absent, or a token that must not be
/// silently dropped was not recognized.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A section the parse depends on never matched
    #[error("Mandatory section '{section}' not found in command output")]
    MissingSection { section: String },

    /// An LLDP capability code with no entry in the transform table
    #[error("Unknown LLDP capability code '{code}'")]
    UnknownCapability { code: String },
}

impl ParseError {
    /// Build a [`ParseError::MissingSection`].
    pub fn missing_section(section: impl Into<String>) -> Self {
        ParseError::MissingSection {
            section: section.into(),
        }
    }
}

/// Result type alias using awplus's Error.
pub type Result<T> = std::result::Result<T, Error>;
