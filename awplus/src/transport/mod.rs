//! Transport collaborator contract.
//!
//! Establishing the session, authenticating, keepalive and the actual I/O
//! all live behind this trait; the extraction engine only ever sees the raw
//! text a command produced. Connection-level failures surface as
//! [`TransportError`] and are propagated to the caller unchanged.

use std::future::Future;

use crate::error::TransportError;

/// A live administrative session capable of running one command and
/// returning its verbatim multi-line response.
pub trait Transport: Send {
    /// Send `command` and return the raw response text.
    fn send_command(
        &mut self,
        command: &str,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}
