//! Error types for testapp-core

use std::net::SocketAddr;

use thiserror::Error;

/// Result type alias for testapp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the testapp server
#[derive(Debug, Error)]
pub enum Error {
    /// Startup failure to acquire the listening port. Fatal; never
    /// retried, no fallback port.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// IO error from the accept loop
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
