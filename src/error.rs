//! Process-level error types.
//!
//! Everything here is fatal: these errors are produced during startup
//! (configuration, address resolution, binding) and abort the process.
//! Per-request failures are mapped to HTTP status codes inside the
//! handlers and never pass through this type.

use std::path::PathBuf;

/// Fatal startup error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured port is outside the usable range.
    #[error("Port number {0} is invalid, must be in the range 1-65535")]
    InvalidPort(u16),

    /// The configured media file does not exist.
    #[error("Video file does not exist: {}", .0.display())]
    MediaNotFound(PathBuf),

    /// No LAN-reachable address could be determined.
    #[error("No local IPv4 address found in the same subnet as the gateway")]
    NoRouteFound,

    /// Binding the listening socket failed.
    #[error("Failed to bind server socket: {0}")]
    Bind(#[source] std::io::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the fatal startup error.
pub type Result<T> = std::result::Result<T, Error>;
