//! Server configuration.
//!
//! Built once from the command line at startup and shared read-only with
//! every request handler. There is no config file: the tool is configured
//! entirely by its arguments.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 9090;

/// Validated, immutable server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path of the video file to serve.
    pub media_path: PathBuf,
    /// Port to listen on (1-65535).
    pub port: u16,
}

impl ServerConfig {
    /// Validate the raw CLI values and construct the configuration.
    pub fn new(media_path: PathBuf, port: u16) -> Result<Self> {
        if port == 0 {
            return Err(Error::InvalidPort(port));
        }

        if !media_path.exists() {
            return Err(Error::MediaNotFound(media_path));
        }

        Ok(Self { media_path, port })
    }

    /// Base name of the media file, used as the player page title.
    pub fn media_name(&self) -> &str {
        file_name(&self.media_path)
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("video")
}
