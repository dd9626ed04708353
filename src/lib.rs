//! Vidbeam - serve a single local video file over HTTP for LAN playback.
//!
//! This library crate exposes the core functionality for integration
//! testing.

pub mod config;
pub mod error;
pub mod lan;
pub mod server;
pub mod streaming;
