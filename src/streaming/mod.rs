//! Media streaming module.
//!
//! Serves the configured video file over HTTP with byte-range (seek)
//! support.
//!
//! # Routes
//!
//! - `GET /video` - Stream the configured file, honoring the `Range` header

mod direct;

pub use direct::{parse_range, stream_video, ByteRange, MalformedRange};

use axum::{routing::get, Router};

use crate::server::AppContext;

/// Create the streaming router.
pub fn router() -> Router<AppContext> {
    Router::new().route("/video", get(stream_video))
}
