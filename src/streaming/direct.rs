//! Direct streaming with HTTP range requests.
//!
//! Turns an incoming `Range` header into a correct full or partial-content
//! response over the configured media file.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use std::io::SeekFrom;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::server::AppContext;

const CONTENT_TYPE_MP4: &str = "video/mp4";

/// Validated byte interval over `[0, length - 1]`.
///
/// Built per request from the `Range` header and consumed immediately.
/// `end` is clamped to the last byte; `start` is taken as parsed, even past
/// the end of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

/// A `Range` header that does not parse as a single byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid Range request")]
pub struct MalformedRange;

/// Parse a `Range` header value against the total resource length.
///
/// Supports single `bytes=start-end` ranges with `end` optional:
/// - `bytes=0-499`
/// - `bytes=500-` (from 500 to the last byte)
/// - `bytes=500-2000` on a shorter file (end clamped to the last byte)
///
/// Anything past the second `-`-delimited field is ignored, so multi-range
/// requests are not honored. The suffix form `bytes=-500` does not carry a
/// start and is rejected.
pub fn parse_range(header: &str, length: u64) -> Result<ByteRange, MalformedRange> {
    let spec = header.strip_prefix("bytes=").ok_or(MalformedRange)?;
    let mut fields = spec.split('-');

    let start = fields
        .next()
        .unwrap_or("")
        .parse::<u64>()
        .map_err(|_| MalformedRange)?;

    let end = match fields.next() {
        None | Some("") => length.saturating_sub(1),
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| MalformedRange)?
            .min(length.saturating_sub(1)),
    };

    Ok(ByteRange { start, end })
}

/// Serve the configured video file with range request support.
///
/// The file is opened and its length re-read on every request, so external
/// rewrites of the file are picked up between requests.
pub async fn stream_video(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<Response, StatusCode> {
    let path = &ctx.config.media_path;

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let file_size = metadata.len();

    let range = match headers.get(header::RANGE).and_then(|h| h.to_str().ok()) {
        Some(raw) if !raw.is_empty() => {
            Some(parse_range(raw, file_size).map_err(|_| StatusCode::BAD_REQUEST)?)
        }
        _ => None,
    };

    match range {
        Some(range) => {
            // Zero when an unvalidated start overshoots the clamped end.
            let length = (range.end + 1).min(file_size).saturating_sub(range.start);

            let mut file = File::open(path)
                .await
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

            file.seek(SeekFrom::Start(range.start))
                .await
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

            let stream = ReaderStream::new(file.take(length));
            let body = Body::from_stream(stream);

            Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, CONTENT_TYPE_MP4)
                .header(header::CONTENT_LENGTH, length.to_string())
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", range.start, range.end, file_size),
                )
                .header(header::ACCEPT_RANGES, "bytes")
                .body(body)
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
        }
        None => {
            let file = File::open(path)
                .await
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

            let stream = ReaderStream::new(file);
            let body = Body::from_stream(stream);

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, CONTENT_TYPE_MP4)
                .header(header::CONTENT_LENGTH, file_size.to_string())
                .header(header::ACCEPT_RANGES, "bytes")
                .body(body)
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
