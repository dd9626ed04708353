//! Shared test harness for integration tests.
//!
//! Spawns the real router over a tempfile-backed media file on a random
//! port for HTTP-level testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use vidbeam::config::ServerConfig;
use vidbeam::server::{create_router, AppContext};

/// Test harness owning the temp directory that backs the served media
/// file.
pub struct TestHarness {
    pub media_path: PathBuf,
    _dir: TempDir,
}

impl TestHarness {
    /// Write `data` to a temp media file and serve it on a random port.
    pub async fn with_server(data: &[u8]) -> (Self, SocketAddr) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let media_path = dir.path().join("test_video.mp4");
        std::fs::write(&media_path, data).expect("failed to write media file");

        let config = ServerConfig::new(media_path.clone(), 9090).expect("invalid test config");
        let ctx = AppContext {
            config: Arc::new(config),
        };
        let app = create_router(ctx);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (
            Self {
                media_path,
                _dir: dir,
            },
            addr,
        )
    }
}
