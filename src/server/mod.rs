//! HTTP server assembly.
//!
//! Owns the listening socket and the router with the two routes: the
//! player page at `/` and the video stream at `/video`. Serving runs as a
//! background task relative to the startup banner, so binding and the
//! accept loop never block the one-time diagnostics.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::streaming;

pub mod routes_player;

/// Shared application context.
///
/// Written once before serving begins and read-only afterwards; request
/// handlers share nothing else.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
}

/// Create the Axum router with all routes.
pub fn create_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(routes_player::player_page))
        .merge(streaming::router())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Bind the listening socket. Failure is fatal for the whole process, not
/// just one request.
pub async fn bind(port: u16) -> Result<TcpListener> {
    TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(Error::Bind)
}

/// Serve requests on the bound listener until the process exits.
pub async fn serve(listener: TcpListener, ctx: AppContext) -> Result<()> {
    let app = create_router(ctx);
    tracing::info!("serving on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
