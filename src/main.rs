mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use qrcode::render::unicode;
use qrcode::QrCode;
use std::sync::Arc;

use vidbeam::{config::ServerConfig, lan, server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Respect RUST_LOG if set, otherwise default to info-level request logs.
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "vidbeam=info,tower_http=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let Some(file) = cli.file else {
        cli::Cli::command().print_long_help()?;
        return Ok(());
    };

    let config = ServerConfig::new(file, cli.port)?;

    // Resolved once per process; only formats the access URL and QR payload.
    let address = lan::resolve()?;
    let access_url = format!("http://{}:{}", address, config.port);

    let listener = server::bind(config.port).await?;
    let ctx = server::AppContext {
        config: Arc::new(config.clone()),
    };

    // Serve in the background so the banner and QR code print immediately.
    let serve_task = tokio::spawn(server::serve(listener, ctx));

    print_banner(&config, &access_url);

    serve_task.await.context("server task panicked")??;
    Ok(())
}

fn print_banner(config: &ServerConfig, access_url: &str) {
    println!("======================");
    println!("Video file: {}", config.media_path.display());
    println!("Local access: http://localhost:{}", config.port);
    println!("LAN access: {access_url}");
    println!("======================");
    println!("Scan QR code to access (phone and computer must be on the same LAN):");

    match render_qr(access_url) {
        Ok(qr) => println!("{qr}"),
        Err(e) => tracing::warn!("failed to render QR code: {e}"),
    }

    println!();
    println!("Press Ctrl+C to stop the service");
}

/// Half-block terminal QR code encoding the access URL.
fn render_qr(url: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(url)?;
    Ok(code.render::<unicode::Dense1x2>().build())
}
