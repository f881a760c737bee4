//! empresas-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus the
//! environment (a `.env` file is honoured), opens the SQLite store named by
//! `DATABASE_URL`, and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use empresas_server::{ServerConfig, StoreLocation, app, open_store};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Empresas e obrigações acessórias API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Load `.env` before anything reads the environment, RUST_LOG included.
  let dotenv = dotenvy::dotenv();

  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  match dotenv {
    Ok(path) => tracing::debug!(?path, "loaded environment file"),
    Err(e) if e.not_found() => {}
    Err(e) => tracing::warn!("ignoring unreadable .env: {e}"),
  }

  let cli = Cli::parse();

  // Load configuration.
  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let location: StoreLocation = server_cfg
    .database_url
    .parse()
    .context("invalid DATABASE_URL")?;

  // Open SQLite store.
  let store = open_store(&location)
    .await
    .with_context(|| format!("failed to open store at {location:?}"))?;

  let app = app(Arc::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("failed to listen for ctrl-c: {e}");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutdown requested");
}
