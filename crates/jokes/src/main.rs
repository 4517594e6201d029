//! # Jokes Server
//!
//! The binary is intentionally thin. Everything that matters lives in the
//! `jokeapp` library; this crate only:
//!
//! - reads configuration (`config.rs`: `--db-file`/`DB_FILE`, `--port`/`PORT`),
//! - initializes logging (`RUST_LOG`, defaulting to `info`),
//! - wires the production [`Infrastructure`] into the HTTP router (`server.rs`),
//! - serves until Ctrl-C, then shuts down gracefully.

mod config;
mod server;

use anyhow::Result;
use clap::Parser;
use config::Config;
use jokeapp::infrastructure::Infrastructure;
use server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing();

    info!(
        target: "jokes",
        db_file = %config.db_file.display(),
        "jokes v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let mut server = Server::new(Infrastructure::create(&config.db_file));
    server.start(config.port).await?;

    tokio::signal::ctrl_c().await?;
    info!(target: "jokes", "Shutting down");
    server.stop().await
}
