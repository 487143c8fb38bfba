//! bar — a key/value status bar that hides and restores items as the
//! terminal is resized.
//!
//! Run with:  `RUST_LOG=info bar`, then type commands such as
//! `add cpu right 12%` on stdin.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    // Logs go to stderr so stdout carries only the bar.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("bar v{} starting", env!("CARGO_PKG_VERSION"));

    bar_host::run().await.map_err(Into::into)
}
