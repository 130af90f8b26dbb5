//! CLV Prediction Service - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== CLV Prediction Service v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting customer lifetime value service...");

    let settings = Settings::load().context("loading configuration")?;
    run_server(settings).await
}
