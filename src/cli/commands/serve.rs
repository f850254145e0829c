use std::net::SocketAddr;

use anyhow::Context;

use crate::config::AppConfig;
use crate::server;

pub async fn algorithms(config: &AppConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let app = server::algorithms_app(config).context("failed to initialize authentication")?;
    tracing::info!("Starting algorithms API in {:?} mode", config.environment);
    server::serve(app, addr)
        .await
        .with_context(|| format!("algorithms API failed on {}", addr))
}

pub async fn tasks(config: &AppConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let app = server::tasks_app(config);
    tracing::info!("Starting task manager API in {:?} mode", config.environment);
    server::serve(app, addr)
        .await
        .with_context(|| format!("task manager API failed on {}", addr))
}
