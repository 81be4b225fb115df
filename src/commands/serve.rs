use anyhow::{Context, Result};
use std::net::SocketAddr;

use comment_raffle::config::Config;
use comment_raffle::server::RaffleServer;

pub async fn serve(mut config: Config, bind: Option<SocketAddr>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let server = RaffleServer::new(config).context("Failed to create server")?;

    println!("Serving comment-raffle API on http://{}", server.bind_address());

    server
        .start_with_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
