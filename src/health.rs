use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::i18n;

/// Liveness probe for the hosting platform and external uptime pingers.
/// It only asserts that the process can answer HTTP; there is nothing else
/// to check — the bot holds no state.
async fn alive() -> &'static str {
    i18n::MSG_ALIVE
}

fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Bind the liveness listener. Called from `main` before the bot starts so
/// a bind failure aborts startup instead of leaving the process unmonitored.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind liveness port {port}"))
}

/// Serve the liveness endpoint until the process exits.
pub async fn serve(listener: TcpListener) -> Result<()> {
    axum::serve(listener, router()).await?;
    Ok(())
}
