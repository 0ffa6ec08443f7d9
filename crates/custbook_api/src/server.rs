//! Listener configuration and serve loop.

use crate::routes::create_router;
use crate::state::AppState;
use log::info;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::net::TcpListener;

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0").
    pub host: String,
    /// Port to bind to (default: 5000).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Binds the listener and serves until `shutdown` resolves.
pub async fn serve(
    config: &ServerConfig,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "event=server_start module=api status=ok addr={}",
        listener.local_addr()?
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=server_stop module=api status=ok");
    Ok(())
}
