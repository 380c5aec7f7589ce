//! HTTP server startup and shutdown

use std::net::SocketAddr;

use crate::api;
use crate::core::{AppState, Config};

/// HTTP server
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Create a server over an already-initialized state
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    /// Serve until ctrl_c. The database handle is released when the state is
    /// dropped after the server returns.
    pub async fn run(&self) -> anyhow::Result<()> {
        let app = api::router(self.state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Servidor RH escuchando en {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Servidor detenido, conexión a la base de datos cerrada");
        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Apagando...");
}
