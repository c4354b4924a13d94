//! Server setup and lifecycle.

use crate::handlers::SharedService;
use crate::routes::create_router_with_middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Server configuration.
pub struct ServerConfig {
    /// Address to bind to.
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

/// The Glossa HTTP server.
pub struct GlossaServer {
    config: ServerConfig,
    service: SharedService,
}

impl GlossaServer {
    /// Creates a new server over a shared vocabulary service.
    pub fn new(service: SharedService, config: ServerConfig) -> Self {
        Self { config, service }
    }

    /// Runs the server until interrupted.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("glossa server listening on {}", self.config.addr);

        let app = create_router_with_middleware(self.service.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("received SIGTERM, shutting down");
        }
    }
}
