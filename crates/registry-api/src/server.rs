//! Registry server implementation.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use registry_config::ServerConfig;

use crate::http::routes::create_router;
use crate::state::AppState;

/// The registry HTTP server.
pub struct RegistryServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl RegistryServer {
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        self.config.addr()
    }

    /// Shared state handed to every handler.
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr()).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(
        &self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_router(self.state.clone());

        info!("Registry server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Registry server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_store::RegistryStore;

    #[test]
    fn test_server_addr() {
        let server = RegistryServer::new(ServerConfig::default(), Arc::new(AppState::default()));
        assert_eq!(server.addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_server_addr_custom() {
        let config = ServerConfig {
            host: "192.168.1.1".to_string(),
            port: 443,
        };
        let server = RegistryServer::new(config, Arc::new(AppState::default()));
        assert_eq!(server.addr(), "192.168.1.1:443");
    }

    #[test]
    fn test_server_shares_state() {
        let state = Arc::new(AppState::new(RegistryStore::new()));
        let server = RegistryServer::new(ServerConfig::default(), state.clone());
        assert!(Arc::ptr_eq(&server.state(), &state));
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let server = RegistryServer::new(ServerConfig::default(), Arc::new(AppState::default()));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let result = server.serve(listener, async {}).await;
        assert!(result.is_ok());
    }
}
