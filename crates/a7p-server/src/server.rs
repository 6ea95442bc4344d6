use tokio::net::TcpListener;

use a7p_sdk::ProfileService;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// A7P profile server.
pub struct A7pServer {
    config: ServerConfig,
}

impl A7pServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing). Fails if the profiles
    /// directory does not exist.
    pub fn router(&self) -> ServerResult<axum::Router> {
        let service = ProfileService::open_dir(&self.config.profiles_dir)?;
        Ok(build_router(AppState::new(service), &self.config))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            "A7P server listening on http://{} (profiles: {})",
            self.config.bind_addr,
            self.config.profiles_dir.display()
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
