use crate::adapters::{AgentClient, LocalStorage};
use crate::config::toml_config::TomlConfig;
use crate::core::snapshot::SnapshotWriter;
use crate::domain::ports::AgentApi;
use crate::server::{build_router, AppState};
use crate::utils::error::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A ready-to-serve inspector: agent handle plus resolved configuration.
pub struct Inspector {
    config: TomlConfig,
    agent: Arc<dyn AgentApi>,
}

impl Inspector {
    /// Connects to the agent socket from `config` and takes the startup snapshot.
    ///
    /// Nothing is bound until [`Inspector::serve`] is called, so a failure here
    /// leaves the HTTP port untouched.
    pub async fn bootstrap(config: TomlConfig) -> Result<Self> {
        let agent = AgentClient::connect(&config.agent.socket_path)?;
        tracing::info!("🔌 Using cilium agent at {}", agent.socket_path().display());
        Self::with_agent(config, Arc::new(agent)).await
    }

    pub async fn with_agent(config: TomlConfig, agent: Arc<dyn AgentApi>) -> Result<Self> {
        if config.snapshot.enabled {
            let storage = LocalStorage::new(&config.snapshot.directory);
            let written = SnapshotWriter::new(storage)
                .write_all(agent.as_ref())
                .await?;
            tracing::info!(
                "✅ Startup snapshot written to {}: {}",
                config.snapshot.directory,
                written.join(", ")
            );
        } else {
            tracing::info!("Startup snapshot disabled");
        }

        Ok(Self { config, agent })
    }

    pub fn router(&self) -> Router {
        build_router(Arc::new(AppState::new(self.agent.clone())))
    }

    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        self.serve_on(listener).await
    }

    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;
        tracing::info!("🚀 server is running on port: {}", local_addr.port());
        tracing::info!("HTTP server: http://{}", local_addr);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
