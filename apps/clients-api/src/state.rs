//! Application state - shared across all handlers.

use std::sync::Arc;

use clients_core::ports::ClientRepository;
use clients_core::services::{ClientService, ClientServiceImpl};
use clients_infra::{DatabaseConfig, InMemoryClientRepository};

#[cfg(feature = "postgres")]
use clients_infra::{DatabaseConnections, PostgresClientRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let repo = Self::client_repository(db_config).await;

        tracing::info!("Application state initialized");

        Self::with_service(Arc::new(ClientServiceImpl::new(repo)))
    }

    pub fn with_service(clients: Arc<dyn ClientService>) -> Self {
        Self { clients }
    }

    #[cfg(feature = "postgres")]
    async fn client_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn ClientRepository> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryClientRepository::new());
        };

        match DatabaseConnections::init(config).await {
            Ok(connections) => Arc::new(PostgresClientRepository::new(connections.main)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryClientRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn client_repository(_db_config: Option<&DatabaseConfig>) -> Arc<dyn ClientRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryClientRepository::new())
    }
}
