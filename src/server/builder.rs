//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use crate::config::AppConfig;
use crate::core::{IdGenerator, RandomHexIdGenerator, Repository};
use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor};
use crate::storage::InMemoryRepository;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the grubdash HTTP application
///
/// Repositories default to in-memory ones seeded from the configuration.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("grubdash.yaml")?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    ids: Arc<dyn IdGenerator>,
    dish_repository: Option<Arc<dyn Repository<Dish>>>,
    order_repository: Option<Arc<dyn Repository<Order>>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default_config(),
            ids: Arc::new(RandomHexIdGenerator),
            dish_repository: None,
            order_repository: None,
        }
    }

    /// Use this configuration's seed data for the default repositories
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the id generator used by the default repositories
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Serve dishes from this repository instead of an in-memory one
    pub fn with_dish_repository(mut self, repository: Arc<dyn Repository<Dish>>) -> Self {
        self.dish_repository = Some(repository);
        self
    }

    /// Serve orders from this repository instead of an in-memory one
    pub fn with_order_repository(mut self, repository: Arc<dyn Repository<Order>>) -> Self {
        self.order_repository = Some(repository);
        self
    }

    /// Build the entity registry holding both resources
    pub fn build_registry(&mut self) -> EntityRegistry {
        let seed = std::mem::take(&mut self.config.seed);

        let dishes: Arc<dyn Repository<Dish>> = match self.dish_repository.take() {
            Some(repository) => repository,
            None => Arc::new(InMemoryRepository::with_records(seed.dishes, self.ids.clone())),
        };
        let orders: Arc<dyn Repository<Order>> = match self.order_repository.take() {
            Some(repository) => repository,
            None => Arc::new(InMemoryRepository::with_records(seed.orders, self.ids.clone())),
        };

        let mut registry = EntityRegistry::new();
        registry.register(Box::new(DishDescriptor::new(dishes)));
        registry.register(Box::new(OrderDescriptor::new(orders)));
        registry
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let registry = self.build_registry();
        tracing::debug!(entities = ?registry.entity_types(), "routes registered");

        Ok(RestExposure::build_router(&registry))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
