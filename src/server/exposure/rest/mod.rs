//! REST API exposure
//!
//! Turns the registered entities into an Axum `Router`: entity routes, health
//! routes, the unknown-path fallback, and the HTTP middleware stack.

use crate::server::entity_registry::EntityRegistry;
use crate::server::router::route_not_found;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from the entity registry
    ///
    /// # Returns
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - Entity routes
    /// - A JSON 404 for unknown paths
    pub fn build_router(registry: &EntityRegistry) -> Router {
        let app = Self::health_routes().merge(registry.build_routes());

        app.fallback(route_not_found).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "grubdash"
        }))
    }
}
