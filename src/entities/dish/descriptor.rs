//! Entity descriptor for Dish

use super::handlers::{DishAppState, create_dish, get_dish, list_dishes, update_dish};
use super::model::Dish;
use crate::core::Repository;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::router::method_not_allowed;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    pub state: DishAppState,
}

impl DishDescriptor {
    pub fn new(repository: Arc<dyn Repository<Dish>>) -> Self {
        Self {
            state: DishAppState::new(repository),
        }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    // Dishes are never deleted
    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/dishes",
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{id}",
                get(get_dish).put(update_dish).fallback(method_not_allowed),
            )
            .with_state(self.state.clone())
    }
}
