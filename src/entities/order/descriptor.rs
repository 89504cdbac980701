//! Entity descriptor for Order

use super::handlers::{
    OrderAppState, create_order, delete_order, get_order, list_orders, update_order,
};
use super::model::Order;
use crate::core::Repository;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::router::method_not_allowed;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub state: OrderAppState,
}

impl OrderDescriptor {
    pub fn new(repository: Arc<dyn Repository<Order>>) -> Self {
        Self {
            state: OrderAppState::new(repository),
        }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/orders",
                get(list_orders)
                    .post(create_order)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{id}",
                get(get_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .with_state(self.state.clone())
    }
}
