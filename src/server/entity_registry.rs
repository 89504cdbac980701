//! Entity registry for managing entity descriptors and collecting their routes

use axum::Router;
use indexmap::IndexMap;

/// Trait that describes how to build routes for an entity
///
/// Each resource (Dish, Order) implements this trait to provide its routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form, also the collection path segment (e.g., "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET/POST /{plural}
    /// - GET/PUT/DELETE /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities served by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: IndexMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is the key; registering it again replaces the
    /// earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
