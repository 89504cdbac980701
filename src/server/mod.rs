//! Server module for building the HTTP application
//!
//! This module provides a `ServerBuilder` that wires:
//! - the dish and order repositories (in-memory by default)
//! - their REST routes through the entity registry
//! - health checks and JSON fallbacks for unknown paths and verbs

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
