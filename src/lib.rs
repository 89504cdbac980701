//! # grubdash
//!
//! Backend for a restaurant ordering workflow: dishes and orders served as a
//! JSON REST API.
//!
//! ## Features
//!
//! - **Ordered validation chains**: each mutation runs a fixed sequence of
//!   stages and reports the first failure only
//! - **Order lifecycle**: `pending → preparing → out-for-delivery → delivered`,
//!   with delivered orders frozen and only pending orders deletable
//! - **Envelope wire format**: `{"data": ...}` in and out, `{"error", "code"}`
//!   on failure
//! - **Pluggable storage**: the `Repository` trait with an in-memory default
//! - **Configuration-Based**: listening address and seed records from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let config = AppConfig::from_yaml_file("grubdash.yaml")?;
//! let addr = config.bind_address();
//!
//! ServerBuilder::new()
//!     .with_config(config)
//!     .serve(&addr)
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::Entity,
        ids::{IdGenerator, RandomHexIdGenerator, SequentialIdGenerator},
        service::Repository,
    };

    // === Errors ===
    pub use crate::core::error::{
        ApiError, ApiResult, ConfigError, EntityError, RequestError, StorageError, ValidationError,
    };

    // === Validation ===
    pub use crate::core::validation::{StageResult, Submission, ValidationChain};
    pub use crate::core::{DataPayload, Envelope, Payload};

    // === Entities ===
    pub use crate::entities::{
        Dish, DishDescriptor, DishFields, Order, OrderDescriptor, OrderFields, OrderLine,
        OrderStatus,
    };

    // === Storage ===
    pub use crate::storage::InMemoryRepository;

    // === Config ===
    pub use crate::config::{AppConfig, SeedData, ServerSettings};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{get, post, put},
    };
}
