//! Core module containing fundamental traits and types for the API

pub mod entity;
pub mod error;
pub mod extractors;
pub mod ids;
pub mod payload;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{ApiError, ApiResult};
pub use extractors::DataPayload;
pub use ids::{IdGenerator, RandomHexIdGenerator, SequentialIdGenerator};
pub use payload::{Envelope, Payload};
pub use service::Repository;
pub use validation::{Submission, ValidationChain};
