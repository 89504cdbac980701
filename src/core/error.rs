//! Typed error handling for the grubdash API
//!
//! Every failure a request can end in is one of the categories below. Each
//! category knows its HTTP status and a stable error code, and the top-level
//! [`ApiError`] turns itself into the JSON error body the API returns:
//!
//! ```json
//! { "error": "Must include a deliverTo", "code": "VALIDATION_ERROR" }
//! ```
//!
//! # Error Categories
//!
//! - [`ValidationError`]: client-supplied data failed a structural or domain rule
//! - [`EntityError`]: the route identifier does not resolve
//! - [`RequestError`]: routing and request framing problems
//! - [`StorageError`]: the repository could not serve the request
//! - [`ConfigError`]: configuration could not be loaded

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the API
#[derive(Debug)]
pub enum ApiError {
    /// Validation stage failures (400)
    Validation(ValidationError),

    /// Entity lookup errors
    Entity(EntityError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Anything else (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::Entity(e) => write!(f, "{}", e),
            ApiError::Request(e) => write!(f, "{}", e),
            ApiError::Storage(e) => write!(f, "{}", e),
            ApiError::Config(e) => write!(f, "{}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            ApiError::Entity(e) => Some(e),
            ApiError::Request(e) => Some(e),
            ApiError::Storage(e) => Some(e),
            ApiError::Config(e) => Some(e),
            ApiError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Entity(e) => e.status_code(),
            ApiError::Request(e) => e.status_code(),
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Entity(e) => e.error_code(),
            ApiError::Request(e) => e.error_code(),
            ApiError::Storage(_) => "STORAGE_ERROR",
            ApiError::Config(_) => "CONFIG_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A validation stage rejected the submitted data
///
/// The message is user-facing and names the failing field or rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or falsy
    MissingField { field: String },

    /// Any other rule violation, carrying its full message
    Rule { message: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    pub fn rule(message: impl Into<String>) -> Self {
        ValidationError::Rule {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field } => write!(f, "Must include a {}", field),
            ValidationError::Rule { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to resolving a record by identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// No record with this identifier exists
    NotFound { entity_type: String, id: String },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} id not found: {}", entity_type, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl From<EntityError> for ApiError {
    fn from(err: EntityError) -> Self {
        ApiError::Entity(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The path exists but the verb is not mapped
    MethodNotAllowed { method: String, path: String },

    /// No route matches the path
    RouteNotFound { path: String },

    /// The body could not be read as JSON
    InvalidBody { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
            RequestError::RouteNotFound { path } => write!(f, "Path not found: {}", path),
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::Request(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A writer panicked while holding the collection lock
    LockPoisoned { resource: String },

    /// Backend not available
    Unavailable { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { resource } => {
                write!(f, "Storage for {} is poisoned", resource)
            }
            StorageError::Unavailable { message } => {
                write!(f, "Storage unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

/// Repository implementations report through anyhow; typed errors survive the trip
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => ApiError::Storage(storage),
            Err(err) => ApiError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ValidationError::missing("deliverTo");
        assert_eq!(err.to_string(), "Must include a deliverTo");
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: ApiError = ValidationError::rule("dishes must not be empty").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "dishes must not be empty");
    }

    #[test]
    fn test_not_found_message_names_id() {
        let err = EntityError::not_found("order", "999");
        assert_eq!(err.to_string(), "order id not found: 999");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_method_not_allowed_status() {
        let err: ApiError = RequestError::MethodNotAllowed {
            method: "PATCH".to_string(),
            path: "/orders".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.error_code(), "METHOD_NOT_ALLOWED");
        assert!(err.to_string().contains("PATCH"));
    }

    #[test]
    fn test_error_response_carries_message_and_code() {
        let err = ApiError::Entity(EntityError::not_found("Dish", "abc"));
        let response = err.to_response();
        assert_eq!(response.error, "Dish id not found: abc");
        assert_eq!(response.code, "ENTITY_NOT_FOUND");
    }

    #[test]
    fn test_anyhow_keeps_storage_errors_typed() {
        let err = anyhow::Error::new(StorageError::LockPoisoned {
            resource: "orders".to_string(),
        });
        let api: ApiError = err.into();
        assert!(matches!(api, ApiError::Storage(StorageError::LockPoisoned { .. })));

        let api: ApiError = anyhow::anyhow!("boom").into();
        assert!(matches!(api, ApiError::Internal(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound {
            path: "/etc/grubdash.yaml".to_string(),
        };
        assert!(err.to_string().contains("/etc/grubdash.yaml"));
    }
}
