//! Fallback handlers shared by every resource's routes

use crate::core::error::{ApiError, RequestError};
use axum::extract::OriginalUri;
use axum::http::Method;

/// Method fallback for known paths: the verb is not mapped there
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(method = %method, path = %uri.path(), "method not allowed");
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}

/// Router fallback: no route matches the path at all
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    RequestError::RouteNotFound {
        path: uri.path().to_string(),
    }
    .into()
}
