//! Axum extractors for mutation payloads

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::core::error::{ApiError, RequestError};
use crate::core::payload::{Payload, payload_from_body};

/// Axum extractor that yields the `data` object of a JSON request body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     State(state): State<OrderAppState>,
///     DataPayload(payload): DataPayload,
/// ) -> ApiResult<(StatusCode, Json<Envelope<Order>>)> {
///     state.chains.create.run(&Submission::new(&payload))?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DataPayload(pub Payload);

impl<S> FromRequest<S> for DataPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            ApiError::Request(RequestError::InvalidBody {
                message: e.body_text(),
            })
        })?;

        Ok(DataPayload(payload_from_body(body)))
    }
}
