//! Order HTTP handlers

use super::model::{Order, OrderFields};
use super::validation::{self, ensure_deletable};
use crate::core::error::{ApiResult, EntityError};
use crate::core::{DataPayload, Entity, Envelope, Repository, Submission, ValidationChain};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub repository: Arc<dyn Repository<Order>>,
    pub chains: Arc<OrderChains>,
    /// Held from lookup to mutation on update and delete
    pub write_gate: Arc<Mutex<()>>,
}

impl OrderAppState {
    pub fn new(repository: Arc<dyn Repository<Order>>) -> Self {
        Self {
            repository,
            chains: Arc::new(OrderChains::default()),
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    async fn find(&self, id: &str) -> ApiResult<Order> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EntityError::not_found(Order::resource_name_singular(), id).into())
    }
}

/// The validation chains for order mutations, built once
#[derive(Debug)]
pub struct OrderChains {
    pub create: ValidationChain,
    pub update: ValidationChain,
}

impl Default for OrderChains {
    fn default() -> Self {
        Self {
            create: validation::create_chain(),
            update: validation::update_chain(),
        }
    }
}

pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> ApiResult<Json<Envelope<Vec<Order>>>> {
    let orders = state.repository.list().await?;
    Ok(Json(Envelope::new(orders)))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    DataPayload(payload): DataPayload,
) -> ApiResult<(StatusCode, Json<Envelope<Order>>)> {
    state.chains.create.run(&Submission::new(&payload))?;
    let fields = OrderFields::from_payload(&payload)?;

    let order = state.repository.create(fields).await?;
    tracing::debug!(id = %order.id, status = %order.status, "order created");

    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Order>>> {
    let order = state.find(&id).await?;
    Ok(Json(Envelope::new(order)))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
    DataPayload(payload): DataPayload,
) -> ApiResult<Json<Envelope<Order>>> {
    let _gate = state.write_gate.lock().await;

    let current = state.find(&id).await?;
    if let Err(error) = state.chains.update.run(&Submission::for_route(&payload, &id)) {
        tracing::info!(id = %id, status = %current.status, error = %error, "order update rejected");
        return Err(error.into());
    }
    let fields = OrderFields::from_payload(&payload)?;

    let order = state
        .repository
        .update(&id, fields)
        .await?
        .ok_or_else(|| EntityError::not_found(Order::resource_name_singular(), &id))?;
    tracing::debug!(id = %order.id, from = %current.status, to = %order.status, "order updated");

    Ok(Json(Envelope::new(order)))
}

pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let _gate = state.write_gate.lock().await;

    let order = state.find(&id).await?;
    if let Err(error) = ensure_deletable(&order) {
        tracing::info!(id = %id, status = %order.status, "order delete rejected");
        return Err(error.into());
    }

    state.repository.delete(&id).await?;
    tracing::debug!(id = %id, "order deleted");

    Ok(StatusCode::NO_CONTENT)
}
