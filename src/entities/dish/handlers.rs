//! Dish HTTP handlers

use super::model::{Dish, DishFields};
use super::validation;
use crate::core::error::{ApiResult, EntityError};
use crate::core::{DataPayload, Envelope, Repository, Submission, ValidationChain};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub repository: Arc<dyn Repository<Dish>>,
    pub create: Arc<ValidationChain>,
    pub update: Arc<ValidationChain>,
}

impl DishAppState {
    pub fn new(repository: Arc<dyn Repository<Dish>>) -> Self {
        Self {
            repository,
            create: Arc::new(validation::create_chain()),
            update: Arc::new(validation::update_chain()),
        }
    }
}

fn not_found(id: &str) -> EntityError {
    EntityError::not_found("Dish", id)
}

pub async fn list_dishes(
    State(state): State<DishAppState>,
) -> ApiResult<Json<Envelope<Vec<Dish>>>> {
    Ok(Json(Envelope::new(state.repository.list().await?)))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    DataPayload(payload): DataPayload,
) -> ApiResult<(StatusCode, Json<Envelope<Dish>>)> {
    state.create.run(&Submission::new(&payload))?;
    let fields = DishFields::from_payload(&payload)?;

    let dish = state.repository.create(fields).await?;
    tracing::debug!(id = %dish.id, "dish created");

    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Dish>>> {
    let dish = state
        .repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(Envelope::new(dish)))
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(id): Path<String>,
    DataPayload(payload): DataPayload,
) -> ApiResult<Json<Envelope<Dish>>> {
    if state.repository.find_by_id(&id).await?.is_none() {
        return Err(not_found(&id).into());
    }
    state.update.run(&Submission::for_route(&payload, &id))?;
    let fields = DishFields::from_payload(&payload)?;

    let dish = state
        .repository
        .update(&id, fields)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::debug!(id = %dish.id, "dish updated");

    Ok(Json(Envelope::new(dish)))
}
