use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use laureates_core::{Address, EntityId, Stored};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn create_address(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Address>, JsonRejection>,
) -> Result<(StatusCode, Json<Stored<Address>>), ApiError> {
    let Json(address) = payload?;
    let stored = state.query_service.create_address(address).await?;
    tracing::debug!(id = stored.id, role = %stored.entity.owner.role(), "address created");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn list_addresses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stored<Address>>>, ApiError> {
    Ok(Json(state.query_service.list_addresses().await?))
}

pub async fn get_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<Stored<Address>>, ApiError> {
    Ok(Json(state.query_service.get_address(id).await?))
}
