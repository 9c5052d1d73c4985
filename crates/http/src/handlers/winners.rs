use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use laureates_core::{EntityId, Stored, Winner};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn create_winner(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Winner>, JsonRejection>,
) -> Result<(StatusCode, Json<Stored<Winner>>), ApiError> {
    let Json(winner) = payload?;
    let stored = state.query_service.create_winner(winner).await?;
    tracing::debug!(id = stored.id, "winner created");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn list_winners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stored<Winner>>>, ApiError> {
    Ok(Json(state.query_service.list_winners().await?))
}

pub async fn get_winner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<Stored<Winner>>, ApiError> {
    Ok(Json(state.query_service.get_winner(id).await?))
}
