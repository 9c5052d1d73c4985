use axum::{Json, extract::State};
use std::sync::Arc;

use laureates_core::WinnerView;
use laureates_storage::StoreStats;

use crate::AppState;
use crate::api_error::ApiError;

/// Winners joined to their organization's country and coordinates.
pub async fn winner_view(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WinnerView>>, ApiError> {
    Ok(Json(state.query_service.winner_view().await?))
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<StoreStats>, ApiError> {
    Ok(Json(state.query_service.stats().await?))
}
