use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use laureates_core::{EntityId, Organization, Stored};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Organization>, JsonRejection>,
) -> Result<(StatusCode, Json<Stored<Organization>>), ApiError> {
    let Json(organization) = payload?;
    let stored = state.query_service.create_organization(organization).await?;
    tracing::debug!(id = stored.id, name = %stored.entity.name, "organization created");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn list_organizations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stored<Organization>>>, ApiError> {
    Ok(Json(state.query_service.list_organizations().await?))
}

pub async fn get_organization(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<Stored<Organization>>, ApiError> {
    Ok(Json(state.query_service.get_organization(id).await?))
}
