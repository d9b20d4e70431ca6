//! Catalog handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use sweetshop_core::error::AppError;
use sweetshop_entity::sweet::Sweet;

use crate::dto::request::{SearchParams, SweetRequest};
use crate::error::ApiResult;
use crate::extractors::{CurrentIdentity, SweetPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/sweets
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Sweet>>> {
    Ok(Json(state.sweet_service.list().await?))
}

/// GET /api/sweets/search
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Sweet>>> {
    let Query(params) = params.map_err(|e| AppError::validation(e.body_text()))?;
    Ok(Json(state.sweet_service.search(&params.filter()).await?))
}

/// POST /api/sweets
pub async fn create(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    ValidatedJson(req): ValidatedJson<SweetRequest>,
) -> ApiResult<(StatusCode, Json<Sweet>)> {
    let sweet = state
        .sweet_service
        .add(identity.identity(), req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(sweet)))
}

/// PUT /api/sweets/{id}
pub async fn update(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    SweetPath(id): SweetPath,
    ValidatedJson(req): ValidatedJson<SweetRequest>,
) -> ApiResult<Json<Sweet>> {
    let sweet = state
        .sweet_service
        .update(identity.identity(), id, req.into())
        .await?;
    Ok(Json(sweet))
}

/// DELETE /api/sweets/{id}
pub async fn remove(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    SweetPath(id): SweetPath,
) -> ApiResult<StatusCode> {
    state.sweet_service.delete(identity.identity(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/sweets/{id}/purchase
pub async fn purchase(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    SweetPath(id): SweetPath,
) -> ApiResult<Json<Sweet>> {
    let sweet = state
        .sweet_service
        .purchase(identity.identity(), id)
        .await?;
    Ok(Json(sweet))
}
