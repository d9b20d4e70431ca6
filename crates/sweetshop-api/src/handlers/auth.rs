//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.user_service.register(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let result = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user.into(),
    }))
}
