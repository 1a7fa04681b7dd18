use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
    Json,
};

use crate::controllers::user_controllers::models::{UserResponse, AUTH_TOKEN_HEADER};
use crate::models::user_models::LoginCredentials;
use crate::services::user_service;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::extract::ValidatedJson;

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginCredentials>,
) -> AppResult<impl IntoResponse> {
    let (user, token) = user_service::login(state.store.as_ref(), &state.config, body).await?;

    let token_value = HeaderValue::from_str(&token)
        .map_err(|e| AppError::InternalError(format!("Failed to create token header: {}", e)))?;

    let mut resp = Json(UserResponse::from(user)).into_response();
    resp.headers_mut()
        .insert(HeaderName::from_static(AUTH_TOKEN_HEADER), token_value);

    Ok(resp)
}
