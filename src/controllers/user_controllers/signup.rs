use axum::{extract::State, Json};

use crate::controllers::user_controllers::models::UserResponse;
use crate::models::user_models::Credentials;
use crate::services::user_service;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::extract::ValidatedJson;

pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<Credentials>,
) -> AppResult<Json<UserResponse>> {
    let user = user_service::signup(state.store.as_ref(), body).await?;

    Ok(Json(user.into()))
}
