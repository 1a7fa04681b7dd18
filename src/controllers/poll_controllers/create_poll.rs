use axum::{
    extract::{Extension, State},
    Json,
};

use crate::controllers::poll_controllers::models::PollResponse;
use crate::models::poll_models::PollDraft;
use crate::services::poll_service;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppResult;
use crate::utils::extract::ValidatedJson;

pub async fn create_poll(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<PollDraft>,
) -> AppResult<Json<PollResponse>> {
    let poll = poll_service::create_poll(state.store.as_ref(), payload, user.id).await?;

    Ok(Json(poll.into()))
}
