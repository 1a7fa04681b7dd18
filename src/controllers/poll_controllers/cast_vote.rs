use axum::{
    extract::{Extension, Path, State},
    Json,
};

use crate::controllers::poll_controllers::models::VoteResponse;
use crate::models::vote_models::VoteDraft;
use crate::services::vote_service;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppResult;
use crate::utils::extract::ValidatedJson;

pub async fn cast_vote(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<VoteDraft>,
) -> AppResult<Json<VoteResponse>> {
    let vote = vote_service::cast_vote(state.store.as_ref(), &poll_id, payload, user.id).await?;

    Ok(Json(vote.into()))
}
