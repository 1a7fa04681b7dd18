use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::controllers::poll_controllers::models::PollResponse;
use crate::services::poll_service;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_poll(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<PollResponse>> {
    debug!(%poll_id, "Fetching poll");

    let poll = poll_service::get_poll(state.store.as_ref(), &poll_id).await?;

    Ok(Json(poll.into()))
}
