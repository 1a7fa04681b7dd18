use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::poll_controllers::models::ResultResponse;
use crate::services::results_service;
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_results(
    Path(poll_id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResultResponse>>> {
    let counts = results_service::get_results(state.store.as_ref(), &poll_id).await?;

    Ok(Json(counts.into_iter().map(ResultResponse::from).collect()))
}
