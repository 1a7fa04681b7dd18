use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::controllers::poll_controllers::{cast_vote, create_poll, get_poll, get_results, polls};
use crate::middleware::jwt::jwt_auth;
use crate::state::AppState;

/// Reads are public; creating polls and voting require a bearer token.
pub fn poll_routes(state: AppState) -> Router {
    let auth = from_fn_with_state(state.clone(), jwt_auth);

    Router::new()
        .route(
            "/",
            get(polls::get_all_polls).merge(post(create_poll::create_poll).route_layer(auth.clone())),
        )
        .route("/:pollId", get(get_poll::get_poll))
        .route("/:pollId/votes", post(cast_vote::cast_vote).route_layer(auth))
        .route("/:pollId/results", get(get_results::get_results))
        .with_state(state)
}
