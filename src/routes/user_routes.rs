use axum::{routing::post, Router};

use crate::controllers::user_controllers::{login, signup};
use crate::state::AppState;

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(signup::signup))
        .route("/login", post(login::login))
        .with_state(state)
}
