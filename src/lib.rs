//! Polling service: users create polls, cast votes and read tallies over a
//! JSON REST API backed by MongoDB.
//!
//! # Endpoints
//! - `POST /api/users/signup`, `POST /api/users/login` (token in `x-auth-token`)
//! - `GET /api/polls`, `GET /api/polls/:id`, `GET /api/polls/:id/results`
//! - `POST /api/polls`, `POST /api/polls/:id/votes` (need `Authorization: Bearer <token>`)
//!
//! # Running
//! ```sh
//! STORE=memory SESSION_SECRET=dev cargo run
//! ```
//! With MongoDB, set `MONGO_URI` and `DB_NAME` instead of `STORE=memory`.

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod client;
pub mod config;
pub mod controllers;
pub mod db;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use controllers::user_controllers::models::AUTH_TOKEN_HEADER;
use state::AppState;
use utils::error::{AppError, AppResult};

pub fn build_app(state: AppState) -> AppResult<Router> {
    let cors = cors_layer(state.config.cors_origin.as_deref())?;
    once_cell::sync::Lazy::force(&controllers::health::START_TIME);

    Ok(Router::new()
        .route("/", get(controllers::health::root))
        .nest("/api/users", routes::user_routes::user_routes(state.clone()))
        .nest("/api/polls", routes::poll_routes::poll_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

fn cors_layer(origin: Option<&str>) -> AppResult<CorsLayer> {
    let auth_token = HeaderName::from_static(AUTH_TOKEN_HEADER);

    let Some(origin) = origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| AppError::InternalError(format!("Failed to parse CORS origin: {}", origin)))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([auth_token]))
}
