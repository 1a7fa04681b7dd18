use axum::http::{header::AUTHORIZATION, Request};
use mongodb::bson::oid::ObjectId;

use crate::utils::error::{AppError, AppResult};
use crate::utils::session;

/// Identity of the caller on a protected route, resolved from the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: ObjectId,
}

pub fn extract_user_from_request<T>(request: &Request<T>, secret: &str) -> AppResult<AuthUser> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::AuthenticationError("Missing bearer token".to_string()))?;

    let header = header
        .to_str()
        .map_err(|_| AppError::AuthenticationError("Malformed authorization header".to_string()))?;

    let token = session::bearer_token(header)
        .ok_or_else(|| AppError::AuthenticationError("Malformed authorization header".to_string()))?;

    let claims = session::verify_token(token, secret)?;

    let id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| AppError::AuthenticationError("Invalid or expired token".to_string()))?;

    Ok(AuthUser { id })
}
