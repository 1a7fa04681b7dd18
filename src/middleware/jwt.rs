use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::{auth::extract_user_from_request, error::AppError};

/// Rejects requests without a valid bearer token and hands the caller's
/// identity to the handler as an `AuthUser` extension.
pub async fn jwt_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = extract_user_from_request(&req, &state.config.session_secret)?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
