use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user_models::User;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Public view of an account; the password hash never leaves the server.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            email: user.email,
            created_at: user.created_at,
        }
    }
}
