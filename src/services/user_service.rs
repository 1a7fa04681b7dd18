use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::Datastore;
use crate::models::user_models::{Credentials, LoginCredentials, User};
use crate::utils::error::{AppError, AppResult};
use crate::utils::{password, session};

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn signup(store: &dyn Datastore, credentials: Credentials) -> AppResult<User> {
    let email = normalize_email(&credentials.email);

    if store.find_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict(
            "An account with this email already exists".to_string(),
        ));
    }

    let user = User {
        id: ObjectId::new(),
        email,
        password_hash: password::hash_password(&credentials.password)?,
        created_at: Utc::now(),
    };

    store.insert_user(&user).await?;

    info!(user_id = %user.id, "User signed up");
    Ok(user)
}

/// Verifies the credentials and returns the user together with a fresh token.
pub async fn login(
    store: &dyn Datastore,
    config: &Config,
    credentials: LoginCredentials,
) -> AppResult<(User, String)> {
    let invalid = || AppError::AuthenticationError("Invalid email or password".to_string());

    let email = normalize_email(&credentials.email);
    let user = store.find_user_by_email(&email).await?.ok_or_else(|| {
        warn!("Login attempt for unknown email");
        invalid()
    })?;

    if !password::verify_password(&credentials.password, &user.password_hash)? {
        warn!(user_id = %user.id, "Login attempt with wrong password");
        return Err(invalid());
    }

    let token = session::create_token(
        &user.id.to_hex(),
        &config.session_secret,
        config.token_ttl_hours,
    )?;

    info!(user_id = %user.id, "User logged in");
    Ok((user, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn signup_stores_normalized_email_and_hash() {
        let store = MemoryStore::new();
        let user = signup(&store, credentials(" Jack@Test.com ", "abcdef")).await.unwrap();

        assert_eq!(user.email, "jack@test.com");
        assert_ne!(user.password_hash, "abcdef");
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts() {
        let store = MemoryStore::new();
        signup(&store, credentials("jack@test.com", "abcdef")).await.unwrap();

        let err = signup(&store, credentials("JACK@test.com", "123456")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_issues_token_for_the_user() {
        let store = MemoryStore::new();
        let config = Config::in_memory("secret");
        let user = signup(&store, credentials("jack@test.com", "abcdef")).await.unwrap();

        let (logged_in, token) = login(&store, &config, credentials("jack@test.com", "abcdef").into())
            .await
            .unwrap();

        assert_eq!(logged_in.id, user.id);
        let claims = session::verify_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, user.id.to_hex());
    }

    #[tokio::test]
    async fn login_rejects_bad_credentials() {
        let store = MemoryStore::new();
        let config = Config::in_memory("secret");
        signup(&store, credentials("jack@test.com", "abcdef")).await.unwrap();

        let wrong_password = login(&store, &config, credentials("jack@test.com", "x").into())
            .await
            .unwrap_err();
        assert!(matches!(wrong_password, AppError::AuthenticationError(_)));

        let unknown = login(&store, &config, credentials("jill@test.com", "abcdef").into())
            .await
            .unwrap_err();
        assert!(matches!(unknown, AppError::AuthenticationError(_)));
    }
}
