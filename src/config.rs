use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use tracing::info;

use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Mongo,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreKind::Mongo),
            "memory" => Ok(StoreKind::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    pub mongo_uri: Option<String>,
    pub db_name: Option<String>,
    pub server_addr: SocketAddr,
    pub cors_origin: Option<String>,
    pub session_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    /// Reads the process environment (after `.env` has been loaded).
    pub fn from_env() -> AppResult<Self> {
        let store: StoreKind = try_load("STORE", "mongo")?;

        let (mongo_uri, db_name) = match store {
            StoreKind::Mongo => (Some(required("MONGO_URI")?), Some(required("DB_NAME")?)),
            StoreKind::Memory => (None, None),
        };

        Ok(Self {
            store,
            mongo_uri,
            db_name,
            server_addr: try_load("SERVER_ADDR", "0.0.0.0:8000")?,
            cors_origin: env::var("CORS_ORIGIN").ok().filter(|origin| !origin.is_empty()),
            session_secret: required("SESSION_SECRET")?,
            token_ttl_hours: try_load("TOKEN_TTL_HOURS", "24")?,
        })
    }

    /// In-memory configuration for tests and local runs.
    pub fn in_memory(session_secret: impl Into<String>) -> Self {
        Self {
            store: StoreKind::Memory,
            mongo_uri: None,
            db_name: None,
            server_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_origin: None,
            session_secret: session_secret.into(),
            token_ttl_hours: 24,
        }
    }
}

fn required(key: &str) -> AppResult<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::InternalError(format!("{key} must be set in .env")))
}

fn try_load<T: FromStr>(key: &str, default: &str) -> AppResult<T>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| AppError::InternalError(format!("Invalid {key} value: {e}")))
}
