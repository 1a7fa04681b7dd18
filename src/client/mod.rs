//! Typed HTTP client for the polls API.
//!
//! Mirrors the REST contract one call per endpoint: `get_polls`, `get_poll`,
//! `get_results`, `post_poll` and `post_vote`, plus `signup`/`login`. After a
//! successful `login` the issued token is sent as a bearer token on every
//! request.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::controllers::poll_controllers::models::{PollResponse, ResultResponse, VoteResponse};
use crate::controllers::user_controllers::models::{UserResponse, AUTH_TOKEN_HEADER};
use crate::models::{poll_models::PollDraft, user_models::Credentials, vote_models::VoteDraft};
use crate::utils::error::ErrorResponse;

const POLLS_API: &str = "/api/polls";
const USERS_API: &str = "/api/users";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{status} {error}: {message}")]
    Api {
        status: u16,
        error: String,
        message: String,
    },
    #[error("login response did not carry an auth token")]
    MissingToken,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|status| status.as_u16()),
            ClientError::MissingToken => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct PollsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PollsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn signup(&self, credentials: &Credentials) -> ClientResult<UserResponse> {
        let url = format!("{}{}/signup", self.base_url, USERS_API);
        self.send(self.http.post(url).json(credentials)).await
    }

    /// Logs in and keeps the returned token for later requests.
    pub async fn login(&mut self, credentials: &Credentials) -> ClientResult<UserResponse> {
        let url = format!("{}{}/login", self.base_url, USERS_API);
        let response = check(self.http.post(url).json(credentials).send().await?).await?;

        let token = response
            .headers()
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(ClientError::MissingToken)?;
        self.token = Some(token);

        Ok(response.json().await?)
    }

    pub async fn get_polls(&self) -> ClientResult<Vec<PollResponse>> {
        let url = format!("{}{}", self.base_url, POLLS_API);
        self.send(self.http.get(url)).await
    }

    pub async fn get_poll(&self, id: &str) -> ClientResult<PollResponse> {
        let url = format!("{}{}/{}", self.base_url, POLLS_API, id);
        self.send(self.http.get(url)).await
    }

    pub async fn get_results(&self, id: &str) -> ClientResult<Vec<ResultResponse>> {
        let url = format!("{}{}/{}/results", self.base_url, POLLS_API, id);
        self.send(self.http.get(url)).await
    }

    pub async fn post_poll(&self, poll: &PollDraft) -> ClientResult<PollResponse> {
        let url = format!("{}{}", self.base_url, POLLS_API);
        self.send(self.http.post(url).json(poll)).await
    }

    pub async fn post_vote(&self, id: &str, vote: &VoteDraft) -> ClientResult<VoteResponse> {
        let url = format!("{}{}/{}/votes", self.base_url, POLLS_API, id);
        self.send(self.http.post(url).json(vote)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }
}

/// Turns non-2xx responses into `ClientError::Api` using the server's error body.
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let (error, message) = match response.json::<ErrorResponse>().await {
        Ok(body) => (body.error, body.message),
        Err(_) => (
            status.canonical_reason().unwrap_or("UNKNOWN").to_string(),
            String::new(),
        ),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        error,
        message,
    })
}
