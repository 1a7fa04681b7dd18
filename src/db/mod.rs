//! Persistence for the `polls`, `votes` and `users` collections.
//!
//! Two backends implement [`Datastore`]:
//! - `mongo`: MongoDB through the official driver
//! - `memory`: process-local collections, used by tests and `STORE=memory`

pub mod connection;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{
    poll_models::{ChoiceCount, Poll},
    user_models::User,
    vote_models::Vote,
};
use crate::utils::error::AppResult;

pub const POLLS: &str = "polls";
pub const VOTES: &str = "votes";
pub const USERS: &str = "users";

#[async_trait]
pub trait Datastore: Send + Sync {
    async fn insert_poll(&self, poll: &Poll) -> AppResult<()>;

    /// All polls in insertion order.
    async fn find_polls(&self) -> AppResult<Vec<Poll>>;

    async fn find_poll(&self, id: ObjectId) -> AppResult<Option<Poll>>;

    async fn insert_vote(&self, vote: &Vote) -> AppResult<()>;

    /// Votes for `poll_id` grouped by selection. Choices nobody picked are absent.
    async fn count_votes_by_choice(&self, poll_id: ObjectId) -> AppResult<Vec<ChoiceCount>>;

    /// Fails with `AppError::Conflict` when the email is already registered.
    async fn insert_user(&self, user: &User) -> AppResult<()>;

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Releases backend resources. Called once after the server stops.
    async fn shutdown(&self) {}
}
