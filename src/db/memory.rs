use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::db::Datastore;
use crate::models::{
    poll_models::{ChoiceCount, Poll},
    user_models::User,
    vote_models::Vote,
};
use crate::utils::error::{AppError, AppResult};

#[derive(Default)]
pub struct MemoryStore {
    polls: RwLock<Vec<Poll>>,
    votes: RwLock<Vec<Vote>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Datastore for MemoryStore {
    async fn insert_poll(&self, poll: &Poll) -> AppResult<()> {
        self.polls.write().await.push(poll.clone());
        Ok(())
    }

    async fn find_polls(&self) -> AppResult<Vec<Poll>> {
        Ok(self.polls.read().await.clone())
    }

    async fn find_poll(&self, id: ObjectId) -> AppResult<Option<Poll>> {
        Ok(self
            .polls
            .read()
            .await
            .iter()
            .find(|poll| poll.id == id)
            .cloned())
    }

    async fn insert_vote(&self, vote: &Vote) -> AppResult<()> {
        self.votes.write().await.push(vote.clone());
        Ok(())
    }

    async fn count_votes_by_choice(&self, poll_id: ObjectId) -> AppResult<Vec<ChoiceCount>> {
        let votes = self.votes.read().await;

        let mut counts: HashMap<ObjectId, i64> = HashMap::new();
        for vote in votes.iter().filter(|vote| vote.poll == poll_id) {
            *counts.entry(vote.selection).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(choice_id, count)| ChoiceCount { choice_id, count })
            .collect())
    }

    async fn insert_user(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }
}
