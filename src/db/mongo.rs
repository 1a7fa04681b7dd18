use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Client, Collection, Database, IndexModel,
};
use tracing::info;

use crate::db::{Datastore, POLLS, USERS, VOTES};
use crate::models::{
    poll_models::{ChoiceCount, Poll},
    user_models::User,
    vote_models::Vote,
};
use crate::utils::error::{AppError, AppResult};

const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub fn new(client: Client, db: Database) -> Self {
        Self { client, db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn polls(&self) -> Collection<Poll> {
        self.db.collection::<Poll>(POLLS)
    }

    fn votes(&self) -> Collection<Vote> {
        self.db.collection::<Vote>(VOTES)
    }

    fn users(&self) -> Collection<User> {
        self.db.collection::<User>(USERS)
    }

    /// Unique emails and a lookup index for result aggregation.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users().create_index(unique_email).await?;

        let votes_by_poll = IndexModel::builder().keys(doc! { "poll": 1 }).build();
        self.votes().create_index(votes_by_poll).await?;

        info!("MongoDB indexes ensured");
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl Datastore for MongoStore {
    async fn insert_poll(&self, poll: &Poll) -> AppResult<()> {
        self.polls().insert_one(poll).await?;
        Ok(())
    }

    async fn find_polls(&self) -> AppResult<Vec<Poll>> {
        let cursor = self.polls().find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let polls: Vec<Poll> = cursor.try_collect().await?;
        Ok(polls)
    }

    async fn find_poll(&self, id: ObjectId) -> AppResult<Option<Poll>> {
        Ok(self.polls().find_one(doc! { "_id": id }).await?)
    }

    async fn insert_vote(&self, vote: &Vote) -> AppResult<()> {
        self.votes().insert_one(vote).await?;
        Ok(())
    }

    async fn count_votes_by_choice(&self, poll_id: ObjectId) -> AppResult<Vec<ChoiceCount>> {
        let pipeline = vec![
            doc! { "$match": { "poll": poll_id } },
            doc! { "$group": { "_id": "$selection", "count": { "$sum": 1 } } },
        ];

        let mut cursor = self.votes().aggregate(pipeline).await?;

        let mut counts = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            counts.push(from_document::<ChoiceCount>(document)?);
        }

        Ok(counts)
    }

    async fn insert_user(&self, user: &User) -> AppResult<()> {
        match self.users().insert_one(user).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users().find_one(doc! { "email": email }).await?)
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client shut down");
    }
}
