use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tracing::info;

use crate::db::Datastore;
use crate::models::poll_models::{Choice, Poll, PollDraft};
use crate::utils::error::{AppError, AppResult};

/// Parses a poll id taken from a URL. An id that is not a valid ObjectId
/// cannot name a stored poll, so it is reported as not found.
pub fn parse_poll_id(poll_id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(poll_id).map_err(|_| AppError::NotFound("Poll not found".to_string()))
}

pub async fn create_poll(
    store: &dyn Datastore,
    draft: PollDraft,
    creator: ObjectId,
) -> AppResult<Poll> {
    if draft.choices.is_empty() {
        return Err(AppError::ValidationError(
            "A poll needs at least one choice".to_string(),
        ));
    }

    let mut choices = Vec::with_capacity(draft.choices.len());
    for choice in draft.choices {
        let label = choice.label.trim();
        if label.is_empty() {
            return Err(AppError::ValidationError(
                "Every choice needs a non-empty label".to_string(),
            ));
        }
        choices.push(Choice {
            id: ObjectId::new(),
            label: label.to_string(),
        });
    }

    let question = draft
        .question
        .map(|question| question.trim().to_string())
        .filter(|question| !question.is_empty());

    let poll = Poll {
        id: ObjectId::new(),
        question,
        choices,
        author: creator,
        created_at: Utc::now(),
    };

    store.insert_poll(&poll).await?;

    info!(poll_id = %poll.id, choices = poll.choices.len(), "Poll created");
    Ok(poll)
}

pub async fn list_polls(store: &dyn Datastore) -> AppResult<Vec<Poll>> {
    store.find_polls().await
}

pub async fn get_poll(store: &dyn Datastore, poll_id: &str) -> AppResult<Poll> {
    let id = parse_poll_id(poll_id)?;

    store
        .find_poll(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
}
