use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tracing::info;

use crate::db::Datastore;
use crate::models::vote_models::{Vote, VoteDraft};
use crate::services::poll_service;
use crate::utils::error::{AppError, AppResult};

pub async fn cast_vote(
    store: &dyn Datastore,
    poll_id: &str,
    draft: VoteDraft,
    voter: ObjectId,
) -> AppResult<Vote> {
    let poll = poll_service::get_poll(store, poll_id).await?;

    if let Some(body_poll) = draft.poll.as_deref() {
        if ObjectId::parse_str(body_poll.trim()).ok() != Some(poll.id) {
            return Err(AppError::ValidationError(
                "Vote references a different poll".to_string(),
            ));
        }
    }

    let selection = ObjectId::parse_str(draft.selection.trim())
        .ok()
        .filter(|choice_id| poll.has_choice(choice_id))
        .ok_or_else(|| AppError::ValidationError("Invalid choice for this poll".to_string()))?;

    let vote = Vote {
        id: ObjectId::new(),
        poll: poll.id,
        selection,
        voter,
        created_at: Utc::now(),
    };

    store.insert_vote(&vote).await?;

    info!(poll_id = %poll.id, vote_id = %vote.id, "Vote recorded");
    Ok(vote)
}
