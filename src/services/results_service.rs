use crate::db::Datastore;
use crate::models::poll_models::ChoiceCount;
use crate::services::poll_service;
use crate::utils::error::AppResult;

/// Vote counts for every choice of the poll that received at least one vote,
/// listed in the poll's choice order.
pub async fn get_results(store: &dyn Datastore, poll_id: &str) -> AppResult<Vec<ChoiceCount>> {
    let poll = poll_service::get_poll(store, poll_id).await?;

    let mut counts = store.count_votes_by_choice(poll.id).await?;
    counts.sort_by_key(|count| poll.choice_position(&count.choice_id));

    Ok(counts)
}
