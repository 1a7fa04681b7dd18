use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    poll_models::{Choice, ChoiceCount, Poll},
    vote_models::Vote,
};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub choices: Vec<ChoiceResponse>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChoiceResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub label: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub poll: String,
    pub selection: String,
    pub voter: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultResponse {
    #[serde(rename = "_id")]
    pub choice_id: String,
    pub count: i64,
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self {
            id: choice.id.to_hex(),
            label: choice.label,
        }
    }
}

impl From<Poll> for PollResponse {
    fn from(poll: Poll) -> Self {
        Self {
            id: poll.id.to_hex(),
            question: poll.question,
            choices: poll.choices.into_iter().map(ChoiceResponse::from).collect(),
            author: poll.author.to_hex(),
            created_at: poll.created_at,
        }
    }
}

impl From<Vote> for VoteResponse {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id.to_hex(),
            poll: vote.poll.to_hex(),
            selection: vote.selection.to_hex(),
            voter: vote.voter.to_hex(),
            created_at: vote.created_at,
        }
    }
}

impl From<ChoiceCount> for ResultResponse {
    fn from(count: ChoiceCount) -> Self {
        Self {
            choice_id: count.choice_id.to_hex(),
            count: count.count,
        }
    }
}
