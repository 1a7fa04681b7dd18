use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub choices: Vec<Choice>,
    pub author: ObjectId,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    pub fn has_choice(&self, choice_id: &ObjectId) -> bool {
        self.choices.iter().any(|choice| &choice.id == choice_id)
    }

    pub fn choice_position(&self, choice_id: &ObjectId) -> Option<usize> {
        self.choices.iter().position(|choice| &choice.id == choice_id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Choice {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub label: String,
}

/// Poll as submitted by a client, before ids are assigned.
#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
pub struct PollDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "A poll needs at least one choice"))]
    pub choices: Vec<ChoiceDraft>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChoiceDraft {
    #[serde(default)]
    pub label: String,
}

impl PollDraft {
    pub fn new<I, L>(question: Option<&str>, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            question: question.map(str::to_string),
            choices: labels
                .into_iter()
                .map(|label| ChoiceDraft { label: label.into() })
                .collect(),
        }
    }
}

/// Number of votes a single choice received.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChoiceCount {
    #[serde(rename = "_id")]
    pub choice_id: ObjectId,
    pub count: i64,
}
