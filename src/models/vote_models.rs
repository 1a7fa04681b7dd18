use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub poll: ObjectId,
    pub selection: ObjectId,
    pub voter: ObjectId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
pub struct VoteDraft {
    /// Optional echo of the poll id; when present it must match the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<String>,
    #[validate(length(min = 1, message = "A selection is required"))]
    pub selection: String,
}
