//! Score model for storage and API.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Score document stored in the `scores` collection.
///
/// Insert-only: one record per finished game, tied to the submitting
/// user's token identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    /// Document ID, assigned by MongoDB on insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Hex ID of the submitting user
    pub user_id: String,
    /// Username at submission time (denormalized for leaderboard display)
    pub name: String,
    /// Total game score
    pub score: i64,
    /// When the score was submitted (RFC3339)
    pub submitted_at: String,
}
