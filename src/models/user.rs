//! User model for storage and API.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document stored in the `users` collection.
///
/// Created on the first login attempt with an unseen username; never
/// mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document ID, assigned by MongoDB on insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Exact username used for login
    pub username: String,
    /// When the user first registered (RFC3339)
    pub created_at: String,
}

impl User {
    /// New user document for insertion (no ID yet).
    pub fn new(username: &str, created_at: String) -> Self {
        Self {
            id: None,
            username: username.to_string(),
            created_at,
        }
    }
}
