// SPDX-License-Identifier: MIT

//! MongoDB client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (find-or-create on login)
//! - Scores (insert-only submissions, leaderboard query)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Score, User};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection, Database};

/// Number of entries returned by the leaderboard query.
pub const LEADERBOARD_LIMIT: i64 = 10;

/// MongoDB database client.
#[derive(Clone)]
pub struct MongoDb {
    database: Option<Database>,
    db_name: String,
}

impl MongoDb {
    /// Connect to MongoDB and select the named database.
    ///
    /// Issues a `ping` so a bad connection string fails at startup rather
    /// than on the first request.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        let database = client.database(db_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Database(format!("MongoDB ping failed: {}", e)))?;

        tracing::info!(db = db_name, "Connected to MongoDB");

        Ok(Self {
            database: Some(database),
            db_name: db_name.to_string(),
        })
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            database: None,
            db_name: "offline".to_string(),
        }
    }

    /// Name of the selected database (for the debug endpoint).
    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// Helper to get the database or return an error if offline.
    fn get_database(&self) -> Result<&Database, AppError> {
        self.database
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    fn users(&self) -> Result<Collection<User>, AppError> {
        Ok(self.get_database()?.collection(collections::USERS))
    }

    fn scores(&self) -> Result<Collection<Score>, AppError> {
        Ok(self.get_database()?.collection(collections::SCORES))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Find a user by exact username match.
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.users()?
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a new user and return it with its assigned ID.
    pub async fn insert_user(&self, user: User) -> Result<User, AppError> {
        let result = self
            .users()?
            .insert_one(&user)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database("insert_one returned a non-ObjectId".to_string()))?;

        Ok(User {
            id: Some(id),
            ..user
        })
    }

    // ─── Score Operations ────────────────────────────────────────

    /// Insert a score record and return its assigned ID.
    pub async fn insert_score(&self, score: &Score) -> Result<ObjectId, AppError> {
        let result = self
            .scores()?
            .insert_one(score)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database("insert_one returned a non-ObjectId".to_string()))
    }

    /// Top scores, descending, capped at [`LEADERBOARD_LIMIT`].
    pub async fn top_scores(&self) -> Result<Vec<Score>, AppError> {
        self.scores()?
            .find(doc! {})
            .sort(doc! { "score": -1 })
            .limit(LEADERBOARD_LIMIT)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All score records, unordered (diagnostic only).
    pub async fn all_scores(&self) -> Result<Vec<Score>, AppError> {
        self.scores()?
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Number of stored score records.
    pub async fn count_scores(&self) -> Result<u64, AppError> {
        self.scores()?
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert demo score rows when the collection is empty, so a fresh
    /// database shows a populated leaderboard.
    pub async fn seed_scores_if_empty(&self) -> Result<(), AppError> {
        let count = self.count_scores().await?;
        tracing::info!(count, "Current score records");

        if count > 0 {
            return Ok(());
        }

        let now = crate::time_utils::now_rfc3339();
        let demo: [(&str, i64); 3] = [("Alice", 1500), ("Bob", 1200), ("Charlie", 1800)];

        for (name, score) in demo {
            self.insert_score(&Score {
                id: None,
                user_id: "seed".to_string(),
                name: name.to_string(),
                score,
                submitted_at: now.clone(),
            })
            .await?;
        }

        tracing::info!("Demo scores inserted");
        Ok(())
    }
}
