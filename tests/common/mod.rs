// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tileswap::config::Config;
use tileswap::db::MongoDb;
use tileswap::routes::create_router;
use tileswap::AppState;

/// Check if a live MongoDB is available via environment variable.
#[allow(dead_code)]
pub fn mongo_available() -> bool {
    std::env::var("MONGODB_URI").is_ok()
}

/// Skip test with message if no MongoDB is available.
#[macro_export]
macro_rules! require_mongo {
    () => {
        if !crate::common::mongo_available() {
            eprintln!("Skipping: MONGODB_URI not set");
            return;
        }
    };
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> MongoDb {
    MongoDb::new_mock()
}

/// Create a test app with an offline mock database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();

    let state = Arc::new(AppState { config, db });

    (create_router(state.clone()), state)
}

/// Create a test app backed by a live MongoDB, using a throwaway database
/// name so runs do not interfere with each other.
#[allow(dead_code)]
pub async fn create_test_app_with_mongo(db_name: &str) -> (axum::Router, Arc<AppState>) {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");

    let mut config = Config::test_default();
    config.db_name = db_name.to_string();

    let db = MongoDb::new(&uri, db_name)
        .await
        .expect("Failed to connect to MongoDB");

    let state = Arc::new(AppState { config, db });

    (create_router(state.clone()), state)
}

/// Create a valid bearer token for tests.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, username: &str, signing_key: &[u8]) -> String {
    tileswap::middleware::auth::create_jwt(user_id, username, signing_key)
        .expect("JWT creation failed")
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}
