// SPDX-License-Identifier: MIT

//! Tileswap API Server
//!
//! Serves the puzzle game client and the auth/score/leaderboard API backed
//! by MongoDB.

use std::sync::Arc;
use tileswap::{config::Config, db::MongoDb, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting Tileswap API");

    // Connect to MongoDB
    let db = MongoDb::new(&config.mongodb_uri, &config.db_name)
        .await
        .expect("Failed to connect to MongoDB");

    // Make a fresh database show a populated leaderboard
    if let Err(e) = db.seed_scores_if_empty().await {
        tracing::warn!(error = %e, "Failed to seed demo scores, continuing anyway");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
    });

    // Build router
    let app = tileswap::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tileswap=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
