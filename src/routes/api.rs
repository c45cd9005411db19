// SPDX-License-Identifier: MIT

//! Score submission, leaderboard, and diagnostic routes.

use crate::error::{AppError, Result};
use crate::game::level::LEVELS;
use crate::middleware::auth::AuthUser;
use crate::models::Score;
use crate::time_utils::now_rfc3339;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Routes requiring authentication via bearer token.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/score", post(submit_score))
}

/// Routes open to anyone.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/levels", get(get_levels))
        .route("/api/debug", get(get_debug))
}

// ─── Score Submission ────────────────────────────────────────

#[derive(Deserialize)]
struct ScoreRequest {
    /// Accepted as a JSON number or a numeric string
    #[serde(default)]
    score: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// Parse the submitted score as an integer. Numeric strings are accepted,
/// floats are truncated.
fn parse_score(raw: &serde_json::Value) -> Option<i64> {
    match raw {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Integer prefix of a string, `parseInt` style: optional sign, then
/// digits up to the first non-digit character. `"42abc"` is 42.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// Store a finished game's score under the caller's token identity.
async fn submit_score(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>> {
    let raw = req
        .score
        .ok_or_else(|| AppError::BadRequest("Score is required".to_string()))?;
    let score = parse_score(&raw)
        .ok_or_else(|| AppError::BadRequest("Score must be a number".to_string()))?;

    let doc = Score {
        id: None,
        user_id: user.user_id.clone(),
        name: user.username.clone(),
        score,
        submitted_at: now_rfc3339(),
    };

    let id = state.db.insert_score(&doc).await?;

    tracing::info!(username = %user.username, score, "Score stored");

    Ok(Json(ScoreResponse {
        success: true,
        message: "Score added".to_string(),
        id: id.to_hex(),
    }))
}

// ─── Leaderboard ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
    pub submitted_at: String,
}

/// Top 10 scores by descending score.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    let scores = state.db.top_scores().await?;

    let entries = scores
        .into_iter()
        .map(|s| LeaderboardEntry {
            name: s.name,
            score: s.score,
            submitted_at: s.submitted_at,
        })
        .collect();

    Ok(Json(entries))
}

// ─── Levels ──────────────────────────────────────────────────

/// Level configurations, so clients and server agree on board sizes and
/// time limits.
async fn get_levels() -> Json<&'static [crate::game::level::Level]> {
    Json(LEVELS.as_slice())
}

// ─── Debug ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DebugResponse {
    pub message: String,
    pub database: String,
    pub collection: String,
    pub total_records: u64,
    pub data: Vec<Score>,
}

/// Dump all score records (diagnostic only).
async fn get_debug(State(state): State<Arc<AppState>>) -> Result<Json<DebugResponse>> {
    let data = state.db.all_scores().await?;
    let total_records = state.db.count_scores().await?;

    Ok(Json(DebugResponse {
        message: "Debug info".to_string(),
        database: state.db.db_name().to_string(),
        collection: crate::db::collections::SCORES.to_string(),
        total_records,
        data,
    }))
}
