// SPDX-License-Identifier: MIT

//! Auto-registration/login route.
//!
//! No passwords: the first login with an unseen username creates the user
//! record, later logins return a token for the existing record. Any client
//! can claim any username; hardening is out of scope here.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::User;
use crate::time_utils::now_rfc3339;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/login-or-register", post(login_or_register))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    token: String,
}

/// Find-or-create a user by exact username, return a signed session token.
async fn login_or_register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username required".to_string()));
    }

    let user = match state.db.find_user_by_username(username).await? {
        Some(existing) => existing,
        None => {
            let created = state
                .db
                .insert_user(User::new(username, now_rfc3339()))
                .await?;
            tracing::info!(username, "Registered new user");
            created
        }
    };

    let user_id = user
        .id
        .ok_or_else(|| AppError::Database("Stored user missing _id".to_string()))?
        .to_hex();

    let token = create_jwt(&user_id, &user.username, &state.config.jwt_signing_key)
        .map_err(AppError::Internal)?;

    tracing::info!(username = %user.username, "Issued session token");

    Ok(Json(LoginResponse { token }))
}
