// SPDX-License-Identifier: MIT

//! Tileswap: a swap-based sliding-tile puzzle game with a score leaderboard.
//!
//! This crate provides the backend API (login-or-register auth, score
//! submission, leaderboard) plus the pure game core that the terminal
//! client drives.

pub mod config;
pub mod db;
pub mod error;
pub mod game;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::MongoDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MongoDb,
}
