// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod score;
pub mod user;

pub use score::Score;
pub use user::User;
