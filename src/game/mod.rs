// SPDX-License-Identifier: MIT

//! Pure game core: levels, board mechanics, and the game state machine.
//!
//! Nothing here touches the network or the terminal; the server exposes the
//! level table over HTTP and the `play` binary drives the controller.

pub mod board;
pub mod controller;
pub mod level;

pub use board::{Board, ClickOutcome};
pub use controller::{Game, GameEvent, Screen};
pub use level::{Level, LEVELS, MAX_PER_LEVEL, MOVE_PENALTY};
