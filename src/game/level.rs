//! Level table and scoring constants.

use serde::Serialize;

/// Maximum score obtainable on a single level.
pub const MAX_PER_LEVEL: i64 = 1000;
/// Points deducted per swap move.
pub const MOVE_PENALTY: i64 = 2;

/// A puzzle configuration: board size, time limit, source image.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Level {
    pub id: u32,
    /// Board is `size` x `size` tiles
    pub size: usize,
    /// Countdown in seconds
    pub time_limit: u32,
    /// Source image path, relative to the static asset root
    pub image: &'static str,
}

/// The three game levels, in play order.
pub const LEVELS: [Level; 3] = [
    Level {
        id: 1,
        size: 3,
        time_limit: 60,
        image: "images/image1.jpg",
    },
    Level {
        id: 2,
        size: 4,
        time_limit: 120,
        image: "images/image2.jpg",
    },
    Level {
        id: 3,
        size: 5,
        time_limit: 180,
        image: "images/image3.jpg",
    },
];

/// Highest total score a perfect game can reach.
pub fn max_total_score() -> i64 {
    MAX_PER_LEVEL * LEVELS.len() as i64
}
