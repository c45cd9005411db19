// SPDX-License-Identifier: MIT

//! Game state machine: screen transitions, per-level timer and move
//! accounting, and score computation.
//!
//! All state lives in the [`Game`] struct; callers own the clock and feed
//! one [`Game::tick`] per elapsed second.

use crate::game::board::{Board, ClickOutcome};
use crate::game::level::{Level, LEVELS, MAX_PER_LEVEL, MOVE_PENALTY};
use rand::Rng;

/// Which screen the game is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Puzzle,
    Results,
    Leaderboard,
}

/// Outcome of a tile click routed through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Selection changed or an out-of-range click; no move consumed
    Selection(ClickOutcome),
    /// A swap that did not solve the board
    Moved,
    /// Level solved in time; `next_level` is `None` when the game finished
    LevelCleared {
        level_score: i64,
        next_level: Option<usize>,
    },
    /// Timer hit zero; the game ends immediately
    LevelFailed { level_score: i64 },
    /// Click ignored (not on the puzzle screen)
    Ignored,
}

/// Explicit game state, replacing the original's module-level globals.
#[derive(Debug, Clone)]
pub struct Game {
    screen: Screen,
    level_index: usize,
    total_score: i64,
    moves: u32,
    time_left: u32,
    board: Board,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game on the welcome screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            level_index: 0,
            total_score: 0,
            moves: 0,
            time_left: 0,
            board: Board::new(LEVELS[0].size),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn level(&self) -> &Level {
        &LEVELS[self.level_index]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Start a fresh run at level 0.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.total_score = 0;
        self.screen = Screen::Puzzle;
        self.start_level(0, rng);
    }

    fn start_level<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        let level = &LEVELS[index];
        self.level_index = index;
        self.moves = 0;
        self.time_left = level.time_limit;
        self.board = Board::new(level.size);
        self.board.shuffle(rng);
    }

    /// One second of countdown. Reaching zero fails the level and ends the
    /// game. Returns the failure event when that happens.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if self.screen != Screen::Puzzle {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return None;
        }

        let level_score = failed_level_score(
            self.board.correct_tiles(),
            self.board.size(),
            self.moves,
        );
        self.total_score += level_score;
        self.screen = Screen::Results;

        Some(GameEvent::LevelFailed { level_score })
    }

    /// Route a tile click to the board; completed swaps count as moves and
    /// a solve clears the level.
    pub fn click_tile<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> GameEvent {
        if self.screen != Screen::Puzzle {
            return GameEvent::Ignored;
        }

        match self.board.click(index) {
            ClickOutcome::Swapped { solved } => {
                self.moves += 1;
                if !solved {
                    return GameEvent::Moved;
                }

                let level_score = cleared_level_score(self.moves);
                self.total_score += level_score;

                if self.level_index + 1 < LEVELS.len() {
                    let next = self.level_index + 1;
                    self.start_level(next, rng);
                    GameEvent::LevelCleared {
                        level_score,
                        next_level: Some(next),
                    }
                } else {
                    self.screen = Screen::Results;
                    GameEvent::LevelCleared {
                        level_score,
                        next_level: None,
                    }
                }
            }
            other => GameEvent::Selection(other),
        }
    }

    /// Qualitative banner for the finished game.
    pub fn comment(&self) -> &'static str {
        performance_comment(self.total_score)
    }

    /// Move from results to the leaderboard screen.
    pub fn show_leaderboard(&mut self) {
        self.screen = Screen::Leaderboard;
    }

    /// Back to the welcome screen from any state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Score for a level solved before timeout, clamped at zero.
pub fn cleared_level_score(moves: u32) -> i64 {
    (MAX_PER_LEVEL - moves as i64 * MOVE_PENALTY).max(0)
}

/// Score for a level that timed out: partial credit for correct tiles,
/// minus the move penalty, clamped at zero.
pub fn failed_level_score(correct_tiles: usize, size: usize, moves: u32) -> i64 {
    let tiles = (size * size) as f64;
    let partial = (correct_tiles as f64 / tiles * MAX_PER_LEVEL as f64).round() as i64;
    (partial - moves as i64 * MOVE_PENALTY).max(0)
}

/// Comment banded by percentage of the maximum possible total score.
pub fn performance_comment(total_score: i64) -> &'static str {
    let pct = total_score as f64 / crate::game::level::max_total_score() as f64 * 100.0;
    if pct >= 90.0 {
        "Legendary!"
    } else if pct >= 70.0 {
        "Great job!"
    } else if pct >= 50.0 {
        "Nice effort!"
    } else {
        "Keep practicing!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Solve the current board by repeatedly swapping each misplaced tile
    /// with the position holding its value.
    fn solve_board(game: &mut Game, rng: &mut StdRng) -> GameEvent {
        loop {
            let misplaced = game
                .board()
                .tiles()
                .iter()
                .enumerate()
                .find(|&(i, &v)| v != i as u32 + 1)
                .map(|(i, &v)| (i, v))
                .expect("board already solved");

            let (slot, value) = misplaced;
            let target = value as usize - 1;
            game.click_tile(slot, rng);
            let event = game.click_tile(target, rng);
            match event {
                GameEvent::Moved => continue,
                done => return done,
            }
        }
    }

    #[test]
    fn test_new_game_on_welcome_screen() {
        let game = Game::new();
        assert_eq!(game.screen(), Screen::Welcome);
        assert_eq!(game.total_score(), 0);
    }

    #[test]
    fn test_start_initializes_level_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new();
        game.start(&mut rng);

        assert_eq!(game.screen(), Screen::Puzzle);
        assert_eq!(game.level_index(), 0);
        assert_eq!(game.level().size, 3);
        assert_eq!(game.time_left(), 60);
        assert_eq!(game.moves(), 0);
        assert!(!game.board().is_solved());
    }

    #[test]
    fn test_clearing_all_levels_finishes_game() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = Game::new();
        game.start(&mut rng);

        let event = solve_board(&mut game, &mut rng);
        assert!(matches!(
            event,
            GameEvent::LevelCleared {
                next_level: Some(1),
                ..
            }
        ));
        assert_eq!(game.level().size, 4);
        assert_eq!(game.time_left(), 120);
        assert_eq!(game.moves(), 0);

        let event = solve_board(&mut game, &mut rng);
        assert!(matches!(
            event,
            GameEvent::LevelCleared {
                next_level: Some(2),
                ..
            }
        ));
        assert_eq!(game.level().size, 5);
        assert_eq!(game.time_left(), 180);

        let event = solve_board(&mut game, &mut rng);
        assert!(matches!(
            event,
            GameEvent::LevelCleared {
                next_level: None,
                ..
            }
        ));
        assert_eq!(game.screen(), Screen::Results);
        assert!(game.total_score() > 0);
    }

    #[test]
    fn test_timeout_fails_level_and_ends_game() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new();
        game.start(&mut rng);

        let mut failed = None;
        for _ in 0..60 {
            if let Some(event) = game.tick() {
                failed = Some(event);
                break;
            }
        }

        assert!(matches!(failed, Some(GameEvent::LevelFailed { .. })));
        assert_eq!(game.screen(), Screen::Results);
    }

    #[test]
    fn test_tick_outside_puzzle_is_noop() {
        let mut game = Game::new();
        assert_eq!(game.tick(), None);
        assert_eq!(game.screen(), Screen::Welcome);
    }

    #[test]
    fn test_cleared_score_clamped_at_zero() {
        assert_eq!(cleared_level_score(0), 1000);
        assert_eq!(cleared_level_score(10), 980);
        assert_eq!(cleared_level_score(500), 0);
        assert_eq!(cleared_level_score(100_000), 0);
    }

    #[test]
    fn test_failed_score_partial_credit() {
        // 5 of 9 tiles correct, 3 moves: round(5/9 * 1000) - 6 = 556 - 6
        assert_eq!(failed_level_score(5, 3, 3), 550);
        assert_eq!(failed_level_score(0, 3, 0), 0);
        assert_eq!(failed_level_score(9, 3, 600), 0);
    }

    #[test]
    fn test_performance_comment_bands() {
        assert_eq!(performance_comment(3000), "Legendary!");
        assert_eq!(performance_comment(2700), "Legendary!");
        assert_eq!(performance_comment(2699), "Great job!");
        assert_eq!(performance_comment(2100), "Great job!");
        assert_eq!(performance_comment(2099), "Nice effort!");
        assert_eq!(performance_comment(1500), "Nice effort!");
        assert_eq!(performance_comment(1499), "Keep practicing!");
        assert_eq!(performance_comment(0), "Keep practicing!");
    }

    #[test]
    fn test_reset_returns_to_welcome() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = Game::new();
        game.start(&mut rng);
        game.click_tile(0, &mut rng);
        game.reset();

        assert_eq!(game.screen(), Screen::Welcome);
        assert_eq!(game.total_score(), 0);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_clicks_ignored_off_puzzle_screen() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = Game::new();
        assert_eq!(game.click_tile(0, &mut rng), GameEvent::Ignored);
    }
}
