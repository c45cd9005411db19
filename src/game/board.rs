// SPDX-License-Identifier: MIT

//! Tile board: an n x n permutation of `1..=n*n` with two-phase swap
//! selection.

use rand::seq::SliceRandom;
use rand::Rng;

/// Selection phase for the two-click swap interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    NoSelection,
    OneSelected(usize),
}

/// Result of a tile click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click: tile marked selected
    Selected(usize),
    /// Clicked the selected tile again: selection cleared
    Deselected,
    /// Second click on a different tile: values swapped
    Swapped { solved: bool },
    /// Index outside the grid; state unchanged
    OutOfBounds,
}

/// Puzzle board state.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    grid: Vec<u32>,
    selection: Selection,
}

impl Board {
    /// Identity permutation of length `n*n` (the solved layout).
    pub fn new(n: usize) -> Self {
        Self {
            size: n,
            grid: (1..=(n * n) as u32).collect(),
            selection: Selection::NoSelection,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.grid
    }

    /// Index of the currently selected tile, if any.
    pub fn selected(&self) -> Option<usize> {
        match self.selection {
            Selection::OneSelected(i) => Some(i),
            Selection::NoSelection => None,
        }
    }

    /// Apply a uniform random permutation, re-rolling while the result is
    /// already solved. Boards shorter than two tiles are left alone: they
    /// have no unsolved permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.grid.len() < 2 {
            return;
        }
        loop {
            self.grid.shuffle(rng);
            if !self.is_solved() {
                break;
            }
        }
        self.selection = Selection::NoSelection;
    }

    /// Handle a click on tile `index`, advancing the selection state
    /// machine. A completed swap reports whether the board is now solved.
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        if index >= self.grid.len() {
            return ClickOutcome::OutOfBounds;
        }

        match self.selection {
            Selection::NoSelection => {
                self.selection = Selection::OneSelected(index);
                ClickOutcome::Selected(index)
            }
            Selection::OneSelected(first) if first == index => {
                self.selection = Selection::NoSelection;
                ClickOutcome::Deselected
            }
            Selection::OneSelected(first) => {
                self.grid.swap(first, index);
                self.selection = Selection::NoSelection;
                ClickOutcome::Swapped {
                    solved: self.is_solved(),
                }
            }
        }
    }

    /// True iff the grid is the identity permutation.
    pub fn is_solved(&self) -> bool {
        self.grid
            .iter()
            .enumerate()
            .all(|(i, &v)| v == i as u32 + 1)
    }

    /// Number of tiles already in their solved position.
    pub fn correct_tiles(&self) -> usize {
        self.grid
            .iter()
            .enumerate()
            .filter(|&(i, &v)| v == i as u32 + 1)
            .count()
    }

    /// Background-position percentages for the image crop of tile `value`
    /// on an `n` x `n` board. Tile values start at 1; anything below is
    /// clamped to the first tile.
    pub fn crop_offset(value: u32, n: usize) -> (f64, f64) {
        if n <= 1 {
            return (0.0, 0.0);
        }
        let index = value.max(1) as usize - 1;
        let row = index / n;
        let col = index % n;
        (
            col as f64 / (n - 1) as f64 * 100.0,
            row as f64 / (n - 1) as f64 * 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_board_is_solved() {
        for n in 1..=6 {
            assert!(Board::new(n).is_solved(), "identity board n={} not solved", n);
        }
    }

    #[test]
    fn test_shuffle_never_solved() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 2..=5 {
            for _ in 0..50 {
                let mut board = Board::new(n);
                board.shuffle(&mut rng);
                assert!(!board.is_solved());
            }
        }
    }

    #[test]
    fn test_swap_involution() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::new(4);
        board.shuffle(&mut rng);
        let before = board.tiles().to_vec();

        assert_eq!(board.click(3), ClickOutcome::Selected(3));
        assert!(matches!(board.click(9), ClickOutcome::Swapped { .. }));
        assert_ne!(board.tiles(), before.as_slice());

        board.click(3);
        board.click(9);
        assert_eq!(board.tiles(), before.as_slice());
    }

    #[test]
    fn test_click_same_tile_deselects() {
        let mut board = Board::new(3);
        assert_eq!(board.click(4), ClickOutcome::Selected(4));
        assert_eq!(board.click(4), ClickOutcome::Deselected);
        assert_eq!(board.selected(), None);
        assert!(board.is_solved());
    }

    #[test]
    fn test_click_out_of_bounds() {
        let mut board = Board::new(3);
        assert_eq!(board.click(9), ClickOutcome::OutOfBounds);
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_swap_reports_solved() {
        let mut board = Board::new(2);
        // One swap away from solved: exchange the first two tiles.
        board.click(0);
        board.click(1);
        assert!(!board.is_solved());

        board.click(0);
        assert_eq!(board.click(1), ClickOutcome::Swapped { solved: true });
    }

    #[test]
    fn test_correct_tiles_counts_fixed_points() {
        let mut board = Board::new(3);
        assert_eq!(board.correct_tiles(), 9);
        board.click(0);
        board.click(8);
        assert_eq!(board.correct_tiles(), 7);
    }

    #[test]
    fn test_crop_offset_corners() {
        assert_eq!(Board::crop_offset(1, 3), (0.0, 0.0));
        assert_eq!(Board::crop_offset(3, 3), (100.0, 0.0));
        assert_eq!(Board::crop_offset(9, 3), (100.0, 100.0));
        assert_eq!(Board::crop_offset(5, 3), (50.0, 50.0));
        assert_eq!(Board::crop_offset(1, 1), (0.0, 0.0));
    }

    #[test]
    fn test_crop_offset_clamps_zero_value() {
        assert_eq!(Board::crop_offset(0, 3), (0.0, 0.0));
    }
}
