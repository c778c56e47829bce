//! Well-known patterns for rule and engine tests.
//!
//! - [`Pattern::Block`], [`Pattern::Beehive`]: still lifes.
//! - [`Pattern::Blinker`], [`Pattern::Toad`]: period-2 oscillators.
//! - [`Pattern::Glider`]: moves (+1, +1) every 4 generations.

use conway_board::Board;
use conway_core::{Cell, Coord};

/// A named pattern, placed relative to an origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Block,
    Beehive,
    Blinker,
    Toad,
    Glider,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Block,
        Pattern::Beehive,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Glider,
    ];

    /// Live cell offsets from the pattern's top-left corner.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Beehive => &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
            Pattern::Blinker => &[(0, 1), (1, 1), (2, 1)],
            Pattern::Toad => &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Pattern::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    /// Oscillation period; 1 for still lifes, 4 for the glider.
    pub fn period(self) -> u32 {
        match self {
            Pattern::Block | Pattern::Beehive => 1,
            Pattern::Blinker | Pattern::Toad => 2,
            Pattern::Glider => 4,
        }
    }

    pub fn population(self) -> usize {
        self.offsets().len()
    }

    /// Absolute cells of the pattern placed at `origin`.
    pub fn cells_at(self, origin: Coord) -> Vec<Coord> {
        self.offsets()
            .iter()
            .map(|&(x, y)| origin + Coord::new(x, y))
            .collect()
    }

    /// Set the pattern's cells alive on `board` at `origin`.
    pub fn place(self, board: &mut Board, origin: Coord) {
        for p in self.cells_at(origin) {
            board.set_cell(Cell::Alive, p);
        }
    }
}
