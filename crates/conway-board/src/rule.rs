//! B3/S23 rule evaluation and generation diffs.
//!
//! A generation transition is expressed as a [`Diff`]: the set of
//! coordinates whose state flips. Computing the diff only reads the
//! board; committing it with [`Board::apply`] is the single mutation.
//! Apply a given diff to each board instance exactly once, or the
//! population count will drift.

use crate::board::Board;
use conway_core::{Cell, Coord};
use indexmap::IndexSet;

/// Coordinates whose state changes between two generations, in
/// row-major order.
pub type Diff = IndexSet<Coord>;

/// Live-neighbour count at which every cell's fate is sealed: with four
/// or more live neighbours a live cell dies and a dead cell stays dead.
const OVERCROWDED: u8 = 4;

/// The B3/S23 transition for one cell.
///
/// A live cell survives with 2 or 3 live neighbours; a dead cell is born
/// with exactly 3. Everything else is (or stays) dead.
pub fn next_state(cell: Cell, live_neighbours: u8) -> Cell {
    match (cell, live_neighbours) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

impl Board {
    /// Count live Moore neighbours of `point` (all 8, no early exit).
    ///
    /// Neighbour lookups follow the edge behavior: on an absorbing board,
    /// off-board neighbours count as dead.
    pub fn live_neighbour_count(&self, point: Coord) -> u8 {
        self.count_live_neighbours(point, u8::MAX)
    }

    /// Count live neighbours, stopping once `cap` is reached.
    fn count_live_neighbours(&self, point: Coord, cap: u8) -> u8 {
        let mut count = 0;
        for n in point.neighbors() {
            if self.is_alive(n) {
                count += 1;
                if count >= cap {
                    break;
                }
            }
        }
        count
    }

    /// Evaluate the rule for every cell and return the coordinates that flip.
    ///
    /// Neighbour counting stops at [`OVERCROWDED`]; any count at or above
    /// that threshold yields the same outcome as the full count.
    pub fn next_generation_diff(&self) -> Diff {
        let mut diff = Diff::new();
        for p in self.coords() {
            let cell = self.cells()[self.index(p)];
            let live = self.count_live_neighbours(p, OVERCROWDED);
            if next_state(cell, live) != cell {
                diff.insert(p);
            }
        }
        diff
    }

    /// The state of `point` in the next generation, from a full count.
    ///
    /// Returns `None` for off-board points.
    pub fn next_cell_at(&self, point: Coord) -> Option<Cell> {
        let p = self.resolve(point)?;
        let cell = self.cells()[self.index(p)];
        Some(next_state(cell, self.live_neighbour_count(p)))
    }

    /// Commit a diff by toggling each of its coordinates.
    ///
    /// Coordinates are wrapped first; off-board ones are skipped.
    pub fn apply(&mut self, diff: &Diff) {
        for &point in diff {
            if let Some(p) = self.resolve(point) {
                self.toggle_in_bounds(p);
            }
        }
    }

    /// Compute and apply one generation. Returns the applied diff.
    pub fn advance(&mut self) -> Diff {
        let diff = self.next_generation_diff();
        self.apply(&diff);
        diff
    }
}
