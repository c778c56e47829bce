//! Reproducible random board construction.

use crate::board::Board;
use crate::edge::EdgeBehavior;
use conway_core::{Cell, Coord, Lcg};
use rand::{Rng, RngExt};

/// Upper bound on the live fraction of a random board.
///
/// Sampling distinct cells gets slower as the board fills up; capping the
/// density keeps the expected number of rejected samples small.
pub const MAX_DENSITY: f64 = 0.9;

/// Clamp a requested density into `[0, MAX_DENSITY]`. NaN maps to 0.
pub fn clamp_density(density: f64) -> f64 {
    if density.is_nan() {
        return 0.0;
    }
    density.clamp(0.0, MAX_DENSITY)
}

/// Number of live cells a random board of this size and density gets.
pub fn target_population(width: u32, height: u32, density: f64) -> usize {
    let total = (width as usize) * (height as usize);
    (clamp_density(density) * total as f64).floor() as usize
}

impl Board {
    /// A wrapping board with `floor(density * width * height)` live cells
    /// placed by a generator seeded with `seed`.
    ///
    /// Identical arguments always produce identical boards.
    pub fn random(width: u32, height: u32, density: f64, seed: u64) -> Self {
        Self::random_with(width, height, density, &mut Lcg::new(seed))
    }

    /// Like [`Board::random`], drawing from a caller-owned generator.
    pub fn random_with(width: u32, height: u32, density: f64, rng: &mut Lcg) -> Self {
        let mut board = Board::with_edge(width, height, EdgeBehavior::default());
        board.scatter(density, rng);
        board
    }

    /// Bring this board up to the target population for `density` by
    /// marking randomly sampled dead cells alive.
    ///
    /// Existing live cells count toward the target and are never killed.
    pub fn scatter<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let target = target_population(self.width(), self.height(), density);
        while self.population() < target {
            let p = Coord::new(
                rng.random_range(0..self.width()) as i32,
                rng.random_range(0..self.height()) as i32,
            );
            if !self.is_alive(p) {
                self.set_cell(Cell::Alive, p);
            }
        }
    }
}
