//! Benchmark profiles for the Conway life simulator.
//!
//! - [`reference_board`]: 32x32 wrapping board at 30% density
//! - [`stress_board`]: 128x128 wrapping board, the largest selectable size
//! - [`engine_config`]: a seeded [`EngineConfig`] for either profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use conway_board::{Board, EdgeBehavior, DEFAULT_SIZE, MAX_SIZE};
use conway_engine::EngineConfig;

/// Live fraction used by every profile.
pub const PROFILE_DENSITY: f64 = 0.3;

/// A 32x32 wrapping board seeded for repeatable runs.
pub fn reference_board(seed: u64) -> Board {
    Board::random(DEFAULT_SIZE, DEFAULT_SIZE, PROFILE_DENSITY, seed)
}

/// A 128x128 wrapping board seeded for repeatable runs.
pub fn stress_board(seed: u64) -> Board {
    Board::random(MAX_SIZE, MAX_SIZE, PROFILE_DENSITY, seed)
}

/// Engine config for a `side` x `side` board at [`PROFILE_DENSITY`].
pub fn engine_config(side: u32, edge: EdgeBehavior, seed: u64) -> EngineConfig {
    EngineConfig {
        edge,
        initial_density: PROFILE_DENSITY,
        seed: Some(seed),
        ..EngineConfig::with_size(side, side)
    }
}
