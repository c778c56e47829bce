//! Conway: Game of Life boards and a background simulation controller.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Conway sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use conway::prelude::*;
//!
//! let config = EngineConfig {
//!     edge: EdgeBehavior::Absorb,
//!     ..EngineConfig::with_size(16, 16)
//! };
//! let engine = Engine::new(config).unwrap();
//!
//! // A blinker in the middle of the board.
//! for x in 6..9 {
//!     engine.set_cell(Cell::Alive, Coord::new(x, 8));
//! }
//! let metrics = engine.step();
//! assert_eq!(metrics.generation, 1);
//! assert_eq!(metrics.changed_cells, 4);
//! assert!(engine.cell_at(Coord::new(7, 7)).unwrap().is_alive());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `conway-core` | `Coord`, `Cell`, the seeded `Lcg` |
//! | [`board`] | `conway-board` | `Board`, edge behavior, rule evaluation, text rendering |
//! | [`engine`] | `conway-engine` | `Engine`, config, events, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, cell states, and the deterministic RNG (`conway-core`).
pub use conway_core as types;

/// Board storage and B3/S23 evaluation (`conway-board`).
///
/// [`board::Board`] is usable on its own for single-threaded stepping
/// via [`board::Board::advance`].
pub use conway_board as board;

/// The simulation controller (`conway-engine`).
///
/// [`engine::Engine`] owns a board and an optional tick thread.
pub use conway_engine as engine;

/// Common imports for typical Conway usage.
///
/// ```rust
/// use conway::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use conway_core::{Cell, Coord};

    // Board
    pub use conway_board::{Board, Diff, EdgeBehavior, ParseBoardError};

    // Engine
    pub use conway_engine::{
        ChangeCause, ConfigError, Engine, EngineConfig, EngineError, EngineEvent, EngineSnapshot,
        TickMetrics,
    };
}
