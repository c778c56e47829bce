//! Board storage and rule evaluation for the Conway life simulator.
//!
//! The [`Board`] owns a dense grid of cells, resolves coordinates
//! against its [`EdgeBehavior`] (toroidal wrap or absorbing edges),
//! keeps an incremental population count, and evaluates rule B3/S23
//! into a minimal [`Diff`] of the cells that change.
//!
//! # Example
//!
//! ```
//! use conway_board::{Board, EdgeBehavior};
//! use conway_core::Coord;
//!
//! let mut board = Board::parse(".....\n.OOO.\n.....\n", EdgeBehavior::Absorb).unwrap();
//! let diff = board.next_generation_diff();
//! assert_eq!(diff.len(), 4);
//! board.apply(&diff);
//! assert!(board.is_alive(Coord::new(2, 0)));
//! assert_eq!(board.population(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod edge;
pub mod error;
pub mod random;
pub mod render;
pub mod rule;

pub use board::{Board, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use edge::EdgeBehavior;
pub use error::ParseBoardError;
pub use random::{clamp_density, MAX_DENSITY};
pub use rule::{next_state, Diff};
