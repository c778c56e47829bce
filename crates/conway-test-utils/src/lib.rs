//! Test utilities for Conway development.
//!
//! Provides [`board_from_rows`] for building boards from ASCII art,
//! [`live_set`] for order-independent comparisons, and the well-known
//! [`fixtures`] patterns.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use conway_board::{Board, EdgeBehavior};
use conway_core::Coord;

pub use fixtures::Pattern;

/// Build a board from rows of ASCII art (`O`/`#`/`*` alive, anything
/// else dead). All rows must have the same width.
///
/// # Panics
///
/// Panics if `rows` is empty or ragged.
pub fn board_from_rows(rows: &[&str], edge: EdgeBehavior) -> Board {
    let text = rows.join("\n");
    match Board::parse(&text, edge) {
        Ok(board) => board,
        Err(e) => panic!("bad board fixture: {e}"),
    }
}

/// Live coordinates of `board`, in row-major order.
pub fn live_set(board: &Board) -> Vec<Coord> {
    board.live_cells().into_iter().collect()
}

/// Live coordinates given as `(x, y)` pairs, sorted row-major.
pub fn coords(points: &[(i32, i32)]) -> Vec<Coord> {
    let mut out: Vec<Coord> = points.iter().map(|&p| Coord::from(p)).collect();
    out.sort();
    out
}

/// An empty board of the given size.
pub fn empty_board(width: u32, height: u32, edge: EdgeBehavior) -> Board {
    Board::with_edge(width, height, edge)
}
