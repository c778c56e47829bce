//! Core value types for the Conway life simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types every other crate in the workspace builds on:
//! lattice coordinates, the two-state cell, and the deterministic
//! generator used for reproducible board seeding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod rng;

pub use cell::Cell;
pub use coord::Coord;
pub use rng::Lcg;
