//! Error types for board operations.

use std::fmt;

/// Errors arising from parsing a textual board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The text contained no rows.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A dimension does not fit in `u32`.
    TooLarge {
        /// The offending dimension.
        value: usize,
    },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board text has no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has width {found}, expected {expected}"),
            Self::TooLarge { value } => write!(f, "board dimension {value} exceeds u32::MAX"),
        }
    }
}

impl std::error::Error for ParseBoardError {}
