//! Human-readable text rendering and parsing.
//!
//! One line per row, top to bottom, each terminated by `\n`.
//! [`ALIVE_GLYPH`] marks a live cell and [`DEAD_GLYPH`] a dead one.

use crate::board::Board;
use crate::edge::EdgeBehavior;
use crate::error::ParseBoardError;
use conway_core::{Cell, Coord};
use std::fmt;

/// Glyph for a live cell.
pub const ALIVE_GLYPH: char = 'O';
/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = '.';

impl Board {
    /// Render the whole grid as text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Parse a board from rows of glyphs.
    ///
    /// `O`, `#` and `*` are alive; any other character is dead. Blank
    /// lines are skipped and trailing `\r` is ignored, so the output of
    /// [`Board::render`] parses back to the same cells.
    pub fn parse(text: &str, edge: EdgeBehavior) -> Result<Board, ParseBoardError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();
        let first = rows.first().ok_or(ParseBoardError::Empty)?;
        let width = first.len();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != width {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    expected: width,
                    found: chars.len(),
                });
            }
        }
        let w = u32::try_from(width).map_err(|_| ParseBoardError::TooLarge { value: width })?;
        let h = u32::try_from(rows.len())
            .map_err(|_| ParseBoardError::TooLarge { value: rows.len() })?;

        let mut board = Board::with_edge(w, h, edge);
        for (y, chars) in rows.iter().enumerate() {
            for (x, &ch) in chars.iter().enumerate() {
                if matches!(ch, 'O' | '#' | '*') {
                    board.set_cell(Cell::Alive, Coord::new(x as i32, y as i32));
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells().chunks(self.width() as usize) {
            for cell in row {
                let glyph = if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_blinker() {
        let mut b = Board::with_edge(5, 3, EdgeBehavior::Absorb);
        for x in 1..4 {
            b.set_cell(Cell::Alive, Coord::new(x, 1));
        }
        assert_eq!(b.render(), ".....\n.OOO.\n.....\n");
    }

    #[test]
    fn render_is_newline_terminated_per_row() {
        let b = Board::new(3, 4);
        let s = b.render();
        assert_eq!(s.lines().count(), 4);
        assert!(s.ends_with('\n'));
        assert!(s.lines().all(|l| l.len() == 3));
    }

    #[test]
    fn parse_render_round_trip() {
        let b = Board::random(9, 6, 0.4, 21);
        let parsed = Board::parse(&b.render(), b.edge()).unwrap();
        assert_eq!(parsed, b);
    }

    #[test]
    fn parse_accepts_alternate_glyphs() {
        let b = Board::parse("#..\n.*.\n..O\n", EdgeBehavior::Absorb).unwrap();
        assert_eq!(b.population(), 3);
        assert!(b.is_alive(Coord::new(0, 0)));
        assert!(b.is_alive(Coord::new(1, 1)));
        assert!(b.is_alive(Coord::new(2, 2)));
        assert_eq!(b.edge(), EdgeBehavior::Absorb);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(
            Board::parse("\n\n", EdgeBehavior::Wrap),
            Err(ParseBoardError::Empty)
        );
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Board::parse("...\n..\n", EdgeBehavior::Wrap).unwrap_err();
        assert_eq!(
            err,
            ParseBoardError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "row 1 has width 2, expected 3");
    }
}
