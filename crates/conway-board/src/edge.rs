//! Board edge (boundary) topology.

/// How a board resolves coordinates that fall outside its bounds.
///
/// # Examples
///
/// ```
/// use conway_board::{Board, EdgeBehavior};
/// use conway_core::Coord;
///
/// // Wrap: the board is a torus, every point lands somewhere.
/// let torus = Board::with_edge(4, 4, EdgeBehavior::Wrap);
/// assert_eq!(torus.wrap(Coord::new(-1, 4)), Coord::new(3, 0));
/// assert_eq!(torus.neighbours(Coord::new(0, 0)).len(), 8);
///
/// // Absorb: out-of-range points are simply not on the board.
/// let finite = Board::with_edge(4, 4, EdgeBehavior::Absorb);
/// assert_eq!(finite.cell_at(Coord::new(-1, 0)), None);
/// assert_eq!(finite.neighbours(Coord::new(0, 0)).len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds points wrap to the opposite side (toroidal).
    #[default]
    Wrap,
    /// Out-of-bounds points are off the board: reads are absent, writes
    /// are dropped, and they count as dead neighbours.
    Absorb,
}

impl EdgeBehavior {
    /// The edge behavior for the "infinite" (wrapping) toggle.
    pub fn from_infinite(infinite: bool) -> Self {
        if infinite {
            EdgeBehavior::Wrap
        } else {
            EdgeBehavior::Absorb
        }
    }

    /// `true` for [`EdgeBehavior::Wrap`].
    pub fn is_infinite(self) -> bool {
        self == EdgeBehavior::Wrap
    }
}

/// Resolve a single axis value under the given edge behavior.
/// Returns `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n)),
    }
}
