//! Integer lattice points used both as grid addresses and displacements.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A point on the 2D integer lattice.
///
/// `x` grows to the right (column), `y` grows downward (row). A `Coord`
/// carries no notion of bounds: it may be negative or lie outside any
/// board, and resolving it against a board's edges is the board's job.
///
/// Ordering is row-major (`y` first, then `x`), which matches the order
/// boards iterate their cells in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// The origin / zero displacement.
    pub const ZERO: Coord = Coord::new(0, 0);

    /// Up one row.
    pub const N: Coord = Coord::new(0, -1);
    /// Up one row, right one column.
    pub const NE: Coord = Coord::new(1, -1);
    /// Right one column.
    pub const E: Coord = Coord::new(1, 0);
    /// Down one row, right one column.
    pub const SE: Coord = Coord::new(1, 1);
    /// Down one row.
    pub const S: Coord = Coord::new(0, 1);
    /// Down one row, left one column.
    pub const SW: Coord = Coord::new(-1, 1);
    /// Left one column.
    pub const W: Coord = Coord::new(-1, 0);
    /// Up one row, left one column.
    pub const NW: Coord = Coord::new(-1, -1);

    /// The eight unit offsets of the Moore neighbourhood, clockwise from N.
    pub const MOORE: [Coord; 8] = [
        Coord::N,
        Coord::NE,
        Coord::E,
        Coord::SE,
        Coord::S,
        Coord::SW,
        Coord::W,
        Coord::NW,
    ];

    /// Construct a point from its column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight Moore neighbours of this point.
    ///
    /// The offsets are distinct, so the result never contains duplicates.
    /// Points may be negative or out of any board's range.
    pub fn neighbors(self) -> [Coord; 8] {
        Self::MOORE.map(|offset| self + offset)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Componentwise (Hadamard) product.
impl Mul for Coord {
    type Output = Coord;

    fn mul(self, rhs: Coord) -> Coord {
        Coord::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, rhs: Coord) {
        *self = *self + rhs;
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, rhs: Coord) {
        *self = *self - rhs;
    }
}
