//! Dense row-major cell grid with incremental population tracking.

use crate::edge::{self, EdgeBehavior};
use conway_core::{Cell, Coord};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// Default board side length chosen by presentation layers.
pub const DEFAULT_SIZE: u32 = 32;
/// Smallest side length presentation layers should offer.
pub const MIN_SIZE: u32 = 8;
/// Largest side length presentation layers should offer.
pub const MAX_SIZE: u32 = 128;

/// A finite grid of [`Cell`]s addressed by [`Coord`].
///
/// Every in-bounds coordinate always has a cell; nothing outside the
/// bounds is stored. `population` is kept in step with the cells by
/// every mutation and is only recomputed by scanning on [`resize`].
///
/// Dimensions must be positive. This is a caller contract: the board
/// does not validate them outside of debug assertions.
///
/// [`resize`]: Board::resize
#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    population: usize,
    edge: EdgeBehavior,
}

impl Board {
    /// An all-dead wrapping board of `width * height` cells.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_edge(width, height, EdgeBehavior::default())
    }

    /// An all-dead board with an explicit edge behavior.
    pub fn with_edge(width: u32, height: u32, edge: EdgeBehavior) -> Self {
        debug_assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; (width as usize) * (height as usize)],
            population: 0,
            edge,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Edge behavior.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Change the edge behavior. Cell contents are untouched.
    pub fn set_edge(&mut self, edge: EdgeBehavior) {
        self.edge = edge;
    }

    /// Whether out-of-range coordinates wrap (toroidal topology).
    pub fn is_infinite(&self) -> bool {
        self.edge.is_infinite()
    }

    /// Switch between wrapping and absorbing edges.
    pub fn set_infinite(&mut self, infinite: bool) {
        self.edge = EdgeBehavior::from_infinite(infinite);
    }

    /// Reduce `point` onto the torus when wrapping; identity otherwise.
    ///
    /// On a wrapping board the result is always in bounds and
    /// `wrap(wrap(p)) == wrap(p)`.
    pub fn wrap(&self, point: Coord) -> Coord {
        match self.edge {
            EdgeBehavior::Absorb => point,
            EdgeBehavior::Wrap => Coord::new(
                point.x.rem_euclid(self.width as i32),
                point.y.rem_euclid(self.height as i32),
            ),
        }
    }

    /// `true` iff the raw (unwrapped) point lies inside the board.
    pub fn contains(&self, point: Coord) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Wrap `point` and return it if it lands on the board.
    pub fn resolve(&self, point: Coord) -> Option<Coord> {
        let p = self.wrap(point);
        self.contains(p).then_some(p)
    }

    /// The cell at `point` after wrapping, or `None` if it is off the board.
    pub fn cell_at(&self, point: Coord) -> Option<Cell> {
        self.resolve(point).map(|p| self.cells[self.index(p)])
    }

    /// `true` iff `point` resolves to a live cell.
    pub fn is_alive(&self, point: Coord) -> bool {
        self.cell_at(point).is_some_and(Cell::is_alive)
    }

    /// Store `cell` at `point` (wrapped). Off-board points are ignored.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_cell(&mut self, cell: Cell, point: Coord) -> bool {
        let Some(p) = self.resolve(point) else {
            return false;
        };
        let idx = self.index(p);
        let old = std::mem::replace(&mut self.cells[idx], cell);
        if old == cell {
            return false;
        }
        self.bump_population(cell);
        true
    }

    /// Flip the cell at `point` (wrapped). Off-board points are ignored.
    ///
    /// Returns the new value, or `None` if nothing was toggled.
    pub fn toggle_cell(&mut self, point: Coord) -> Option<Cell> {
        let p = self.resolve(point)?;
        Some(self.toggle_in_bounds(p))
    }

    /// Reset every cell to dead. Dimensions and edge are kept.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.population = 0;
    }

    /// Change the dimensions, keeping cells in the overlapping region.
    ///
    /// Cells that fall outside the new bounds are discarded; new territory
    /// is dead. Population is recomputed exactly. No-op if unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        debug_assert!(width > 0 && height > 0, "board dimensions must be positive");
        let mut cells = vec![Cell::Dead; (width as usize) * (height as usize)];
        let keep_w = self.width.min(width) as usize;
        let keep_h = self.height.min(height) as usize;
        for y in 0..keep_h {
            let src = y * self.width as usize;
            let dst = y * width as usize;
            cells[dst..dst + keep_w].copy_from_slice(&self.cells[src..src + keep_w]);
        }
        self.width = width;
        self.height = height;
        self.cells = cells;
        self.population = self.cells.iter().filter(|c| c.is_alive()).count();
    }

    /// Moore neighbours of `point`, resolved against the edges.
    ///
    /// A wrapping board always yields 8 (possibly repeated on tiny boards);
    /// an absorbing board omits off-board points, so corners have 3.
    pub fn neighbours(&self, point: Coord) -> SmallVec<[Coord; 8]> {
        point
            .neighbors()
            .into_iter()
            .filter_map(|n| {
                let x = edge::resolve_axis(n.x, self.width, self.edge)?;
                let y = edge::resolve_axis(n.y, self.height, self.edge)?;
                Some(Coord::new(x, y))
            })
            .collect()
    }

    /// All in-bounds coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let w = self.width as i32;
        let h = self.height as i32;
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord::new(x, y)))
    }

    /// Coordinates of all live cells, in row-major order.
    pub fn live_cells(&self) -> IndexSet<Coord> {
        self.coords().filter(|&p| self.cells[self.index(p)].is_alive()).collect()
    }

    /// Row-major view of the raw cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major index of an in-bounds point.
    #[inline]
    pub(crate) fn index(&self, p: Coord) -> usize {
        debug_assert!(self.contains(p));
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// Flip an in-bounds point and adjust population.
    pub(crate) fn toggle_in_bounds(&mut self, p: Coord) -> Cell {
        let idx = self.index(p);
        let cell = self.cells[idx].toggled();
        self.cells[idx] = cell;
        self.bump_population(cell);
        cell
    }

    #[inline]
    fn bump_population(&mut self, now: Cell) {
        match now {
            Cell::Alive => self.population += 1,
            Cell::Dead => self.population -= 1,
        }
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
            population: self.population,
            edge: self.edge,
        }
    }

    /// Reuses the cell allocation, which matters for double buffering.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
        self.population = source.population;
        self.edge = source.edge;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}
