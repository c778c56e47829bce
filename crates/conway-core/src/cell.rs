//! Two-state cell value.

use rand::{Rng, RngExt};

/// State of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Cell {
    /// Unpopulated.
    #[default]
    Dead = 0,
    /// Populated.
    Alive = 1,
}

impl Cell {
    /// Both states, in discriminant order.
    pub const ALL: [Cell; 2] = [Cell::Dead, Cell::Alive];

    /// Map an arbitrary integer onto a cell by `|raw| mod 2`.
    ///
    /// Intended for reconstructing cells from untrusted numeric input;
    /// every input maps to a valid state.
    pub fn from_raw(raw: i64) -> Self {
        match raw.unsigned_abs() % Self::ALL.len() as u64 {
            0 => Cell::Dead,
            _ => Cell::Alive,
        }
    }

    /// Draw a cell that is Alive with probability `live_chance`.
    ///
    /// Chances outside `[0, 1]` saturate to always-dead or always-alive.
    pub fn random<R: Rng + ?Sized>(live_chance: f64, rng: &mut R) -> Self {
        if rng.random::<f64>() < live_chance {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    /// `true` for [`Cell::Alive`].
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// `true` for [`Cell::Dead`].
    pub fn is_dead(self) -> bool {
        self == Cell::Dead
    }

    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Flip this cell in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Lcg;
    use proptest::prelude::*;

    #[test]
    fn toggle_flips_both_ways() {
        let mut c = Cell::Dead;
        c.toggle();
        assert_eq!(c, Cell::Alive);
        c.toggle();
        assert_eq!(c, Cell::Dead);
        assert_eq!(Cell::Alive.toggled(), Cell::Dead);
    }

    #[test]
    fn default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(Cell::default().is_dead());
    }

    #[test]
    fn from_raw_maps_valid_values_directly() {
        assert_eq!(Cell::from_raw(0), Cell::Dead);
        assert_eq!(Cell::from_raw(1), Cell::Alive);
    }

    #[test]
    fn from_raw_handles_out_of_range_values() {
        assert_eq!(Cell::from_raw(2), Cell::Dead);
        assert_eq!(Cell::from_raw(7), Cell::Alive);
        assert_eq!(Cell::from_raw(-3), Cell::Alive);
        assert_eq!(Cell::from_raw(i64::MIN), Cell::Dead);
    }

    #[test]
    fn random_respects_extreme_chances() {
        let mut rng = Lcg::new(11);
        for _ in 0..100 {
            assert_eq!(Cell::random(0.0, &mut rng), Cell::Dead);
            assert_eq!(Cell::random(1.0, &mut rng), Cell::Alive);
            assert_eq!(Cell::random(-2.0, &mut rng), Cell::Dead);
            assert_eq!(Cell::random(3.0, &mut rng), Cell::Alive);
        }
    }

    #[test]
    fn random_is_reproducible_from_seed() {
        let draw = |seed| {
            let mut rng = Lcg::new(seed);
            (0..64).map(|_| Cell::random(0.5, &mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(draw(4), draw(4));
        assert!(draw(4).contains(&Cell::Alive));
        assert!(draw(4).contains(&Cell::Dead));
    }

    #[test]
    fn bool_and_u8_conversions() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert_eq!(u8::from(Cell::Alive), 1);
        assert_eq!(u8::from(Cell::Dead), 0);
    }

    proptest! {
        #[test]
        fn from_raw_is_parity(raw in any::<i64>()) {
            let expected = if raw.unsigned_abs() % 2 == 1 { Cell::Alive } else { Cell::Dead };
            prop_assert_eq!(Cell::from_raw(raw), expected);
        }
    }
}
