//! Deterministic linear-congruential generator for reproducible seeding.
//!
//! Not a cryptographic or statistically rigorous source. A given seed
//! produces the same sequence on every platform. [`Lcg`] implements
//! rand's core traits, so range and float sampling go through
//! [`rand::RngExt`].

use std::convert::Infallible;

use rand::rand_core::utils;
use rand::{SeedableRng, TryRng};

/// MMIX multiplier (Knuth).
const MULTIPLIER: u64 = 6364136223846793005;
/// MMIX increment (Knuth).
const INCREMENT: u64 = 1442695040888963407;

/// A 64-bit linear-congruential generator (`state = state * a + c mod 2^64`).
///
/// Full period 2^64. The low bits of an LCG have short periods, so
/// 32-bit outputs are taken from the high half of each step.
///
/// # Example
///
/// ```
/// use conway_core::Lcg;
/// use rand::RngExt;
///
/// let mut a = Lcg::new(7);
/// let mut b = Lcg::new(7);
/// assert_eq!(a.random_range(0..100u32), b.random_range(0..100u32));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current internal state. Feeding it back to [`Lcg::new`] resumes
    /// the sequence.
    pub fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }
}

impl TryRng for Lcg {
    type Error = Infallible;

    #[inline]
    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Ok((self.step() >> 32) as u32)
    }

    #[inline]
    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Ok(self.step())
    }

    #[inline]
    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        utils::fill_bytes_via_next_word(dst, || self.try_next_u64())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// The state is the seed itself, matching [`Lcg::new`].
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
