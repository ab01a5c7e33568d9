//! Pseudo-random generator wrapper for rate shocks.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::RateShockSource;

/// Seeded pseudo-random source backed by `rand::rngs::StdRng`.
///
/// The seed is retained so a surprising schedule can be reproduced from logs.
///
/// # Examples
///
/// ```rust
/// use loan_core::rng::{LoanRng, RateShockSource};
///
/// let mut rng1 = LoanRng::from_seed(12345);
/// let mut rng2 = LoanRng::from_seed(12345);
///
/// assert_eq!(rng1.next_unit(), rng2.next_unit());
/// assert_eq!(rng1.seed(), 12345);
/// ```
#[derive(Debug, Clone)]
pub struct LoanRng {
    inner: StdRng,
    seed: u64,
}

impl LoanRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator with a seed drawn from operating system entropy.
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.next_u64();
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RateShockSource for LoanRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.inner.gen()
    }
}
