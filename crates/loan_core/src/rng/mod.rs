//! # Random Sources for Rate Shocks
//!
//! The variable-rate calculator draws uniform values to perturb the yearly
//! rate step and to lift payments that would otherwise decrease. The source
//! is injected through [`RateShockSource`] so callers choose between:
//!
//! - [`LoanRng`]: seeded or entropy-initialised wrapper over `rand::StdRng`
//! - [`FixedSequence`]: deterministic cycle of preset values for tests
//!
//! Calculators are generic over the source (static dispatch).
//!
//! ## Usage Example
//!
//! ```rust
//! use loan_core::rng::{FixedSequence, LoanRng, RateShockSource};
//!
//! let mut rng = LoanRng::from_seed(7);
//! let u = rng.next_unit();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut fixed = FixedSequence::new(vec![0.25, 0.75]);
//! assert_eq!(fixed.next_unit(), 0.25);
//! assert_eq!(fixed.next_unit(), 0.75);
//! assert_eq!(fixed.next_unit(), 0.25);
//! ```

mod prng;
mod sequence;

pub use prng::LoanRng;
pub use sequence::FixedSequence;

/// Source of uniform variates in `[0, 1)`.
pub trait RateShockSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform value in `[low, high)`.
    #[inline]
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }
}

impl<T: RateShockSource + ?Sized> RateShockSource for &mut T {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
