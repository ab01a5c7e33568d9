//! Deterministic substitute for [`LoanRng`](super::LoanRng).

use super::RateShockSource;

/// Cycles through a fixed list of unit values.
///
/// Values are clamped into `[0, 1)` on construction. An empty list behaves
/// as a constant zero source.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSequence {
    values: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    /// Creates a sequence from preset values.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 1.0 - f64::EPSILON) } else { 0.0 })
            .collect();
        Self { values, position: 0 }
    }

    /// Creates a sequence that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RateShockSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.position += 1;
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
