//! Error types for loan calculations.

use thiserror::Error;

/// Errors raised while validating or computing a loan schedule.
///
/// Input variants describe a caller mistake; [`LoanError::NumericalFailure`]
/// means the arithmetic itself broke down (overflow to infinity or NaN).
///
/// # Examples
/// ```
/// use loan_core::types::LoanError;
///
/// let err = LoanError::InvalidPrincipal(-5.0);
/// assert_eq!(format!("{}", err), "Invalid principal: -5 (must be a positive finite amount)");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoanError {
    /// Principal is zero, negative or not finite.
    #[error("Invalid principal: {0} (must be a positive finite amount)")]
    InvalidPrincipal(f64),

    /// Term is zero, negative or not finite.
    #[error("Invalid term: {0} years (must be a positive finite number)")]
    InvalidTerm(f64),

    /// Term rounds to zero monthly periods.
    #[error("Term of {term_years} years yields no monthly periods")]
    NoPeriods {
        /// The requested term in years.
        term_years: f64,
    },

    /// Term exceeds the longest supported schedule.
    #[error("Term of {term_years} years exceeds the maximum of {max_periods} monthly periods")]
    TermTooLong {
        /// The requested term in years.
        term_years: f64,
        /// The supported maximum number of periods.
        max_periods: usize,
    },

    /// Interest type string is not recognised.
    #[error("Unknown interest type: {0} (expected \"fijo\" or \"variable\")")]
    UnknownInterestType(String),

    /// Payment day outside the supported calendar range.
    #[error("Invalid payment day: {0} (must be between 1 and 28)")]
    InvalidPaymentDay(u32),

    /// Computation produced a non-finite value.
    #[error("Numerical failure: {0}")]
    NumericalFailure(String),
}

impl LoanError {
    /// Returns true if the error stems from caller input rather than the
    /// computation itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, LoanError::NumericalFailure(_))
    }
}
