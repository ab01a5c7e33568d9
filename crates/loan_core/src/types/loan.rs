//! Loan request types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoanError;

/// Length of the initial fixed-rate phase when the caller does not supply one.
pub const DEFAULT_FIXED_PERIOD_MONTHS: u32 = 12;

/// Longest schedule the calculators will build (100 years of months).
pub const MAX_PERIODS: usize = 1200;

/// Interest regime of a loan.
///
/// The wire names follow the public API: `"fijo"` for fixed and
/// `"variable"` for the hybrid variable-rate product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestType {
    /// Term-banded fixed annual rate.
    #[serde(rename = "fijo")]
    Fixed,
    /// Fixed initial phase followed by yearly stochastic rate increases.
    #[serde(rename = "variable")]
    Variable,
}

impl InterestType {
    /// Every supported interest type, in wire order.
    pub const ALL: [InterestType; 2] = [InterestType::Fixed, InterestType::Variable];

    /// Wire name of the interest type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestType::Fixed => "fijo",
            InterestType::Variable => "variable",
        }
    }
}

impl FromStr for InterestType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fijo" => Ok(InterestType::Fixed),
            "variable" => Ok(InterestType::Variable),
            other => Err(LoanError::UnknownInterestType(other.to_string())),
        }
    }
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of monthly periods in a term expressed in years.
///
/// Fractional months are rounded to the nearest whole period.
#[inline]
pub fn period_count(term_years: f64) -> usize {
    (term_years * 12.0).round() as usize
}

/// Validated input to the calculators.
///
/// Construction guarantees a positive finite principal and a term that
/// spans at least one monthly period.
///
/// # Examples
///
/// ```
/// use loan_core::types::{InterestType, LoanRequest};
///
/// let request = LoanRequest::new(50_000.0, 3.0, InterestType::Variable)
///     .unwrap()
///     .with_fixed_period_months(24);
///
/// assert_eq!(request.periods(), 36);
/// assert_eq!(request.fixed_period_months(), 24);
///
/// assert!(LoanRequest::new(0.0, 3.0, InterestType::Fixed).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanRequest {
    principal: f64,
    term_years: f64,
    interest_type: InterestType,
    fixed_period_months: u32,
}

impl LoanRequest {
    /// Creates a request with the default fixed period.
    ///
    /// # Errors
    ///
    /// - [`LoanError::InvalidPrincipal`] if `principal` is not positive and finite
    /// - [`LoanError::InvalidTerm`] if `term_years` is not positive and finite
    /// - [`LoanError::NoPeriods`] if the term rounds to zero months
    /// - [`LoanError::TermTooLong`] if the term exceeds [`MAX_PERIODS`] months
    pub fn new(
        principal: f64,
        term_years: f64,
        interest_type: InterestType,
    ) -> Result<Self, LoanError> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(LoanError::InvalidPrincipal(principal));
        }
        if !term_years.is_finite() || term_years <= 0.0 {
            return Err(LoanError::InvalidTerm(term_years));
        }
        let periods = period_count(term_years);
        if periods == 0 {
            return Err(LoanError::NoPeriods { term_years });
        }
        if periods > MAX_PERIODS {
            return Err(LoanError::TermTooLong {
                term_years,
                max_periods: MAX_PERIODS,
            });
        }

        Ok(Self {
            principal,
            term_years,
            interest_type,
            fixed_period_months: DEFAULT_FIXED_PERIOD_MONTHS,
        })
    }

    /// Sets the length of the initial fixed-rate phase in months.
    ///
    /// Only the variable-rate calculator reads this value. Lengths beyond the
    /// loan term are accepted and behave as a fully fixed schedule.
    pub fn with_fixed_period_months(mut self, months: u32) -> Self {
        self.fixed_period_months = months;
        self
    }

    /// Original amount owed.
    #[inline]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Term in years as requested.
    #[inline]
    pub fn term_years(&self) -> f64 {
        self.term_years
    }

    /// Interest regime.
    #[inline]
    pub fn interest_type(&self) -> InterestType {
        self.interest_type
    }

    /// Requested fixed-phase length in months.
    #[inline]
    pub fn fixed_period_months(&self) -> u32 {
        self.fixed_period_months
    }

    /// Number of monthly periods, `round(term_years * 12)`.
    #[inline]
    pub fn periods(&self) -> usize {
        period_count(self.term_years)
    }
}
