//! Annuity arithmetic shared by both calculators.

use crate::types::LoanError;

/// Level payment that amortises `principal` over `periods` at `monthly_rate`.
///
/// - `periods == 0` yields `0.0`
/// - `monthly_rate == 0` yields the straight-line `principal / periods`
///
/// # Examples
///
/// ```
/// use loan_core::amortization::annuity_payment;
///
/// let payment = annuity_payment(100_000.0, 0.16 / 12.0, 12);
/// assert!((payment - 9073.09).abs() < 0.01);
///
/// assert_eq!(annuity_payment(1200.0, 0.0, 12), 100.0);
/// assert_eq!(annuity_payment(1200.0, 0.01, 0), 0.0);
/// ```
pub fn annuity_payment(principal: f64, monthly_rate: f64, periods: usize) -> f64 {
    if periods == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return principal / periods as f64;
    }
    let factor = (1.0 + monthly_rate).powi(periods as i32);
    principal * monthly_rate * factor / (factor - 1.0)
}

/// Formats a percentage for rate labels: at most two decimals, no trailing
/// zeros.
pub(crate) fn format_percent(percent: f64) -> String {
    let text = format!("{:.2}", percent);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Rejects non-finite intermediate values.
#[inline]
pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<f64, LoanError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoanError::NumericalFailure(format!("{} is not finite", what)))
    }
}
