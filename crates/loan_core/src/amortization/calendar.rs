//! Payment calendar for amortization tables.

use chrono::{Datelike, Months, NaiveDate};

use crate::types::{LoanError, LoanResult};

/// Latest day of month accepted as a payment day, valid in every month.
pub const MAX_PAYMENT_DAY: u32 = 28;

/// Date of the payment for `period`: the month of `start` advanced by
/// `period` months, on `payment_day`.
///
/// # Errors
///
/// Returns [`LoanError::InvalidPaymentDay`] unless `1 <= payment_day <= 28`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use loan_core::amortization::payment_date;
///
/// let start = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
/// assert_eq!(
///     payment_date(start, 6, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
/// );
/// ```
pub fn payment_date(start: NaiveDate, payment_day: u32, period: u32) -> Result<NaiveDate, LoanError> {
    if !(1..=MAX_PAYMENT_DAY).contains(&payment_day) {
        return Err(LoanError::InvalidPaymentDay(payment_day));
    }

    start
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(period)))
        .and_then(|month| month.with_day(payment_day))
        .ok_or_else(|| {
            LoanError::NumericalFailure(format!("payment date for period {} is out of range", period))
        })
}

/// Returns a copy of `result` whose rows carry their payment dates.
///
/// # Errors
///
/// Returns [`LoanError::InvalidPaymentDay`] for a day outside `1..=28`.
pub fn assign_payment_dates(
    result: LoanResult,
    start: NaiveDate,
    payment_day: u32,
) -> Result<LoanResult, LoanError> {
    let amortization_table = result
        .amortization_table
        .into_iter()
        .map(|mut row| -> Result<_, LoanError> {
            row.payment_date = Some(payment_date(start, payment_day, row.period)?);
            Ok(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LoanResult {
        amortization_table,
        ..result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::calculate_fixed;
    use crate::types::{InterestType, LoanRequest};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_payment_falls_in_following_month() {
        assert_eq!(payment_date(date(2024, 1, 31), 15, 1).unwrap(), date(2024, 2, 15));
        assert_eq!(payment_date(date(2024, 1, 31), 28, 1).unwrap(), date(2024, 2, 28));
    }

    #[test]
    fn test_dates_cross_year_boundary() {
        assert_eq!(payment_date(date(2024, 12, 5), 1, 1).unwrap(), date(2025, 1, 1));
        assert_eq!(payment_date(date(2024, 3, 10), 6, 24).unwrap(), date(2026, 3, 6));
    }

    #[test]
    fn test_payment_day_bounds() {
        assert_eq!(
            payment_date(date(2024, 1, 1), 0, 1),
            Err(LoanError::InvalidPaymentDay(0))
        );
        assert_eq!(
            payment_date(date(2024, 1, 1), 29, 1),
            Err(LoanError::InvalidPaymentDay(29))
        );
    }

    #[test]
    fn test_assign_payment_dates_keeps_amounts() {
        let request = LoanRequest::new(12_000.0, 1.0, InterestType::Fixed).unwrap();
        let result = calculate_fixed(&request).unwrap();
        let dated = assign_payment_dates(result.clone(), date(2024, 6, 18), 6).unwrap();

        assert_eq!(dated.total_payment, result.total_payment);
        assert_eq!(dated.rate_type, result.rate_type);
        assert_eq!(dated.amortization_table[0].payment_date, Some(date(2024, 7, 6)));
        assert_eq!(dated.amortization_table[11].payment_date, Some(date(2025, 6, 6)));
        assert_eq!(
            dated.amortization_table[0].starting_balance,
            result.amortization_table[0].starting_balance
        );
    }
}
