//! Parsing and validation of calculate requests
//!
//! The public API accepts numbers either as JSON numbers or as numeric
//! strings. This module turns the raw body into a [`CalculateRequest`] with
//! typed, validated fields before any calculator runs.

use chrono::NaiveDate;
use loan_core::amortization::MAX_PAYMENT_DAY;
use loan_core::types::{InterestType, LoanError, LoanRequest, DEFAULT_FIXED_PERIOD_MONTHS};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::error::ApiError;

/// Body of `POST /api/calculate` before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalculateRequest {
    loan_amount: Option<Value>,
    loan_term_years: Option<Value>,
    interest_type: Option<Value>,
    fixed_period_months: Option<Value>,
    payment_day: Option<Value>,
    start_date: Option<Value>,
}

/// Optional payment calendar requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentCalendar {
    /// Date the loan starts; the first payment falls in the following month
    pub start: NaiveDate,
    /// Day of the month payments are due, 1 to 28
    pub payment_day: u32,
}

/// Validated calculate request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculateRequest {
    /// Loan terms handed to the calculator
    pub loan: LoanRequest,
    /// Present only when `paymentDay` was sent
    pub calendar: Option<PaymentCalendar>,
}

/// Parse and validate a request body
///
/// `today` is the default calendar start when `startDate` is omitted.
pub fn parse_calculate_request(
    body: &[u8],
    max_term_years: f64,
    today: NaiveDate,
) -> Result<CalculateRequest, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::InvalidRequest(format!("body is not valid JSON: {}", e)))?;
    if !value.is_object() {
        return Err(ApiError::InvalidRequest(
            "body must be a JSON object".to_string(),
        ));
    }
    let raw: RawCalculateRequest = serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    let principal = parse_number("loanAmount", required("loanAmount", raw.loan_amount)?)?;
    let term_years = parse_number("loanTermYears", required("loanTermYears", raw.loan_term_years)?)?;
    let interest_type = parse_interest_type(required("interestType", raw.interest_type)?)?;

    if term_years > max_term_years {
        return Err(ApiError::InvalidRequest(format!(
            "loanTermYears must not exceed {} years",
            max_term_years
        )));
    }

    let fixed_period_months = match raw.fixed_period_months {
        Some(value) => parse_whole("fixedPeriodMonths", value)?,
        None => DEFAULT_FIXED_PERIOD_MONTHS,
    };

    let loan = LoanRequest::new(principal, term_years, interest_type)?
        .with_fixed_period_months(fixed_period_months);

    let start = match raw.start_date {
        Some(value) => parse_date("startDate", value)?,
        None => today,
    };
    let calendar = match raw.payment_day {
        Some(value) => {
            let payment_day = parse_whole("paymentDay", value)?;
            if !(1..=MAX_PAYMENT_DAY).contains(&payment_day) {
                return Err(LoanError::InvalidPaymentDay(payment_day).into());
            }
            Some(PaymentCalendar { start, payment_day })
        }
        None => None,
    };

    Ok(CalculateRequest { loan, calendar })
}

fn required(field: &str, value: Option<Value>) -> Result<Value, ApiError> {
    value.ok_or_else(|| ApiError::InvalidRequest(format!("{} is required", field)))
}

fn parse_number(field: &str, value: Value) -> Result<f64, ApiError> {
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ApiError::InvalidRequest(format!(
            "{} must be numeric, got {}",
            field, value
        ))),
    }
}

fn parse_whole(field: &str, value: Value) -> Result<u32, ApiError> {
    let number = parse_number(field, value)?;
    if number < 0.0 || number.fract() != 0.0 || number > u32::MAX as f64 {
        return Err(ApiError::InvalidRequest(format!(
            "{} must be a non-negative whole number, got {}",
            field, number
        )));
    }
    Ok(number as u32)
}

fn parse_interest_type(value: Value) -> Result<InterestType, ApiError> {
    match value {
        Value::String(s) => Ok(InterestType::from_str(&s)?),
        other => Err(ApiError::InvalidRequest(format!(
            "interestType must be a string, got {}",
            other
        ))),
    }
}

fn parse_date(field: &str, value: Value) -> Result<NaiveDate, ApiError> {
    match &value {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
            ApiError::InvalidRequest(format!("{} must be a YYYY-MM-DD date: {}", field, e))
        }),
        _ => Err(ApiError::InvalidRequest(format!(
            "{} must be a YYYY-MM-DD date, got {}",
            field, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn parse(body: Value) -> Result<CalculateRequest, ApiError> {
        parse_calculate_request(body.to_string().as_bytes(), 50.0, today())
    }

    fn message(result: Result<CalculateRequest, ApiError>) -> String {
        match result {
            Err(ApiError::InvalidRequest(msg)) => msg,
            other => panic!("expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        let request = parse(json!({
            "loanAmount": "100000",
            "loanTermYears": 1,
            "interestType": "fijo"
        }))
        .unwrap();

        assert_eq!(request.loan.principal(), 100_000.0);
        assert_eq!(request.loan.term_years(), 1.0);
        assert_eq!(request.loan.interest_type(), InterestType::Fixed);
        assert_eq!(request.loan.fixed_period_months(), DEFAULT_FIXED_PERIOD_MONTHS);
        assert!(request.calendar.is_none());

        let request = parse(json!({
            "loanAmount": 2500.5,
            "loanTermYears": " 2.5 ",
            "interestType": "variable",
            "fixedPeriodMonths": "6"
        }))
        .unwrap();
        assert_eq!(request.loan.principal(), 2500.5);
        assert_eq!(request.loan.periods(), 30);
        assert_eq!(request.loan.fixed_period_months(), 6);
    }

    #[test]
    fn test_rejects_non_numeric_amount() {
        let msg = message(parse(json!({
            "loanAmount": "abc",
            "loanTermYears": 1,
            "interestType": "fijo"
        })));
        assert!(msg.contains("loanAmount must be numeric"));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let msg = message(parse(json!({ "loanTermYears": 1, "interestType": "fijo" })));
        assert_eq!(msg, "loanAmount is required");

        let msg = message(parse(json!({ "loanAmount": 1000, "loanTermYears": null, "interestType": "fijo" })));
        assert_eq!(msg, "loanTermYears is required");

        let msg = message(parse(json!({ "loanAmount": 1000, "loanTermYears": 1 })));
        assert_eq!(msg, "interestType is required");
    }

    #[test]
    fn test_rejects_unknown_interest_type() {
        let msg = message(parse(json!({
            "loanAmount": 1000,
            "loanTermYears": 1,
            "interestType": "bogus"
        })));
        assert!(msg.contains("Unknown interest type: bogus"));

        let msg = message(parse(json!({
            "loanAmount": 1000,
            "loanTermYears": 1,
            "interestType": 3
        })));
        assert!(msg.contains("interestType must be a string"));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let msg = message(parse(json!({ "loanAmount": -5, "loanTermYears": 1, "interestType": "fijo" })));
        assert!(msg.contains("Invalid principal"));

        let msg = message(parse(json!({ "loanAmount": 5000, "loanTermYears": 0, "interestType": "fijo" })));
        assert!(msg.contains("Invalid term"));

        let msg = message(parse(json!({ "loanAmount": 5000, "loanTermYears": 51, "interestType": "fijo" })));
        assert!(msg.contains("must not exceed 50 years"));

        let msg = message(parse(json!({ "loanAmount": "NaN", "loanTermYears": 1, "interestType": "fijo" })));
        assert!(msg.contains("must be numeric"));
    }

    #[test]
    fn test_rejects_fractional_or_negative_fixed_period() {
        for months in [json!(-1), json!(2.5), json!("x")] {
            let result = parse(json!({
                "loanAmount": 1000,
                "loanTermYears": 1,
                "interestType": "variable",
                "fixedPeriodMonths": months
            }));
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_payment_calendar_fields() {
        let request = parse(json!({
            "loanAmount": 1000,
            "loanTermYears": 1,
            "interestType": "fijo",
            "paymentDay": 6,
            "startDate": "2024-01-15"
        }))
        .unwrap();
        assert_eq!(
            request.calendar,
            Some(PaymentCalendar {
                start: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                payment_day: 6,
            })
        );

        let request = parse(json!({
            "loanAmount": 1000,
            "loanTermYears": 1,
            "interestType": "fijo",
            "paymentDay": "10"
        }))
        .unwrap();
        assert_eq!(request.calendar.unwrap().start, today());

        let result = parse(json!({
            "loanAmount": 1000,
            "loanTermYears": 1,
            "interestType": "fijo",
            "paymentDay": 6,
            "startDate": "15/01/2024"
        }));
        assert!(message(result).contains("startDate must be a YYYY-MM-DD date"));

        let result = parse(json!({
            "loanAmount": 1000,
            "loanTermYears": 1,
            "interestType": "fijo",
            "paymentDay": 31
        }));
        assert!(message(result).contains("Invalid payment day: 31"));
    }

    #[test]
    fn test_rejects_malformed_bodies() {
        let msg = message(parse_calculate_request(b"{not json", 50.0, today()));
        assert!(msg.starts_with("body is not valid JSON"));

        let msg = message(parse_calculate_request(b"[1, 2, \"fijo\"]", 50.0, today()));
        assert_eq!(msg, "body must be a JSON object");
    }
}
