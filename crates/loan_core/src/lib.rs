//! # loan_core: Amortization Kernel
//!
//! Pure amortization math for the loan service:
//! - Loan request and result types (`types`)
//! - Fixed-rate and hybrid variable-rate calculators (`amortization`)
//! - Injectable random source for variable rate shocks (`rng`)
//!
//! The crate performs no I/O. Every calculation is a single pass over the
//! monthly periods of the loan, threading only the running balance.
//!
//! ## Usage Examples
//!
//! ```rust
//! use loan_core::amortization::calculate;
//! use loan_core::rng::LoanRng;
//! use loan_core::types::{InterestType, LoanRequest};
//!
//! let request = LoanRequest::new(100_000.0, 1.0, InterestType::Fixed).unwrap();
//! let mut rng = LoanRng::from_seed(42);
//! let result = calculate(&request, &mut rng).unwrap();
//!
//! assert_eq!(result.amortization_table.len(), 12);
//! assert_eq!(result.rate_type, "Fixed (16%)");
//! assert_eq!(result.amortization_table.last().unwrap().ending_balance, 0.0);
//! ```

#![deny(missing_docs)]

pub mod amortization;
pub mod rng;
pub mod types;
