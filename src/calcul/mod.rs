//! Rounding arithmetic used to total payments.
mod payment;

pub use payment::get_payment_token_from_api;
pub use payment::send_payment_request_to_api;
pub use payment::PaymentToken;

use std::fmt;
use std::str::FromStr;

use crate::domain::CalculationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Operation {
    SUM,
    SUBTRACT,
    DIVIDE,
}

impl FromStr for Operation {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUM" => Ok(Operation::SUM),
            "SUBTRACT" => Ok(Operation::SUBTRACT),
            "DIVIDE" => Ok(Operation::DIVIDE),
            other => Err(CalculationError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::SUM => "SUM",
            Operation::SUBTRACT => "SUBTRACT",
            Operation::DIVIDE => "DIVIDE",
        };
        f.write_str(name)
    }
}

/// Rounds half-way values toward positive infinity, so `-1.5` becomes `-1`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds both operands to the nearest integer, then applies `operation`.
pub fn calculate_number(operation: Operation, a: f64, b: f64) -> Result<f64, CalculationError> {
    let (a, b) = (round_half_up(a), round_half_up(b));
    match operation {
        Operation::SUM => Ok(a + b),
        Operation::SUBTRACT => Ok(a - b),
        Operation::DIVIDE if b == 0.0 => Err(CalculationError::DivisionByZero),
        Operation::DIVIDE => Ok(a / b),
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Calculator {
    fn calculate_number(&self, operation: Operation, a: f64, b: f64)
        -> Result<f64, CalculationError>;
}

/// [`Calculator`] backed by [`calculate_number`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Utils;

impl Calculator for Utils {
    fn calculate_number(
        &self,
        operation: Operation,
        a: f64,
        b: f64,
    ) -> Result<f64, CalculationError> {
        calculate_number(operation, a, b)
    }
}
