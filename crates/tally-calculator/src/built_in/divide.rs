//! Operation for dividing one numeric value by another
//!
//! Division by zero is reported as [`CalcError::DivisionByZero`] instead of
//! producing an infinity or NaN.

use crate::error::CalcError;
use crate::operation::{Operation, OperationResult};

/// Operation for division
///
/// # Arguments
/// * `a` - Dividend
/// * `b` - Divisor, must not be zero (`0.0` and `-0.0` are both rejected)
///
/// # Returns
/// The quotient `a / b`, or `CalcError::DivisionByZero`
#[derive(Debug, Default, Clone, Copy)]
pub struct DivideOperation;

impl Operation for DivideOperation {
    fn execute(&self, a: f64, b: f64) -> OperationResult {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    fn description(&self) -> &'static str {
        "a / b"
    }
}
