//! Operation for multiplying two numeric values
//!
//! This operation performs plain `f64` multiplication.

use crate::operation::{Operation, OperationResult};

/// Operation for multiplication
///
/// # Arguments
/// * `a` - First numeric value to multiply
/// * `b` - Second numeric value to multiply
///
/// # Returns
/// The product of `a` and `b`
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiplyOperation;

impl Operation for MultiplyOperation {
    fn execute(&self, a: f64, b: f64) -> OperationResult {
        Ok(a * b)
    }

    fn description(&self) -> &'static str {
        "a * b"
    }
}
