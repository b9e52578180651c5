//! Operation for adding two numeric values

use crate::operation::{Operation, OperationResult};

/// Sum of `a` and `b`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddOperation;

impl Operation for AddOperation {
    fn execute(&self, a: f64, b: f64) -> OperationResult {
        Ok(a + b)
    }

    fn description(&self) -> &'static str {
        "a + b"
    }
}
