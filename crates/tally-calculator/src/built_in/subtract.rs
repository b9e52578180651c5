use crate::operation::{Operation, OperationResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct SubtractOperation;

impl Operation for SubtractOperation {
    fn execute(&self, a: f64, b: f64) -> OperationResult {
        Ok(a - b)
    }

    fn description(&self) -> &'static str {
        "a - b"
    }
}
