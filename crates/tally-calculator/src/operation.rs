use crate::error::CalcError;

pub type OperationResult = Result<f64, CalcError>;

/// A binary arithmetic operation.
/// Operations are stateless and thread-safe.
pub trait Operation: Send + Sync {
    /// Computes the result for operands `a` and `b`.
    fn execute(&self, a: f64, b: f64) -> OperationResult;

    /// Get a description of this operation
    fn description(&self) -> &'static str {
        "custom operation"
    }
}

/// Any thread-safe closure over two operands is an operation.
impl<F> Operation for F
where
    F: Fn(f64, f64) -> OperationResult + Send + Sync,
{
    fn execute(&self, a: f64, b: f64) -> OperationResult {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_operations() {
        let modulo = |a: f64, b: f64| -> OperationResult { Ok(a % b) };
        assert_eq!(modulo.execute(10.0, 4.0), Ok(2.0));
        assert_eq!(modulo.description(), "custom operation");
    }

    #[test]
    fn closures_can_fail() {
        let always_fails = |_: f64, _: f64| -> OperationResult { Err(CalcError::DivisionByZero) };
        assert_eq!(always_fails.execute(1.0, 2.0), Err(CalcError::DivisionByZero));
    }
}
