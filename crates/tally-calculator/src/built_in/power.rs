//! Power Operation
//!
//! Raises `a` to the power `b` using `f64::powf`, so fractional and negative
//! exponents follow IEEE-754 semantics: `0^0 == 1`, and a negative base with a
//! fractional exponent yields NaN.

use crate::operation::{Operation, OperationResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct PowerOperation;

impl Operation for PowerOperation {
    fn execute(&self, a: f64, b: f64) -> OperationResult {
        Ok(a.powf(b))
    }

    fn description(&self) -> &'static str {
        "a ^ b"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raises_to_power() {
        assert_eq!(PowerOperation.execute(2.0, 3.0), Ok(8.0));
        assert_eq!(PowerOperation.execute(4.0, 0.5), Ok(2.0));
        assert_eq!(PowerOperation.execute(2.0, -1.0), Ok(0.5));
    }

    #[test]
    fn zero_to_the_zero_is_one() {
        assert_eq!(PowerOperation.execute(0.0, 0.0), Ok(1.0));
    }

    #[test]
    fn negative_base_fractional_exponent_is_nan() {
        let result = PowerOperation.execute(-8.0, 0.5).unwrap();
        assert!(result.is_nan());
    }
}
