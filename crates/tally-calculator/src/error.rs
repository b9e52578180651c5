//! Error type shared by operations and the calculator.

use thiserror::Error;

/// Failure raised while dispatching or executing an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// No operation is registered under the requested name.
    #[error("operation '{0}' is not registered")]
    UnknownOperation(String),

    /// The divisor was zero.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalcError::UnknownOperation(_) => "unknown_operation",
            CalcError::DivisionByZero => "division_by_zero",
        }
    }
}
