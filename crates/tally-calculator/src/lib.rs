#![deny(warnings)]
//! The operation ecosystem for the Tally calculator.
//!
//! This crate provides the `Operation` trait for binary arithmetic on `f64`
//! operands, five built-in operations, and the `Calculator` that dispatches a
//! named computation to whichever operation is registered under that name.
//! New operations plug in by implementing `Operation`; the `Calculator` never
//! changes.
//!
//! ```
//! use tally_calculator::{Calculator, CalcError};
//! use tally_calculator::built_in::{AddOperation, DivideOperation};
//!
//! let mut calculator = Calculator::new();
//! calculator.register("sumar", AddOperation);
//! calculator.register("dividir", DivideOperation);
//!
//! assert_eq!(calculator.calculate("sumar", 10.0, 5.0), Ok(15.0));
//! assert_eq!(calculator.calculate("dividir", 1.0, 0.0), Err(CalcError::DivisionByZero));
//! ```

pub mod built_in;
pub mod calculator;
pub mod error;
pub mod operation;
pub mod registry;

pub use calculator::{BUILTIN_OPERATIONS, Calculator};
pub use error::CalcError;
pub use operation::{Operation, OperationResult};
pub use registry::OperationRegistry;
