//! The dispatch host.
//!
//! A [`Calculator`] owns an [`OperationRegistry`] and forwards
//! `calculate(name, a, b)` to whichever operation is bound to `name`. The
//! result, or the operation's error, is returned untouched.

use crate::built_in::{
    AddOperation, DivideOperation, MultiplyOperation, PowerOperation, SubtractOperation,
};
use crate::error::CalcError;
use crate::operation::{Operation, OperationResult};
use crate::registry::OperationRegistry;
use std::sync::Arc;
use tracing::debug;

/// Names the built-in operations are registered under by
/// [`Calculator::with_builtins`].
pub const BUILTIN_OPERATIONS: [&str; 5] = ["sumar", "restar", "multiplicar", "dividir", "potencia"];

#[derive(Debug, Default, Clone)]
pub struct Calculator {
    registry: OperationRegistry,
}

impl Calculator {
    /// Create a calculator with no operations registered
    pub fn new() -> Self {
        Self { registry: OperationRegistry::new() }
    }

    /// Create a calculator with the five built-in operations registered under
    /// the names in [`BUILTIN_OPERATIONS`].
    pub fn with_builtins() -> Self {
        let mut calculator = Self::new();
        calculator.register("sumar", AddOperation);
        calculator.register("restar", SubtractOperation);
        calculator.register("multiplicar", MultiplyOperation);
        calculator.register("dividir", DivideOperation);
        calculator.register("potencia", PowerOperation);
        calculator
    }

    /// Binds `name` to `operation`. An existing binding for `name` is
    /// silently replaced.
    pub fn register<O>(&mut self, name: impl Into<String>, operation: O)
    where
        O: Operation + 'static,
    {
        self.register_shared(name, Arc::new(operation));
    }

    /// Binds `name` to an operation handle that may also be held elsewhere.
    pub fn register_shared(&mut self, name: impl Into<String>, operation: Arc<dyn Operation>) {
        let name = name.into();
        let description = operation.description();
        if let Some(previous) = self.registry.register(name.clone(), operation) {
            debug!(
                operation = %name,
                previous = previous.description(),
                replacement = description,
                "Replaced existing operation binding"
            );
        }
    }

    /// Runs the operation registered under `name` on `a` and `b`.
    ///
    /// Fails with [`CalcError::UnknownOperation`] when nothing is bound to
    /// `name`; any error from the operation itself is passed through.
    pub fn calculate(&self, name: &str, a: f64, b: f64) -> OperationResult {
        match self.registry.get(name) {
            Some(operation) => operation.execute(a, b),
            None => Err(CalcError::UnknownOperation(name.to_string())),
        }
    }

    pub fn operation(&self, name: &str) -> Option<&dyn Operation> {
        self.registry.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Registered operation names in lexical order.
    pub fn operation_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }
}
