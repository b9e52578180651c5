use crate::operation::Operation;
use std::collections::HashMap;
use std::sync::Arc;

/// Name to operation mapping. A name is bound to at most one operation;
/// registering it again replaces the previous binding.
#[derive(Default, Clone)]
pub struct OperationRegistry {
    operations: HashMap<String, Arc<dyn Operation>>,
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry").field("operations", &self.names()).finish()
    }
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `operation`, returning the binding it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        operation: Arc<dyn Operation>,
    ) -> Option<Arc<dyn Operation>> {
        self.operations.insert(name.into(), operation)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Operation> {
        self.operations.get(name).map(|op| op.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
