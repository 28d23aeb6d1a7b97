//! Evaluation context: the named variable store.
//!
//! A flat mapping from variable name to `f64`. Variables are created
//! dynamically on first assignment; there are no declarations, no scopes,
//! and no deletion. Reading an unbound name yields `None`, which the
//! evaluator reports as `UndefinedVariable` — never a default value.

use rustc_hash::FxHashMap;

/// Mutable variable store consumed by statement execution.
#[derive(Clone, Debug, Default)]
pub struct EvaluationContext {
    bindings: FxHashMap<String, f64>,
}

impl EvaluationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable. `None` if the name was never assigned.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Bind or rebind a variable, overwriting any prior value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), value);
    }
}
