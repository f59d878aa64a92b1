//! Variable store.
//!
//! The only state that survives from one statement to the next.  Owned by a
//! single [`Interpreter`](crate::script::Interpreter) and dropped with it.

use std::collections::HashMap;

use crate::script::value::Value;

/// Name → value table.  Re-assignment replaces both the value and its tag.
#[derive(Debug, Default)]
pub struct VarStore {
    vars: HashMap<String, Value>,
}

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a variable.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Get the value of a variable.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Get a variable only if it currently holds an integer.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.vars.get(name)?.as_int()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
