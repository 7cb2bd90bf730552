use std::collections::HashMap;

use tracing::debug;

/// The variable table of a session.
///
/// Maps single-character names to values. Entries are created or overwritten
/// by assignments and are never removed. The tokenizer consults the store to
/// decide whether a letter is a variable reference, and the evaluator reads it
/// to substitute values.
///
/// # Example
/// ```
/// use linecalc::interpreter::store::VariableStore;
///
/// let mut store = VariableStore::new();
/// assert!(!store.has('x'));
///
/// store.set('x', 7.0);
/// assert!(store.has('x'));
/// assert_eq!(store.get('x'), Some(7.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    values: HashMap<char, f64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` has a stored value.
    #[must_use]
    pub fn has(&self, name: char) -> bool {
        self.values.contains_key(&name)
    }

    /// Returns the value stored under `name`, or `None` if it was never
    /// assigned.
    #[must_use]
    pub fn get(&self, name: char) -> Option<f64> {
        self.values.get(&name).copied()
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: char, value: f64) {
        debug!(%name, value, "storing variable");
        self.values.insert(name, value);
    }

    /// Returns the number of stored variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns all variables ordered by name.
    #[must_use]
    pub fn entries(&self) -> Vec<(char, f64)> {
        let mut entries: Vec<_> = self.values.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_by_key(|&(name, _)| name);
        entries
    }
}
