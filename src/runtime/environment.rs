use std::collections::BTreeMap;

use crate::errors::errors::ErrorImpl;

use super::value::Value;

/// Variables of one interpretation session.
///
/// Entries are created or overwritten by declarations and assignments and are
/// never removed. Iteration is ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    variable_lookup: BTreeMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: BTreeMap::new(),
        }
    }

    /// Stores `value` under `name`, returning the value it replaced.
    pub fn set(&mut self, name: String, value: Value) -> Option<Value> {
        self.variable_lookup.insert(name, value)
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.variable_lookup.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Result<Value, ErrorImpl> {
        self.lookup(name).ok_or_else(|| ErrorImpl::UndeclaredVariable {
            variable: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variable_lookup.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.variable_lookup
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }
}
