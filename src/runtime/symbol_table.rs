use std::collections::HashMap;

use crate::runtime::gc::Handle;

/// Per-frame mapping from identifier to heap reference.
///
/// Lookup returns `None` for a missing binding; there is no reserved
/// sentinel value, so any handle a caller receives is a real binding.
#[derive(Debug, Default)]
pub struct SymbolTable {
    store: HashMap<String, Handle>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Binds `name` to `handle`, overwriting any prior binding.
    pub fn define(&mut self, name: impl Into<String>, handle: Handle) {
        self.store.insert(name.into(), handle);
    }

    /// Resolves `name` to its bound handle, if any.
    pub fn lookup(&self, name: &str) -> Option<Handle> {
        self.store.get(name).copied()
    }

    /// Iterates over every bound handle, in no particular order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.store.values().copied()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
