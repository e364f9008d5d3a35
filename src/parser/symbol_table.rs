//! Symbol tables for lexical scoping.
//!
//! One [`SymbolTable`] exists per open scope while parsing; the parser
//! keeps them on a stack, pushing when it enters a block or function
//! body and discarding the table when that scope finishes. The IR keeps
//! only the variable identities the tables handed out, never the tables
//! themselves.

use std::collections::HashMap;

use crate::ir::{nodes::VarId, types::Type};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolTableEntry {
    pub variable: VarId,
    pub ty: Type,
}

/// Name bindings for a single lexical scope.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolTableEntry>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Add or overwrite an entry in this scope.
    pub fn insert(&mut self, name: impl Into<String>, variable: VarId, ty: Type) {
        self.entries
            .insert(name.into(), SymbolTableEntry { variable, ty });
    }

    pub fn lookup(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.entries.get(name)
    }
}

/// Search a scope chain innermost-to-outermost and return the first
/// binding for `name`. Purely by reference; the chain is left exactly
/// as it was.
pub fn lookup_chain<'a>(scopes: &'a [SymbolTable], name: &str) -> Option<&'a SymbolTableEntry> {
    scopes.iter().rev().find_map(|scope| scope.lookup(name))
}
