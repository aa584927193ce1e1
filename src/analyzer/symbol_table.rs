// Symtab - A symbol table and scope simulator for a C-like compiler front end
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Symbol table for the semantic analyzer.
//!
//! The table is an append-only, capacity-bounded sequence of entries in
//! insertion order. Names are unique per scope, not globally.

use thiserror::Error;

use super::symbol::{Location, SymbolEntry, SymbolId, GLOBAL_SCOPE};
use crate::ast::DataType;
use crate::error::Span;

/// Default number of entries a table accepts.
pub const DEFAULT_CAPACITY: usize = 100;

/// Why an insertion was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The same name is already declared in the same scope.
    #[error("'{name}' is already declared in scope '{scope}'")]
    DuplicateInScope {
        name: String,
        scope: String,
        existing: SymbolId,
    },
    /// The table holds `capacity` entries already.
    #[error("symbol table capacity of {capacity} entries reached")]
    CapacityExceeded { capacity: usize },
    /// No `size`-byte block is left in the scope's address range.
    #[error("no room left for {size} bytes in scope '{scope}'")]
    OutOfAddressSpace { size: u32, scope: String },
}

/// The symbol table for semantic analysis.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Entries in insertion order.
    entries: Vec<SymbolEntry>,
    /// Maximum number of entries.
    capacity: usize,
}

impl SymbolTable {
    /// Create a new table with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new table holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Insert a new entry.
    ///
    /// Capacity and duplicate rejections leave the table untouched and never
    /// call `allocate`. Otherwise `allocate` is called exactly once with the
    /// entry size and returns its location, or `None` if the block does not
    /// fit, which rejects the insert.
    pub fn insert(
        &mut self,
        name: &str,
        data_type: DataType,
        scope: &str,
        span: Span,
        allocate: impl FnOnce(u32) -> Option<Location>,
    ) -> Result<SymbolId, InsertError> {
        if self.is_full() {
            return Err(InsertError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if let Some(existing) = self.find_in_scope(name, scope) {
            return Err(InsertError::DuplicateInScope {
                name: name.to_string(),
                scope: scope.to_string(),
                existing,
            });
        }

        let size = data_type.size();
        let location = allocate(size).ok_or_else(|| InsertError::OutOfAddressSpace {
            size,
            scope: scope.to_string(),
        })?;

        let id = SymbolId::from_index(self.entries.len());
        self.entries.push(SymbolEntry {
            name: name.to_string(),
            data_type,
            scope: scope.to_string(),
            size,
            location,
            active: true,
            span,
        });
        Ok(id)
    }

    /// Look up a name, returning the first entry in insertion order.
    ///
    /// The scope of the entry is not considered: a local that shares its
    /// name with an earlier global resolves to the global.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(SymbolId::from_index)
    }

    /// Look up a name preferring `scope`, then the global scope, then any
    /// other scope in insertion order.
    pub fn lookup_scoped(&self, name: &str, scope: &str) -> Option<SymbolId> {
        self.find_in_scope(name, scope)
            .or_else(|| self.find_in_scope(name, GLOBAL_SCOPE))
            .or_else(|| self.lookup(name))
    }

    /// Find the entry declared as `name` in exactly `scope`.
    pub fn find_in_scope(&self, name: &str, scope: &str) -> Option<SymbolId> {
        self.entries
            .iter()
            .position(|entry| entry.name == name && entry.scope == scope)
            .map(SymbolId::from_index)
    }

    /// Get an entry by handle.
    pub fn get(&self, id: SymbolId) -> Option<&SymbolEntry> {
        self.entries.get(id.index())
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Iterate over entries with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &SymbolEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (SymbolId::from_index(index), entry))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if no further entry fits.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Remove all entries. The capacity is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Allocator stand-in: every global gets `cursor`, then advances it.
    fn bump(cursor: &mut u32) -> impl FnOnce(u32) -> Option<Location> + '_ {
        move |size| {
            let location = Location::Address(*cursor);
            *cursor = cursor.checked_add(size)?;
            Some(location)
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut table = SymbolTable::new();
        let mut cursor = 1000;

        let x = table
            .insert("x", DataType::Int, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap();
        assert_eq!(table.lookup("x"), Some(x));
        assert_eq!(table.lookup("y"), None);

        let entry = table.get(x).unwrap();
        assert_eq!(entry.size, 4);
        assert_eq!(entry.location, Location::Address(1000));
        assert!(entry.active);

        table
            .insert("y", DataType::Float, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap();
        assert_eq!(table.lookup("x"), Some(x));
        assert_eq!(cursor, 1012);
    }

    #[test]
    fn test_duplicate_in_same_scope_is_rejected() {
        let mut table = SymbolTable::new();
        let mut cursor = 0;

        let first = table
            .insert("x", DataType::Int, "f", Span::default(), bump(&mut cursor))
            .unwrap();
        let err = table
            .insert("x", DataType::Char, "f", Span::default(), bump(&mut cursor))
            .unwrap_err();

        assert_eq!(
            err,
            InsertError::DuplicateInScope {
                name: "x".to_string(),
                scope: "f".to_string(),
                existing: first,
            }
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(first).unwrap().data_type, DataType::Int);
        assert_eq!(cursor, 4, "rejected insert must not allocate");
    }

    #[test]
    fn test_same_name_in_different_scopes() {
        let mut table = SymbolTable::new();
        let mut cursor = 0;

        table
            .insert("z", DataType::Int, "f", Span::default(), bump(&mut cursor))
            .unwrap();
        table
            .insert("z", DataType::Int, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut table = SymbolTable::with_capacity(2);
        let mut cursor = 0;

        table
            .insert("a", DataType::Char, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap();
        table
            .insert("b", DataType::Char, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap();
        assert!(table.is_full());

        let err = table
            .insert("c", DataType::Char, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap_err();
        assert_eq!(err, InsertError::CapacityExceeded { capacity: 2 });

        // Capacity is checked before duplicates.
        let err = table
            .insert("a", DataType::Char, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap_err();
        assert_eq!(err, InsertError::CapacityExceeded { capacity: 2 });
        assert_eq!(table.len(), 2);
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_failed_allocation_rejects_insert() {
        let mut table = SymbolTable::new();
        let mut cursor = u32::MAX - 2;

        let err = table
            .insert("big", DataType::Float, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap_err();
        assert_eq!(
            err,
            InsertError::OutOfAddressSpace {
                size: 8,
                scope: GLOBAL_SCOPE.to_string(),
            }
        );
        assert!(table.is_empty());
        assert_eq!(cursor, u32::MAX - 2);
    }

    #[test]
    fn test_lookup_is_first_match() {
        let mut table = SymbolTable::new();
        let mut cursor = 0;

        let global = table
            .insert("x", DataType::Int, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
            .unwrap();
        let local = table
            .insert("x", DataType::Float, "f", Span::default(), bump(&mut cursor))
            .unwrap();

        assert_eq!(table.lookup("x"), Some(global));
        assert_eq!(table.lookup_scoped("x", "f"), Some(local));
        assert_eq!(table.lookup_scoped("x", "g"), Some(global));
    }

    #[test]
    fn test_lookup_scoped_falls_back_to_any_scope() {
        let mut table = SymbolTable::new();
        let mut cursor = 0;

        let other = table
            .insert("t", DataType::Int, "f", Span::default(), bump(&mut cursor))
            .unwrap();
        assert_eq!(table.lookup_scoped("t", "g"), Some(other));
    }

    #[test]
    fn test_iter_and_clear() {
        let mut table = SymbolTable::with_capacity(10);
        let mut cursor = 0;
        for name in ["a", "b", "c"] {
            table
                .insert(name, DataType::Int, GLOBAL_SCOPE, Span::default(), bump(&mut cursor))
                .unwrap();
        }

        let names: Vec<_> = table
            .iter()
            .map(|(id, entry)| (id.index(), entry.name.as_str()))
            .collect();
        assert_eq!(names, vec![(0, "a"), (1, "b"), (2, "c")]);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 10);
    }
}
