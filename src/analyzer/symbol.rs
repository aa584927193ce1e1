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

//! Symbol entry definitions for the semantic analyzer.
//!
//! This module defines the symbol table entry structure, its storage
//! location and the handle used to refer to an entry without copying it.

use std::fmt;

use crate::ast::DataType;
use crate::error::Span;

/// Name of the global scope.
pub const GLOBAL_SCOPE: &str = "Global";

/// Handle to an entry in the [`SymbolTable`](super::SymbolTable).
///
/// Handles are insertion indices and stay valid for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(usize);

impl SymbolId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the insertion index of the entry.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Where a symbol lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Absolute address in the flat global data segment.
    Address(u32),
    /// Offset relative to the base pointer of the current frame.
    Offset(u32),
}

impl Location {
    /// Get the raw address or offset.
    pub fn value(&self) -> u32 {
        match self {
            Location::Address(value) | Location::Offset(value) => *value,
        }
    }

    /// Check if this is a global address.
    pub fn is_global(&self) -> bool {
        matches!(self, Location::Address(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Address(address) => write!(f, "Address {}", address),
            Location::Offset(offset) => write!(f, "Offset {}", offset),
        }
    }
}

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// The symbol name, unique within its scope.
    pub name: String,
    /// The declared type. Never [`DataType::Unknown`].
    pub data_type: DataType,
    /// The scope active at declaration time.
    pub scope: String,
    /// Size in bytes, derived from `data_type`.
    pub size: u32,
    /// Address (global) or frame offset (local).
    pub location: Location,
    /// Always true once inserted; entries are never removed.
    pub active: bool,
    /// The span of the declared name.
    pub span: Span,
}

impl SymbolEntry {
    /// Check if this entry lives in the global scope.
    pub fn is_global(&self) -> bool {
        self.scope == GLOBAL_SCOPE
    }

    /// Last byte occupied by the symbol.
    pub fn end(&self) -> u32 {
        self.location
            .value()
            .saturating_add(self.size)
            .saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(scope: &str, location: Location, data_type: DataType) -> SymbolEntry {
        SymbolEntry {
            name: "x".to_string(),
            data_type,
            scope: scope.to_string(),
            size: data_type.size(),
            location,
            active: true,
            span: Span::default(),
        }
    }

    #[test]
    fn test_location_value() {
        assert_eq!(Location::Address(1000).value(), 1000);
        assert_eq!(Location::Offset(4).value(), 4);
        assert!(Location::Address(0).is_global());
        assert!(!Location::Offset(0).is_global());
        assert_eq!(Location::Offset(8).to_string(), "Offset 8");
    }

    #[test]
    fn test_entry_end() {
        let global = entry(GLOBAL_SCOPE, Location::Address(1000), DataType::Int);
        assert!(global.is_global());
        assert_eq!(global.end(), 1003);

        let local = entry("f", Location::Offset(0), DataType::Char);
        assert!(!local.is_global());
        assert_eq!(local.end(), 0);
    }
}
