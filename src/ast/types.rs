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

//! Type catalog for the symbol table analyzer.
//!
//! Maps type keywords to semantic type tags and their storage sizes.

use std::fmt;

/// A data type of a declared variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 4-byte integer (`int`).
    Int,
    /// 8-byte floating point (`float`).
    Float,
    /// 1-byte character (`char`).
    Char,
    /// Any keyword outside the catalog. Never stored in the symbol table.
    Unknown,
}

impl DataType {
    /// All known types, in catalog order.
    pub const KNOWN: [DataType; 3] = [DataType::Int, DataType::Float, DataType::Char];

    /// Get the size of this type in bytes.
    pub fn size(&self) -> u32 {
        match self {
            DataType::Int => 4,
            DataType::Float => 8,
            DataType::Char => 1,
            DataType::Unknown => 0,
        }
    }

    /// Resolve a type keyword.
    ///
    /// Matching is exact and case-sensitive: `"Int"` or `"integer"` yield
    /// [`DataType::Unknown`].
    pub fn parse(keyword: &str) -> DataType {
        match keyword {
            "int" => DataType::Int,
            "float" => DataType::Float,
            "char" => DataType::Char,
            _ => DataType::Unknown,
        }
    }

    /// Get the label used in diagnostics and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            DataType::Int => "INT",
            DataType::Float => "FLOAT",
            DataType::Char => "CHAR",
            DataType::Unknown => "UNKNOWN",
        }
    }

    /// Get the source keyword for this type, if it has one.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            DataType::Int => Some("int"),
            DataType::Float => Some("float"),
            DataType::Char => Some("char"),
            DataType::Unknown => None,
        }
    }

    /// Check if this type is part of the catalog.
    pub fn is_known(&self) -> bool {
        !matches!(self, DataType::Unknown)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
