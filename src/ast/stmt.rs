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

//! Statement definitions.
//!
//! A statement is one classified input line. The analyzer consumes these
//! shapes only and never looks at raw text, except to report an
//! [`StatementKind::Unrecognized`] line.

use super::expr::{BinaryOp, Operand};
use crate::error::Span;

/// An identifier token with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// The identifier text.
    pub name: String,
    /// Where the identifier appears.
    pub span: Span,
}

impl Ident {
    /// Create a new identifier.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// Create an identifier without a meaningful location.
    pub fn unspanned(name: impl Into<String>) -> Self {
        Self::new(name, Span::default())
    }
}

/// A classified statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The kind of statement.
    pub kind: StatementKind,
    /// The span of the whole statement.
    pub span: Span,
}

impl Statement {
    /// Create a new statement.
    pub fn new(kind: StatementKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// `Declare(type_name, name)` without location information.
    pub fn declare(type_name: &str, name: &str) -> Self {
        Self::new(
            StatementKind::Declare {
                type_name: Ident::unspanned(type_name),
                name: Ident::unspanned(name),
            },
            Span::default(),
        )
    }

    /// `OpenScope(name)` without location information.
    pub fn open_scope(name: &str) -> Self {
        Self::new(
            StatementKind::OpenScope {
                name: Ident::unspanned(name),
            },
            Span::default(),
        )
    }

    /// `CloseScope` without location information.
    pub fn close_scope() -> Self {
        Self::new(StatementKind::CloseScope, Span::default())
    }

    /// `AssignSimple(target, source)` without location information.
    pub fn assign(target: &str, source: &str) -> Self {
        Self::new(
            StatementKind::AssignSimple {
                target: Ident::unspanned(target),
                source: Ident::unspanned(source),
            },
            Span::default(),
        )
    }

    /// `AssignArithmetic(target, source, op, operand)` without location information.
    pub fn assign_arithmetic(target: &str, source: &str, op: BinaryOp, operand: &str) -> Self {
        Self::new(
            StatementKind::AssignArithmetic {
                target: Ident::unspanned(target),
                source: Ident::unspanned(source),
                op,
                operand: Operand::new(operand, Span::default()),
            },
            Span::default(),
        )
    }
}

/// The kinds of statement produced by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// `int x;`
    Declare { type_name: Ident, name: Ident },
    /// `void f() {`
    OpenScope { name: Ident },
    /// `}`
    CloseScope,
    /// `a = b;`
    AssignSimple { target: Ident, source: Ident },
    /// `a = b + 1;`
    AssignArithmetic {
        target: Ident,
        source: Ident,
        op: BinaryOp,
        operand: Operand,
    },
    /// Anything the classifier could not place.
    Unrecognized { text: String },
}

impl StatementKind {
    /// Short name of the statement kind, for tracing.
    pub fn name(&self) -> &'static str {
        match self {
            StatementKind::Declare { .. } => "declare",
            StatementKind::OpenScope { .. } => "open-scope",
            StatementKind::CloseScope => "close-scope",
            StatementKind::AssignSimple { .. } => "assign",
            StatementKind::AssignArithmetic { .. } => "assign-arithmetic",
            StatementKind::Unrecognized { .. } => "unrecognized",
        }
    }
}
