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

//! Statement handlers for the semantic analyzer.
//!
//! One handler per statement kind. Every problem is reported through the
//! analyzer's diagnostic sink and the run always continues with the next
//! statement.

use tracing::{debug, info};

use super::symbol::SymbolId;
use super::Analyzer;
use super::DiagnosticSink;
use crate::ast::{BinaryOp, DataType, Ident, Operand};
use crate::error::{CompileError, CompileWarning, ErrorCode, Span, WarningCode};

/// Result of resolving both sides of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved target, if declared.
    pub target: Option<SymbolId>,
    /// The resolved source, if declared.
    pub source: Option<SymbolId>,
    /// Both sides resolved to different types.
    pub type_mismatch: bool,
}

impl Resolution {
    /// Check if both sides resolved.
    pub fn is_resolved(&self) -> bool {
        self.target.is_some() && self.source.is_some()
    }
}

/// Extension trait for statement handling.
pub trait StatementHandlers {
    /// Declare `name` with the type named `type_name` in the active scope.
    fn handle_declaration(&mut self, type_name: &Ident, name: &Ident) -> Option<SymbolId>;

    /// Enter a function-like scope.
    fn handle_open_scope(&mut self, name: &Ident);

    /// Leave the active scope.
    fn handle_close_scope(&mut self);

    /// Check `target = source;`.
    fn handle_simple_assignment(&mut self, target: &Ident, source: &Ident) -> Resolution;

    /// Check `target = source <op> operand;`.
    ///
    /// `op` and `operand` are traced but never checked.
    fn handle_arithmetic_assignment(
        &mut self,
        target: &Ident,
        source: &Ident,
        op: BinaryOp,
        operand: &Operand,
    ) -> Resolution;

    /// Report a line no statement shape matched.
    fn handle_unrecognized(&mut self, text: &str, span: &Span);
}

impl<S: DiagnosticSink> StatementHandlers for Analyzer<S> {
    fn handle_declaration(&mut self, type_name: &Ident, name: &Ident) -> Option<SymbolId> {
        let data_type = DataType::parse(&type_name.name);
        if !data_type.is_known() {
            self.error(
                CompileError::new(
                    ErrorCode::UnknownType,
                    format!("Unknown type specifier '{}'", type_name.name),
                    type_name.span.clone(),
                )
                .with_hint("Expected one of: int, float, char"),
            );
            return None;
        }

        let name_text = self.normalize_identifier(name);
        self.insert_symbol(&name_text, data_type, name.span.clone())
            .ok()
    }

    fn handle_open_scope(&mut self, name: &Ident) {
        let name_text = self.normalize_identifier(name);
        if let Some(frame) = self.scopes.current_frame() {
            debug!(previous = %frame.name, "leaving local scope without closing it");
        }
        self.scopes.push_scope(&name_text);
        info!(
            scope = %name_text,
            depth = self.scopes.depth(),
            "pushing local scope, offset reset to 0"
        );
    }

    fn handle_close_scope(&mut self) {
        match self.scopes.pop_scope() {
            Some(closed) => {
                info!(scope = %closed, now = %self.scopes.current(), "popping scope");
            }
            None => debug!("closing brace in Global scope ignored"),
        }
    }

    fn handle_simple_assignment(&mut self, target: &Ident, source: &Ident) -> Resolution {
        debug!(target = %target.name, source = %source.name, "checking assignment");
        self.resolve_assignment(target, source)
    }

    fn handle_arithmetic_assignment(
        &mut self,
        target: &Ident,
        source: &Ident,
        op: BinaryOp,
        operand: &Operand,
    ) -> Resolution {
        debug!(
            target = %target.name,
            source = %source.name,
            op = %op,
            operand = %operand,
            "checking arithmetic assignment"
        );
        self.resolve_assignment(target, source)
    }

    fn handle_unrecognized(&mut self, text: &str, span: &Span) {
        self.warning(CompileWarning::new(
            WarningCode::UnhandledSyntax,
            format!("Skipping unhandled syntax: {}", text),
            span.clone(),
        ));
    }
}

impl<S: DiagnosticSink> Analyzer<S> {
    /// Resolve both operands independently and compare their types.
    fn resolve_assignment(&mut self, target: &Ident, source: &Ident) -> Resolution {
        let target_name = self.normalize_identifier(target);
        let source_name = self.normalize_identifier(source);

        let target_id = self.lookup(&target_name);
        let source_id = self.lookup(&source_name);

        if target_id.is_none() {
            self.report_undeclared("Target", &target_name, &target.span);
        }
        if source_id.is_none() {
            self.report_undeclared("Source", &source_name, &source.span);
        }

        let mut resolution = Resolution {
            target: target_id,
            source: source_id,
            type_mismatch: false,
        };

        if let (Some(target_id), Some(source_id)) = (target_id, source_id) {
            let (target_type, target_scope) = self.describe(target_id);
            let (source_type, source_scope) = self.describe(source_id);

            if target_type != source_type {
                resolution.type_mismatch = true;
                self.warning(
                    CompileWarning::new(
                        WarningCode::TypeMismatch,
                        format!(
                            "Assignment involves different types ({} and {})",
                            target_type, source_type
                        ),
                        target.span.merge(&source.span),
                    )
                    .with_hint("No implicit conversion is applied"),
                );
            }

            debug!(name = %target_name, scope = %target_scope, "lookup trace");
            debug!(name = %source_name, scope = %source_scope, "lookup trace");
        }

        resolution
    }

    fn report_undeclared(&mut self, role: &str, name: &str, span: &Span) {
        self.error(
            CompileError::new(
                ErrorCode::UndeclaredVariable,
                format!("{} variable '{}' is undeclared", role, name),
                span.clone(),
            )
            .with_hint(format!("Declare it first, e.g. 'int {};'", name)),
        );
    }

    fn describe(&self, id: SymbolId) -> (DataType, String) {
        match self.symbols.get(id) {
            Some(entry) => (entry.data_type, entry.scope.clone()),
            None => (DataType::Unknown, String::new()),
        }
    }
}
