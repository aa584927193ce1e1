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

//! Diagnostics accumulation for the semantic analyzer.
//!
//! The analyzer keeps only counts. Each diagnostic is handed to a
//! [`DiagnosticSink`] as soon as it is detected; what the sink does with
//! it (print, collect, drop) is up to the caller.

use crate::error::{
    format_error, format_warning, render_error_pretty, render_warning_pretty, CompileError,
    CompileWarning, Span,
};

/// Error and warning counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: usize,
    warnings: usize,
}

impl Diagnostics {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one error.
    pub fn increment(&mut self) {
        self.errors += 1;
    }

    /// Count one warning.
    pub fn increment_warnings(&mut self) {
        self.warnings += 1;
    }

    /// Number of errors counted so far.
    pub fn count(&self) -> usize {
        self.errors
    }

    /// Number of warnings counted so far.
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single emitted diagnostic.
#[derive(Debug, Clone)]
pub enum Diagnostic {
    /// Counted against the run.
    Error(CompileError),
    /// Advisory only.
    Warning(CompileWarning),
}

impl Diagnostic {
    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::Error(_))
    }

    /// The code string (`E...` or `W...`).
    pub fn code_str(&self) -> &'static str {
        match self {
            Diagnostic::Error(error) => error.code_str(),
            Diagnostic::Warning(warning) => warning.code_str(),
        }
    }

    /// The message text.
    pub fn message(&self) -> &str {
        match self {
            Diagnostic::Error(error) => &error.message,
            Diagnostic::Warning(warning) => &warning.message,
        }
    }

    /// The span the diagnostic refers to.
    pub fn span(&self) -> &Span {
        match self {
            Diagnostic::Error(error) => &error.span,
            Diagnostic::Warning(warning) => &warning.span,
        }
    }

    /// Format with source context as plain text.
    pub fn format(&self, source: &str, filename: Option<&str>) -> String {
        match self {
            Diagnostic::Error(error) => format_error(error, source, filename),
            Diagnostic::Warning(warning) => format_warning(warning, source, filename),
        }
    }

    /// Render with source context through ariadne.
    pub fn render_pretty(&self, source: &str, filename: &str, color: bool) -> String {
        match self {
            Diagnostic::Error(error) => render_error_pretty(error, source, filename, color),
            Diagnostic::Warning(warning) => render_warning_pretty(warning, source, filename, color),
        }
    }
}

/// Receives diagnostics as they are emitted.
pub trait DiagnosticSink {
    /// Handle one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagnosticSink for Silent {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Keeps every diagnostic in emission order.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Collected {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over collected errors.
    pub fn errors(&self) -> impl Iterator<Item = &CompileError> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::Error(error) => Some(error),
            Diagnostic::Warning(_) => None,
        })
    }

    /// Iterate over collected warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &CompileWarning> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::Warning(warning) => Some(warning),
            Diagnostic::Error(_) => None,
        })
    }

    /// Code strings of all diagnostics, in emission order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(Diagnostic::code_str).collect()
    }

    /// Drop everything collected so far.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl DiagnosticSink for Collected {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
