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

//! Semantic analyzer module.
//!
//! The [`Analyzer`] is the context object for one analysis run. It owns the
//! symbol table, the scope controller, the allocator and the diagnostic
//! counters, and dispatches each classified statement to its handler.
//! Nothing is process-wide: two analyzers never share state, and
//! [`Analyzer::reset`] returns one to its initial state.

mod allocator;
mod context;
mod diagnostics;
mod scope;
mod statements;
mod symbol;
mod symbol_table;

pub use allocator::{Allocator, DEFAULT_GLOBAL_BASE};
pub use context::{AnalyzerConfig, LookupPolicy, DEFAULT_MAX_IDENTIFIER_LEN};
pub use diagnostics::{Collected, Diagnostic, DiagnosticSink, Diagnostics, Silent};
pub use scope::{Frame, ScopeController, ScopePolicy};
pub use statements::{Resolution, StatementHandlers};
pub use symbol::{Location, SymbolEntry, SymbolId, GLOBAL_SCOPE};
pub use symbol_table::{InsertError, SymbolTable, DEFAULT_CAPACITY};

use tracing::{info, trace};

use crate::ast::{DataType, Ident, Statement, StatementKind};
use crate::error::{CompileError, CompileWarning, ErrorCode, Span, WarningCode};
use crate::parser;

/// The finished state of a run, borrowed for rendering.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisReport<'a> {
    /// Entries in insertion order.
    pub entries: &'a [SymbolEntry],
    /// Number of counted errors.
    pub error_count: usize,
    /// Number of advisory warnings.
    pub warning_count: usize,
    /// Next free global address.
    pub next_global_address: u32,
}

impl AnalysisReport<'_> {
    /// A run passes when no error was counted. Warnings do not matter.
    pub fn passed(&self) -> bool {
        self.error_count == 0
    }
}

/// The semantic analyzer.
pub struct Analyzer<S = Silent> {
    config: AnalyzerConfig,
    /// The symbol table.
    symbols: SymbolTable,
    /// The active scope.
    scopes: ScopeController,
    /// Global address and local offset policy.
    allocator: Allocator,
    /// Error and warning counters.
    diagnostics: Diagnostics,
    /// Where diagnostics go.
    sink: S,
}

impl Analyzer<Silent> {
    /// Create an analyzer that discards diagnostic details.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_sink(config, Silent)
    }
}

impl Default for Analyzer<Silent> {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl<S: DiagnosticSink> Analyzer<S> {
    /// Create an analyzer that sends diagnostics to `sink`.
    pub fn with_sink(config: AnalyzerConfig, sink: S) -> Self {
        Self {
            symbols: SymbolTable::with_capacity(config.capacity),
            scopes: ScopeController::new(config.scope_policy),
            allocator: Allocator::new(config.global_base),
            diagnostics: Diagnostics::new(),
            config,
            sink,
        }
    }

    /// Discard all run state: entries, scope, cursors and counters.
    ///
    /// The sink is left alone.
    pub fn reset(&mut self) {
        self.symbols.clear();
        self.scopes.reset();
        self.allocator.reset();
        self.diagnostics.reset();
    }

    /// Dispatch one statement to its handler.
    pub fn process(&mut self, statement: &Statement) {
        trace!(kind = statement.kind.name(), "statement");
        match &statement.kind {
            StatementKind::Declare { type_name, name } => {
                self.handle_declaration(type_name, name);
            }
            StatementKind::OpenScope { name } => self.handle_open_scope(name),
            StatementKind::CloseScope => self.handle_close_scope(),
            StatementKind::AssignSimple { target, source } => {
                self.handle_simple_assignment(target, source);
            }
            StatementKind::AssignArithmetic {
                target,
                source,
                op,
                operand,
            } => {
                self.handle_arithmetic_assignment(target, source, *op, operand);
            }
            StatementKind::Unrecognized { text } => {
                self.handle_unrecognized(text, &statement.span);
            }
        }
    }

    /// Classify and process one raw line.
    ///
    /// Returns `false` if the line held no statement (blank or comment).
    pub fn process_line(&mut self, line: &str, offset: usize) -> bool {
        match parser::classify(line, offset) {
            Some(statement) => {
                self.process(&statement);
                true
            }
            None => false,
        }
    }

    /// Process every line of `source` in order.
    pub fn analyze_source(&mut self, source: &str) {
        for (offset, line) in parser::lines(source) {
            self.process_line(line, offset);
        }
    }

    /// Insert `name` into the active scope.
    ///
    /// Rejections are reported and counted here; the table and cursors are
    /// left unchanged.
    pub fn insert_symbol(
        &mut self,
        name: &str,
        data_type: DataType,
        span: Span,
    ) -> Result<SymbolId, InsertError> {
        let scope = self.scopes.current().to_string();
        let allocator = &mut self.allocator;
        let scopes = &mut self.scopes;

        let result = self
            .symbols
            .insert(name, data_type, &scope, span.clone(), |size| {
                allocator.allocate(scopes, size)
            });

        match &result {
            Ok(id) => {
                if let Some(entry) = self.symbols.get(*id) {
                    info!(
                        name = %entry.name,
                        data_type = %entry.data_type,
                        scope = %entry.scope,
                        location = %entry.location,
                        size = entry.size,
                        "inserted symbol"
                    );
                }
            }
            Err(InsertError::CapacityExceeded { capacity }) => {
                let message = format!(
                    "Symbol table capacity of {} entries reached, cannot insert '{}'",
                    capacity, name
                );
                self.error(
                    CompileError::new(ErrorCode::SymbolTableFull, message, span)
                        .with_hint("Raise the limit with --capacity"),
                );
            }
            Err(InsertError::OutOfAddressSpace { size, .. }) => {
                let error = if scope == GLOBAL_SCOPE {
                    CompileError::new(
                        ErrorCode::AddressSpaceExhausted,
                        format!(
                            "Global data segment exhausted at address {}, cannot allocate {} bytes for '{}'",
                            self.allocator.next_global_address(),
                            size,
                            name
                        ),
                        span,
                    )
                    .with_hint("Lower the segment start with --global-base")
                } else {
                    CompileError::new(
                        ErrorCode::AddressSpaceExhausted,
                        format!(
                            "Frame of '{}' exhausted, cannot allocate {} bytes for '{}'",
                            scope, size, name
                        ),
                        span,
                    )
                };
                self.error(error);
            }
            Err(InsertError::DuplicateInScope { existing, .. }) => {
                let previous = self
                    .symbols
                    .get(*existing)
                    .map(|entry| format!("Previously declared as {} at {}", entry.data_type, entry.location));
                let mut error = CompileError::new(
                    ErrorCode::DuplicateDeclaration,
                    format!("Variable '{}' already declared in scope '{}'", name, scope),
                    span,
                );
                if let Some(previous) = previous {
                    error = error.with_hint(previous);
                }
                self.error(error);
            }
        }

        result
    }

    /// Resolve a name according to the configured lookup policy.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        match self.config.lookup_policy {
            LookupPolicy::FirstMatch => self.symbols.lookup(name),
            LookupPolicy::ScopeAware => self.symbols.lookup_scoped(name, self.scopes.current()),
        }
    }

    /// Get an entry by handle.
    pub fn entry(&self, id: SymbolId) -> Option<&SymbolEntry> {
        self.symbols.get(id)
    }

    /// The finished state for rendering.
    pub fn report(&self) -> AnalysisReport<'_> {
        AnalysisReport {
            entries: self.symbols.entries(),
            error_count: self.diagnostics.count(),
            warning_count: self.diagnostics.warning_count(),
            next_global_address: self.allocator.next_global_address(),
        }
    }

    /// The symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The scope controller.
    pub fn scopes(&self) -> &ScopeController {
        &self.scopes
    }

    /// Name of the active scope.
    pub fn current_scope(&self) -> &str {
        self.scopes.current()
    }

    /// Number of counted errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.count()
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.warning_count()
    }

    /// Check if any error was counted.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.count() > 0
    }

    /// Next free global address.
    pub fn next_global_address(&self) -> u32 {
        self.allocator.next_global_address()
    }

    /// The configuration this analyzer was built with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The diagnostic sink (mutable).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the analyzer and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Count and emit an error.
    pub fn error(&mut self, error: CompileError) {
        self.diagnostics.increment();
        self.sink.emit(Diagnostic::Error(error));
    }

    /// Count and emit a warning.
    pub fn warning(&mut self, warning: CompileWarning) {
        self.diagnostics.increment_warnings();
        self.sink.emit(Diagnostic::Warning(warning));
    }

    /// Cut an identifier down to the configured maximum length.
    fn normalize_identifier(&mut self, ident: &Ident) -> String {
        let max = self.config.max_identifier_len;
        match ident.name.char_indices().nth(max) {
            None => ident.name.clone(),
            Some((cut, _)) => {
                let truncated = ident.name[..cut].to_string();
                self.warning(CompileWarning::new(
                    WarningCode::IdentifierTruncated,
                    format!(
                        "Identifier '{}' truncated to '{}' ({} characters max)",
                        ident.name, truncated, max
                    ),
                    ident.span.clone(),
                ));
                truncated
            }
        }
    }
}

/// Analyze `source` in a fresh analyzer that collects its diagnostics.
pub fn analyze(source: &str, config: AnalyzerConfig) -> Analyzer<Collected> {
    let mut analyzer = Analyzer::with_sink(config, Collected::new());
    analyzer.analyze_source(source);
    analyzer
}
