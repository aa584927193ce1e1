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

//! Symtab Library
//!
//! A symbol table and scope simulator for the semantic phase of a C-like
//! compiler front end. Declarations are assigned global addresses or
//! frame-relative offsets, assignments are checked for undeclared names and
//! type mismatches, and the final table is rendered as a report.
//!
//! # Modules
//!
//! - [`error`] - Diagnostic types and error reporting
//! - [`lexer`] - Tokenization of a statement line
//! - [`parser`] - Classification of lines into statements
//! - [`ast`] - Statement and type definitions
//! - [`analyzer`] - Symbol table, scopes, allocation and checks
//! - [`output`] - Table and CSV reports
//! - [`runner`] - File, console and watch input
//!
//! # Example
//!
//! ```
//! use symtab::analyzer::{analyze, AnalyzerConfig};
//! use symtab::output::{render, ReportFormat};
//!
//! let analyzer = analyze("int x;\nvoid f() {\nfloat y;\n}\n", AnalyzerConfig::default());
//! assert_eq!(analyzer.error_count(), 0);
//!
//! let report = render(&analyzer.report(), ReportFormat::Csv);
//! assert!(report.contains("y,float,f,8,0,7,offset"));
//! ```

pub mod analyzer;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use analyzer::{analyze, AnalysisReport, Analyzer, AnalyzerConfig};
pub use ast::{DataType, Statement, StatementKind};
pub use error::{format_error, format_warning, CompileError, CompileWarning, ErrorCode, Span};
pub use lexer::Token;

/// The version of the simulator.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the simulator.
pub const NAME: &str = "Symtab";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Symtab");
    }
}
