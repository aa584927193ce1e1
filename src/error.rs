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

//! Diagnostic types for the symbol table analyzer.
//!
//! This module defines the error and warning types emitted while analyzing
//! statements, together with plain-text and `ariadne` renderers.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span from a range.
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift the span by a fixed offset.
    pub fn offset(&self, by: usize) -> Span {
        Span {
            start: self.start + by,
            end: self.end + by,
        }
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::from_range(range)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Error codes for counted diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Syntax errors (E100)
    UnknownType,

    // Semantic errors (E200-E201)
    UndeclaredVariable,
    DuplicateDeclaration,

    // Capacity errors (E300-E301)
    SymbolTableFull,
    AddressSpaceExhausted,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownType => "E100",
            ErrorCode::UndeclaredVariable => "E200",
            ErrorCode::DuplicateDeclaration => "E201",
            ErrorCode::SymbolTableFull => "E300",
            ErrorCode::AddressSpaceExhausted => "E301",
        }
    }

    /// The diagnostic category shown next to the message.
    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::UnknownType => "Syntax",
            ErrorCode::UndeclaredVariable | ErrorCode::DuplicateDeclaration => "Semantic",
            ErrorCode::SymbolTableFull | ErrorCode::AddressSpaceExhausted => "Capacity",
        }
    }
}

/// Warning codes for advisory diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// Assignment between symbols of different types.
    TypeMismatch,
    /// Line that matches no known statement shape.
    UnhandledSyntax,
    /// Identifier cut down to the maximum length.
    IdentifierTruncated,
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl WarningCode {
    /// Get the numeric code for this warning.
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::TypeMismatch => "W100",
            WarningCode::UnhandledSyntax => "W101",
            WarningCode::IdentifierTruncated => "W102",
        }
    }
}

/// A counted error with source location.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// An advisory warning. Never counted as an error.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct CompileWarning {
    /// The warning code.
    pub code: WarningCode,
    /// The warning message.
    pub message: String,
    /// The source span the warning refers to.
    pub span: Span,
    /// Optional hint.
    pub hint: Option<String>,
}

impl CompileWarning {
    /// Create a new warning.
    pub fn new(code: WarningCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to this warning.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the warning code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }
}

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[last_newline..line_end].trim_end_matches('\r').to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Format an error with source context.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    format_diagnostic(
        &format!(
            "error[{}]: ({}) {}",
            error.code_str(),
            error.code.category(),
            error.message
        ),
        &error.span,
        error.hint.as_deref(),
        source,
        filename,
    )
}

/// Format a warning with source context.
pub fn format_warning(warning: &CompileWarning, source: &str, filename: Option<&str>) -> String {
    format_diagnostic(
        &format!("warning[{}]: {}", warning.code_str(), warning.message),
        &warning.span,
        warning.hint.as_deref(),
        source,
        filename,
    )
}

fn format_diagnostic(
    header: &str,
    span: &Span,
    hint: Option<&str>,
    source: &str,
    filename: Option<&str>,
) -> String {
    let loc = SourceLocation::from_offset(source, span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    output.push_str(header);
    output.push('\n');

    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    let underline_start = loc.column - 1;
    let underline_len = span
        .len()
        .max(1)
        .min(loc.line_content.len().saturating_sub(underline_start).max(1));
    output.push_str(&format!(
        "{:>width$} | {:>start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        start = underline_start
    ));

    if let Some(hint) = hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

/// Render an error through `ariadne`.
///
/// Used by the terminal front end; `color` toggles ANSI escapes.
pub fn render_error_pretty(
    error: &CompileError,
    source: &str,
    filename: &str,
    color: bool,
) -> String {
    let message = format!("({}) {}", error.code.category(), error.message);
    render_pretty(
        ReportKind::Error,
        error.code_str(),
        &message,
        &error.span,
        error.hint.as_deref(),
        (source, filename),
        color,
    )
}

/// Render a warning through `ariadne`.
pub fn render_warning_pretty(
    warning: &CompileWarning,
    source: &str,
    filename: &str,
    color: bool,
) -> String {
    render_pretty(
        ReportKind::Warning,
        warning.code_str(),
        &warning.message,
        &warning.span,
        warning.hint.as_deref(),
        (source, filename),
        color,
    )
}

fn render_pretty(
    kind: ReportKind<'_>,
    code: &str,
    message: &str,
    span: &Span,
    hint: Option<&str>,
    (source, filename): (&str, &str),
    color: bool,
) -> String {
    let range = char_range(span, source);

    let mut builder = Report::build(kind, filename, range.start)
        .with_config(Config::default().with_color(color))
        .with_code(code)
        .with_message(message)
        .with_label(Label::new((filename, range)).with_message(message));

    if let Some(hint) = hint {
        builder = builder.with_help(hint);
    }

    let mut buffer = Vec::new();
    if builder
        .finish()
        .write((filename, Source::from(source)), &mut buffer)
        .is_err()
    {
        return format!("{}: {}\n", code, message);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Convert a byte span into the char offsets `ariadne` expects.
fn char_range(span: &Span, source: &str) -> Range<usize> {
    let chars_before = |byte: usize| {
        source
            .char_indices()
            .take_while(|(i, _)| *i < byte)
            .count()
    };
    let start = chars_before(span.start);
    let end = chars_before(span.end).max(start);
    start..end
}
