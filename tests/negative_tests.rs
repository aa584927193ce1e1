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

//! Negative tests for the analyzer.
//!
//! These tests verify that faulty input produces the expected diagnostics
//! and that the run continues afterwards.

use symtab::analyzer::{analyze, AnalyzerConfig};
use symtab::ErrorCode;
use test_case::test_case;

fn codes(source: &str) -> Vec<&'static str> {
    analyze(source, AnalyzerConfig::default()).sink().codes()
}

// ============================================================================
// Errors
// ============================================================================

#[test_case("double d;\n", &["E100"]; "unknown_type")]
#[test_case("Int x;\n", &["E100"]; "type_keywords_are_case_sensitive")]
#[test_case("unsigned u = 4;\n", &["E100"]; "unknown_type_with_initializer")]
#[test_case("x = y;\n", &["E200", "E200"]; "both_undeclared")]
#[test_case("int x;\nx = y;\n", &["E200"]; "source_undeclared")]
#[test_case("int y;\nx = y;\n", &["E200"]; "target_undeclared")]
#[test_case("int y;\nx = y + 1;\n", &["E200"]; "arithmetic_target_undeclared")]
#[test_case("int x;\nchar x;\n", &["E201"]; "duplicate_global")]
#[test_case("void f() {\nint x;\nint x;\n", &["E201"]; "duplicate_local")]
#[test_case("void f() {\nint x;\n}\nvoid f() {\nint x;\n", &["E201"]; "reopened_scope_keeps_old_entries")]
fn test_error_codes(source: &str, expected: &[&str]) {
    assert_eq!(codes(source), expected);
}

#[test]
fn test_capacity_error_message() {
    let config = AnalyzerConfig::default().with_capacity(1);
    let analyzer = analyze("int a;\nint b;\n", config);

    let error = analyzer.sink().errors().next().unwrap();
    assert_eq!(error.code, ErrorCode::SymbolTableFull);
    assert!(error.message.contains("cannot insert 'b'"));
    assert_eq!(analyzer.error_count(), 1);
}

#[test]
fn test_full_table_still_reports_duplicates_as_capacity() {
    let config = AnalyzerConfig::default().with_capacity(1);
    let analyzer = analyze("int a;\nint a;\n", config);

    assert_eq!(analyzer.sink().codes(), vec!["E300"]);
}

#[test]
fn test_full_table_still_resolves_lookups() {
    let config = AnalyzerConfig::default().with_capacity(1);
    let analyzer = analyze("int a;\nint b;\na = a;\n", config);

    assert_eq!(analyzer.error_count(), 1);
}

#[test]
fn test_exhausted_data_segment_message() {
    let config = AnalyzerConfig::default().with_global_base(u32::MAX - 2);
    let analyzer = analyze("int a;\nchar c;\nc = c;\n", config);

    let error = analyzer.sink().errors().next().unwrap();
    assert_eq!(error.code, ErrorCode::AddressSpaceExhausted);
    assert!(error.message.contains("cannot allocate 4 bytes for 'a'"));
    assert!(error.hint.as_deref().unwrap_or("").contains("--global-base"));
    assert_eq!(analyzer.error_count(), 1);
    assert_eq!(analyzer.symbols().len(), 1);
}

// ============================================================================
// Warnings
// ============================================================================

#[test_case("int a;\nfloat b;\na = b;\n", &["W100"]; "int_float_mismatch")]
#[test_case("char c;\nint i;\nc = i * 2;\n", &["W100"]; "arithmetic_mismatch")]
#[test_case("x = 5;\n", &["W101"]; "literal_source")]
#[test_case("int a, b;\n", &["W101"]; "multiple_declarators")]
#[test_case("return x;\n", &["E100"]; "return_reads_as_declaration")]
#[test_case("if (x) {\n", &["W101"]; "control_flow")]
#[test_case("int x\n", &["W101"]; "missing_semicolon")]
#[test_case("int x; @\n", &["W101"]; "unlexable_character")]
fn test_warning_codes(source: &str, expected: &[&str]) {
    assert_eq!(codes(source), expected);
}

#[test_case("// int x;\n"; "line_comment")]
#[test_case("/* block */\n"; "block_comment")]
#[test_case("   \n\t\n"; "blank")]
fn test_ignored_lines(source: &str) {
    let analyzer = analyze(source, AnalyzerConfig::default());
    assert!(analyzer.sink().diagnostics.is_empty());
    assert!(analyzer.symbols().is_empty());
}

#[test]
fn test_warnings_never_fail_a_run() {
    let analyzer = analyze(
        "int a;\nfloat b;\na = b;\nwhile (1) {\n",
        AnalyzerConfig::default(),
    );
    assert_eq!(analyzer.warning_count(), 2);
    assert!(analyzer.report().passed());
}
