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

//! Box-drawn summary table.
//!
//! Layout:
//! - `#` banner with the entry and error totals
//! - one row per entry, local offsets marked `(BP)`
//! - next global start address and the compilation status

use std::fmt::Write;

use crate::analyzer::AnalysisReport;

const BANNER: &str = "###################################################################";
const RULE: &str = "===================================================================";
const THIN_RULE: &str = "-------------------------------------------------------------------";

/// Render the summary table.
pub fn render_table(report: &AnalysisReport<'_>) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", BANNER);
    let _ = writeln!(
        out,
        "FINAL SYMBOL TABLE SUMMARY (Total Entries: {}, Errors: {})",
        report.entries.len(),
        report.error_count
    );
    let _ = writeln!(out, "{}", BANNER);
    let _ = writeln!(
        out,
        "| NAME     | TYPE  | SCOPE    | SIZE | ADDRESS/OFFSET | END_ADDR |"
    );
    let _ = writeln!(
        out,
        "|----------|-------|----------|------|----------------|----------|"
    );

    for entry in report.entries {
        let marker = if entry.is_global() { "" } else { " (BP)" };
        let _ = writeln!(
            out,
            "| {:<8} | {:<5} | {:<8} | {:<4} | {:<12}{} | {:<8} |",
            entry.name,
            entry.data_type.display_name(),
            entry.scope,
            entry.size,
            entry.location.value(),
            marker,
            entry.end()
        );
    }

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "NEXT GLOBAL START ADDRESS: {}",
        report.next_global_address
    );
    let _ = writeln!(out, "{}", THIN_RULE);
    if report.passed() {
        let _ = writeln!(
            out,
            "COMPILATION STATUS: SUCCESS (No Semantic/Syntax Errors Detected)."
        );
    } else {
        let _ = writeln!(
            out,
            "COMPILATION STATUS: FAILED with {} Semantic/Syntax Errors.",
            report.error_count
        );
    }
    let _ = writeln!(out, "{}", BANNER);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, AnalyzerConfig};

    #[test]
    fn test_global_row() {
        let analyzer = analyze("int x;\n", AnalyzerConfig::default());
        let table = render_table(&analyzer.report());
        assert!(table.contains("| x        | INT   | Global   | 4    | 1000         | 1003     |"));
    }

    #[test]
    fn test_local_row_is_marked() {
        let analyzer = analyze("void f() {\nfloat y;\n", AnalyzerConfig::default());
        let table = render_table(&analyzer.report());
        assert!(table.contains("| y        | FLOAT | f        | 8    | 0            (BP) | 7        |"));
    }

    #[test]
    fn test_status_lines() {
        let ok = analyze("int x;\n", AnalyzerConfig::default());
        assert!(render_table(&ok.report())
            .contains("COMPILATION STATUS: SUCCESS (No Semantic/Syntax Errors Detected)."));

        let failed = analyze("a = b;\n", AnalyzerConfig::default());
        let table = render_table(&failed.report());
        assert!(table.contains("FINAL SYMBOL TABLE SUMMARY (Total Entries: 0, Errors: 2)"));
        assert!(table.contains("COMPILATION STATUS: FAILED with 2 Semantic/Syntax Errors."));
    }

    #[test]
    fn test_next_global_address() {
        let analyzer = analyze("char c;\n", AnalyzerConfig::default());
        assert!(render_table(&analyzer.report()).contains("NEXT GLOBAL START ADDRESS: 1001\n"));
    }
}
