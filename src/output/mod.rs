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

//! Report output for the symbol table summary.
//!
//! This module renders the finished state of a run in two formats:
//! - a box-drawn summary table for the terminal
//! - CSV for tooling

mod csv;
mod table;

pub use csv::{render_csv, CSV_HEADER};
pub use table::render_table;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::analyzer::AnalysisReport;

/// Determine the report format from a file extension.
pub fn format_from_extension(path: &Path) -> Option<ReportFormat> {
    match path.extension()?.to_str()?.to_lowercase().as_str() {
        "txt" | "tbl" => Some(ReportFormat::Table),
        "csv" => Some(ReportFormat::Csv),
        _ => None,
    }
}

/// The format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Summary table.
    #[default]
    Table,
    /// Comma-separated rows.
    Csv,
}

/// Render a report in the given format.
pub fn render(report: &AnalysisReport<'_>, format: ReportFormat) -> String {
    match format {
        ReportFormat::Table => render_table(report),
        ReportFormat::Csv => render_csv(report),
    }
}

/// Write a rendered report to a file.
pub fn write_report(
    report: &AnalysisReport<'_>,
    path: &Path,
    format: ReportFormat,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render(report, format).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, AnalyzerConfig};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            format_from_extension(Path::new("report.txt")),
            Some(ReportFormat::Table)
        );
        assert_eq!(
            format_from_extension(Path::new("report.tbl")),
            Some(ReportFormat::Table)
        );
        assert_eq!(
            format_from_extension(Path::new("report.CSV")),
            Some(ReportFormat::Csv)
        );
        assert_eq!(format_from_extension(Path::new("report.prg")), None);
        assert_eq!(format_from_extension(Path::new("report")), None);
    }

    #[test]
    fn test_write_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let analyzer = analyze("int x;\n", AnalyzerConfig::default());

        write_report(&analyzer.report(), &path, ReportFormat::Csv).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&analyzer.report(), ReportFormat::Csv));
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.txt");
        let analyzer = analyze("", AnalyzerConfig::default());

        assert!(write_report(&analyzer.report(), &path, ReportFormat::Table).is_err());
    }
}
