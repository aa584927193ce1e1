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

//! Comma-separated report, one row per entry.

use crate::analyzer::AnalysisReport;

/// Column header line.
pub const CSV_HEADER: &str = "name,type,scope,size,location,end,kind";

/// Render the entries as CSV.
///
/// `kind` is `address` for globals and `offset` for locals.
pub fn render_csv(report: &AnalysisReport<'_>) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + report.entries.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for entry in report.entries {
        let kind = if entry.is_global() { "address" } else { "offset" };
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            entry.name,
            entry.data_type.keyword().unwrap_or("unknown"),
            entry.scope,
            entry.size,
            entry.location.value(),
            entry.end(),
            kind
        ));
    }

    out
}
