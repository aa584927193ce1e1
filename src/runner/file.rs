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

//! File input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::RunnerError;
use crate::analyzer::{Analyzer, DiagnosticSink};

/// Feed every line of the file at `path` into `analyzer`, in order.
///
/// Returns the text that was read so diagnostics can be rendered against
/// it. The analyzer is not reset first; callers decide where a run starts.
/// The file handle is closed on every exit path.
pub fn analyze_file<S: DiagnosticSink>(
    path: &Path,
    analyzer: &mut Analyzer<S>,
) -> Result<String, RunnerError> {
    let file = File::open(path).map_err(|source| RunnerError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut source = String::new();
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|source| RunnerError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        line_number += 1;
        let offset = source.len();
        source.push_str(&line);

        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        debug!(line = line_number, text, "line");
        analyzer.process_line(text, offset);
    }

    Ok(source)
}
