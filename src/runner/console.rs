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

//! Interactive console input.

use std::io::{BufRead, Write};

use super::RunnerError;
use crate::analyzer::{Analyzer, Collected};

/// The line that ends a console session.
pub const CONSOLE_EXIT: &str = "exit";

/// Read statements from `input` until `exit` or end of input.
///
/// Each line is prompted with the active scope, processed immediately,
/// and followed by its diagnostics on `output`. Diagnostic spans are
/// relative to the line they came from.
pub fn run_console<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    analyzer: &mut Analyzer<Collected>,
) -> Result<(), RunnerError> {
    writeln!(output, "--- Interactive Console Mode ---")?;
    writeln!(
        output,
        "Enter statements (e.g., 'int x;', 'void func() {{', '}}') or '{}'.",
        CONSOLE_EXIT
    )?;

    let mut line = String::new();
    loop {
        write!(output, "[{}] > ", analyzer.current_scope())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        if text.trim() == CONSOLE_EXIT {
            break;
        }

        analyzer.process_line(text, 0);

        let diagnostics = std::mem::take(&mut analyzer.sink_mut().diagnostics);
        for diagnostic in &diagnostics {
            write!(output, "{}", diagnostic.format(text, None))?;
        }
    }

    Ok(())
}
