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

//! Line classifier for the statement language.
//!
//! Turns raw input lines into the statement shapes the analyzer consumes:
//!
//! | Line | Statement |
//! |---|---|
//! | `int x;`, `int x = 1;` | `Declare` |
//! | `void f() {` | `OpenScope` |
//! | `}` | `CloseScope` |
//! | `a = b;` | `AssignSimple` |
//! | `a = b + 1;` | `AssignArithmetic` |
//! | anything else | `Unrecognized` |
//!
//! Blank lines and comment lines (starting with `/`) produce no statement.
//! A trailing `// comment` is ignored.

mod statements;

use crate::ast::{Statement, StatementKind};
use crate::error::Span;
use crate::lexer::tokenize;

/// Classify a single line.
///
/// `offset` is the byte offset of `line` within the enclosing source and is
/// added to every span in the result.
pub fn classify(line: &str, offset: usize) -> Option<Statement> {
    let code = match line.find("//") {
        Some(index) => &line[..index],
        None => line,
    };

    let trimmed_start = line.trim_start();
    if trimmed_start.starts_with('/') {
        return None;
    }

    let text = code.trim();
    if text.is_empty() {
        return None;
    }

    let start = offset + (code.len() - code.trim_start().len());
    let span = Span::new(start, start + text.len());

    let kind = match tokenize(text) {
        Ok(tokens) => {
            let tokens: Vec<_> = tokens
                .into_iter()
                .map(|(token, token_span)| (token, token_span.offset(start)))
                .collect();
            statements::match_statement(&tokens)
        }
        Err(_) => None,
    };

    let kind = kind.unwrap_or_else(|| StatementKind::Unrecognized {
        text: text.to_string(),
    });

    Some(Statement::new(kind, span))
}

/// Classify every line of `source`, in order.
pub fn parse(source: &str) -> Vec<Statement> {
    lines(source)
        .filter_map(|(offset, line)| classify(line, offset))
        .collect()
}

/// Iterate over the lines of `source` with their byte offsets.
///
/// Line terminators (`\n` or `\r\n`) are not part of the yielded lines.
pub fn lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.split_inclusive('\n').scan(0, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        let line = raw.trim_end_matches('\n').trim_end_matches('\r');
        Some((start, line))
    })
}
