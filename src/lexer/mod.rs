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

//! Lexer module for the statement language.
//!
//! Tokenizes one input line at a time. The token set is small: identifiers,
//! numeric and character literals, the `void` keyword, arithmetic operators
//! and the punctuation used by declarations and function headers.

mod tokens;

pub use tokens::Token;

use logos::Logos;
use thiserror::Error;

use crate::error::Span;

/// A character sequence that is not part of the token set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character sequence '{text}' at {}..{}", span.start, span.end)]
pub struct LexError {
    /// The offending text.
    pub text: String,
    /// Where it appears.
    pub span: Span,
}

/// Tokenize source code into a vector of tokens with spans.
///
/// Spans are relative to `source`.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(LexError {
                    text: lexer.slice().to_string(),
                    span,
                })
            }
        }
    }

    Ok(tokens)
}
