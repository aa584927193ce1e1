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

//! Statement shape matching.
//!
//! Matches a line's token sequence against the known statement shapes.

use crate::ast::{BinaryOp, DataType, Ident, Operand, StatementKind};
use crate::error::Span;
use crate::lexer::Token;

/// Classify a token sequence. Returns `None` if no shape matches.
pub(super) fn match_statement(tokens: &[(Token, Span)]) -> Option<StatementKind> {
    match tokens {
        [(Token::RightBrace, _)] => Some(StatementKind::CloseScope),

        [(head, _), (Token::Identifier(name), span), (Token::LeftParen, _), (Token::RightParen, _), (Token::LeftBrace, _)]
            if is_function_return_type(head) =>
        {
            Some(StatementKind::OpenScope {
                name: ident(name, span),
            })
        }

        [(Token::Identifier(type_name), type_span), (Token::Identifier(name), name_span), (Token::Semicolon, _)] => {
            Some(StatementKind::Declare {
                type_name: ident(type_name, type_span),
                name: ident(name, name_span),
            })
        }

        // The initializer is not evaluated; only the declaration is recorded.
        [(Token::Identifier(type_name), type_span), (Token::Identifier(name), name_span), (Token::Assign, _), initializer @ .., (Token::Semicolon, _)]
            if !initializer.is_empty() =>
        {
            Some(StatementKind::Declare {
                type_name: ident(type_name, type_span),
                name: ident(name, name_span),
            })
        }

        [(Token::Identifier(target), target_span), (Token::Assign, _), (Token::Identifier(source), source_span), (Token::Semicolon, _)] => {
            Some(StatementKind::AssignSimple {
                target: ident(target, target_span),
                source: ident(source, source_span),
            })
        }

        [(Token::Identifier(target), target_span), (Token::Assign, _), (Token::Identifier(source), source_span), (op, _), operand @ .., (Token::Semicolon, _)] => {
            let op = op.operator_char().and_then(BinaryOp::from_char)?;
            let operand = match_operand(operand)?;
            Some(StatementKind::AssignArithmetic {
                target: ident(target, target_span),
                source: ident(source, source_span),
                op,
                operand,
            })
        }

        _ => None,
    }
}

fn is_function_return_type(token: &Token) -> bool {
    match token {
        Token::Void => true,
        Token::Identifier(name) => DataType::parse(name).is_known(),
        _ => false,
    }
}

/// Match the operand of an arithmetic assignment: a single identifier or
/// literal, or a negated numeric literal.
fn match_operand(tokens: &[(Token, Span)]) -> Option<Operand> {
    match tokens {
        [(Token::Identifier(text) | Token::Number(text) | Token::CharLiteral(text), span)] => {
            Some(Operand::new(text.clone(), span.clone()))
        }
        [(Token::Minus, minus_span), (Token::Number(text), span)] => Some(Operand::new(
            format!("-{}", text),
            minus_span.merge(span),
        )),
        _ => None,
    }
}

fn ident(name: &str, span: &Span) -> Ident {
    Ident::new(name, span.clone())
}
