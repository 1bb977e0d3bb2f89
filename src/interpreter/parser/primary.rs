use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated},
        },
        value::Value,
    },
};

/// Parses a primary expression.
///
/// A primary is one of:
/// - an integer, double, string or boolean literal,
/// - a brace-delimited array literal `{e0, e1, ...}` (possibly empty),
/// - an identifier, optionally followed by a call argument list or an array
///   index,
/// - a parenthesized expression.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` when no primary expression starts at the current
/// token or a delimiter is missing.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), position)) => Ok(Node::Literal { value: Value::Int(*n),
                                                                  line:  position.line, }),

        Some((Token::Double(d), position)) => Ok(Node::Literal { value: Value::Double(*d),
                                                                 line:  position.line, }),

        Some((Token::Str(s), position)) => Ok(Node::Literal { value: Value::Str(s.clone()),
                                                              line:  position.line, }),

        Some((Token::Bool(b), position)) => Ok(Node::Literal { value: Value::Bool(*b),
                                                               line:  position.line, }),

        Some((Token::LBrace, position)) => {
            let line = position.line;
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBrace)?;

            Ok(Node::Array { elements, line })
        },

        Some((Token::Identifier(name), position)) => {
            let line = position.line;

            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();

                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

                return Ok(Node::Call { name: name.clone(),
                                       arguments,
                                       line });
            }

            if let Some((Token::LBracket, _)) = tokens.peek() {
                tokens.next();

                let index = parse_expression(tokens)?;
                expect(tokens, &Token::RBracket, "Expected ']' after array index")?;

                return Ok(Node::ArrayAccess { name: name.clone(),
                                              index: Box::new(index),
                                              line });
            }

            Ok(Node::Variable { name: name.clone(),
                                line })
        },

        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "Expected ')' after expression")?;

            Ok(expr)
        },

        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an expression, found {token:?}"),
                                              line:  position.line, })
        },

        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
