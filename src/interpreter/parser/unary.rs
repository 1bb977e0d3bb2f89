use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        lexer::{Position, Token},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses a unary expression.
///
/// The prefix operators are `!`, `-`, `++` and `--`; prefix operators nest,
/// so `--x` and `!-x` parse recursively. When no prefix operator is present
/// a primary expression is parsed, followed by a one-token lookahead for
/// postfix `++` or `--`.
///
/// Grammar: `unary := ("!" | "-" | "++" | "--") unary | primary ("++" |
/// "--")?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((token, position)) = tokens.peek() {
        let prefix = match token {
            Token::Bang => Some(UnaryOperator::LogicalNot),
            Token::Minus => Some(UnaryOperator::Negate),
            Token::PlusPlus => Some(UnaryOperator::PreIncrement),
            Token::MinusMinus => Some(UnaryOperator::PreDecrement),
            _ => None,
        };

        if let Some(op) = prefix {
            let line = position.line;
            tokens.next();

            let operand = parse_unary(tokens)?;

            return Ok(Node::UnaryOp { op,
                                      operand: Box::new(operand),
                                      line });
        }
    }

    let expr = parse_primary(tokens)?;

    if let Some((token, position)) = tokens.peek() {
        let postfix = match token {
            Token::PlusPlus => Some(UnaryOperator::PostIncrement),
            Token::MinusMinus => Some(UnaryOperator::PostDecrement),
            _ => None,
        };

        if let Some(op) = postfix {
            let line = position.line;
            tokens.next();

            return Ok(Node::UnaryOp { op,
                                      operand: Box::new(expr),
                                      line });
        }
    }

    Ok(expr)
}
