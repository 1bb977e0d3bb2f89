use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{binary::parse_assignment, declaration::parse_declaration},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program unit into a single statement list.
///
/// Statements are parsed until the token stream is exhausted. The returned
/// node is an unscoped block, so top-level declarations land in whatever
/// scope the program is evaluated in.
///
/// A failure while parsing one statement enters panic-mode recovery: the
/// error is recorded, tokens are discarded up to a synchronization point,
/// and parsing resumes with the next statement. One malformed statement
/// therefore never blocks the rest of the unit. All recovered errors are
/// returned alongside the program so the caller can surface them.
///
/// # Parameters
/// - `tokens`: The full token sequence of one submitted unit.
///
/// # Returns
/// The program block and every parse error that was recovered from.
///
/// # Example
/// ```
/// use shoal::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("int x = 1; x + 2;").unwrap();
/// let (_program, recovered) = parse_program(&tokens);
///
/// assert!(recovered.is_empty());
/// ```
#[must_use]
pub fn parse_program(tokens: &[(Token, Position)]) -> (Node, Vec<ParseError>) {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut recovered = Vec::new();

    while iter.peek().is_some() {
        match parse_declaration(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                recovered.push(error);
                synchronize(&mut iter);
            },
        }
    }

    (Node::Block { statements,
                   scoped: false,
                   line: 1, },
     recovered)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_assignment(tokens)
}

/// Discards tokens until a safe point to resume statement parsing.
///
/// The offending token is always consumed. Skipping then stops just past a
/// statement-terminating `;`, or right before a token that can start a new
/// statement: a type keyword or one of `if`, `while`, `for`, `return`.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some((Token::Semicolon, _)) = tokens.next() {
        return;
    }

    while let Some((token, _)) = tokens.peek() {
        match token {
            Token::Semicolon => {
                tokens.next();
                return;
            },
            Token::TypeName(_) | Token::If | Token::While | Token::For | Token::Return => return,
            _ => {
                tokens.next();
            },
        }
    }
}
