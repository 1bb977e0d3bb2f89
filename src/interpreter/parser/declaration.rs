use std::iter::Peekable;

use crate::{
    ast::{FunctionDecl, Node},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            statement::{parse_block, parse_statement},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
        value::{Type, Value},
    },
};

/// Parses a declaration, or falls back to statement parsing.
///
/// A leading type keyword followed by an identifier starts a declaration.
/// A `(` after the identifier selects a function declaration (or, when the
/// parenthesis contains expressions rather than typed parameters, an
/// immediate call statement); anything else is a variable declaration.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed declaration or statement node.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::TypeName(ty), position)) = tokens.peek() {
        let ty = *ty;
        let line = position.line;
        tokens.next();

        let name = parse_identifier(tokens)?;

        if let Some((Token::LParen, _)) = tokens.peek() {
            return parse_function_or_call(tokens, ty, name, line);
        }
        return parse_variable_declaration(tokens, ty, name, line);
    }

    parse_statement(tokens)
}

/// Parses one or more comma-separated variable declarators.
///
/// Each declarator may independently take the array form (`name[size]`).
/// The whole declaration is terminated by a single `;`. A multi-declaration
/// produces an unscoped grouping block, so the declared variables all land
/// in the surrounding scope.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the first declarator's name.
/// - `ty`: The declared element type from the leading type keyword.
/// - `first_name`: The first declarator's name, already consumed.
/// - `line`: Line number of the type keyword.
///
/// # Returns
/// A single assignment node, or an unscoped block of them.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     ty: Type,
                                     first_name: String,
                                     line: usize)
                                     -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut declarations = Vec::new();
    let mut name = first_name;

    loop {
        declarations.push(parse_declarator(tokens, ty, name, line)?);

        if let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            name = parse_identifier(tokens)?;
            continue;
        }

        break;
    }

    expect(tokens,
           &Token::Semicolon,
           "Expected ';' after variable declaration")?;

    if declarations.len() == 1 {
        Ok(declarations.remove(0))
    } else {
        Ok(Node::Block { statements: declarations,
                         scoped:     false,
                         line })
    }
}

/// Parses a single declarator, scalar or array.
///
/// Scalar form: `name` or `name = <expression>`. Without an initializer the
/// variable receives the type's zero value.
///
/// Array form: `name[size]` or `name[size] = {elements}`; the size must be
/// an integer literal and defaults to 5 when omitted. Without an
/// initializer the array is filled with `size` zero values of the element
/// type; a literal initializer larger than the size is a fatal error.
fn parse_declarator<'a, I>(tokens: &mut Peekable<I>,
                           ty: Type,
                           name: String,
                           line: usize)
                           -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::LBracket, _)) = tokens.peek() {
        tokens.next();

        let size = parse_array_size(tokens, line)?;
        expect(tokens, &Token::RBracket, "Expected ']' after array size")?;

        let value = if let Some((Token::Equals, _)) = tokens.peek() {
            tokens.next();

            let initializer = parse_expression(tokens)?;
            if let Node::Array { elements, .. } = &initializer
               && elements.len() > size
            {
                return Err(ParseError::ArrayInitializerTooLarge { found: elements.len(),
                                                                  bound: size,
                                                                  line });
            }
            initializer
        } else {
            let zero = zero_literal(ty, line)?;
            Node::Array { elements: vec![zero; size],
                          line }
        };

        return Ok(Node::Assignment { name,
                                     declared: Some(Type::Array),
                                     index: None,
                                     value: Box::new(value),
                                     line });
    }

    let value = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        parse_expression(tokens)?
    } else {
        zero_literal(ty, line)?
    };

    Ok(Node::Assignment { name,
                          declared: Some(ty),
                          index: None,
                          value: Box::new(value),
                          line })
}

/// Parses an optional integer-literal array size; defaults to 5.
fn parse_array_size<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some((Token::RBracket, _)) = tokens.peek() {
        return Ok(5);
    }

    match tokens.next() {
        Some((Token::Integer(n), position)) => {
            usize::try_from(*n).map_err(|_| {
                                   ParseError::UnexpectedToken { token: format!("Invalid array size {n}"),
                                                                 line:  position.line, }
                               })
        },
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected integer array size, found {token:?}"),
                                              line:  position.line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Builds the zero-value literal used for default initialization.
///
/// `int` defaults to `0`, `double` to `0.0`, `bool` to `false` and `string`
/// to `""`. Declaring a variable of any other type is a parse error.
fn zero_literal(ty: Type, line: usize) -> ParseResult<Node> {
    let value = match ty {
        Type::Int => Value::Int(0),
        Type::Double => Value::Double(0.0),
        Type::Bool => Value::Bool(false),
        Type::String => Value::Str(String::new()),
        Type::Void | Type::Array => {
            return Err(ParseError::InvalidDeclarationType { ty, line });
        },
    };

    Ok(Node::Literal { value, line })
}

/// Parses the parenthesized part after `type name`, selecting between a
/// function declaration and an immediate call statement.
///
/// An empty parenthesis or one starting with a type keyword is a function
/// declaration: typed parameters, then a brace-block body. The body block is
/// marked unscoped because a call evaluates it inside the scope that binds
/// the parameters, so each call adds exactly one scope.
///
/// A parenthesis holding expressions is an immediate call statement:
/// `int name(args);` calls `name` right away, the leading type keyword
/// notwithstanding.
fn parse_function_or_call<'a, I>(tokens: &mut Peekable<I>,
                                 return_type: Type,
                                 name: String,
                                 line: usize)
                                 -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen, "Expected '(' after function name")?;

    let is_declaration = matches!(tokens.peek(), Some((Token::RParen | Token::TypeName(_), _)));

    if !is_declaration {
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        expect(tokens, &Token::Semicolon, "Expected ';' after call")?;

        return Ok(Node::Call { name,
                               arguments,
                               line });
    }

    let mut params = Vec::new();

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
    } else {
        loop {
            let param_type = match tokens.next() {
                Some((Token::TypeName(ty), _)) => *ty,
                Some((token, position)) => {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected parameter type, found {token:?}"),
                                                             line:  position.line, });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line }),
            };
            let param_name = parse_identifier(tokens)?;
            params.push((param_name, param_type));

            if let Some((Token::Comma, _)) = tokens.peek() {
                tokens.next();
                continue;
            }

            break;
        }
        expect(tokens, &Token::RParen, "Expected ')' after parameters")?;
    }

    let mut body = parse_block(tokens)?;
    if let Node::Block { scoped, .. } = &mut body {
        *scoped = false;
    }

    Ok(Node::Function(FunctionDecl { name,
                                     params,
                                     return_type,
                                     body: Box::new(body),
                                     line }))
}
