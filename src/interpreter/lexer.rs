use logos::Logos;

use crate::{error::LexError, interpreter::value::Type};

/// A token's position in the source text, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The line the token starts on.
    pub line:   usize,
    /// The column the token starts at.
    pub column: usize,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.5`.
    #[regex(r"[0-9]+\.[0-9]+", parse_double)]
    Double(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Type keywords: `int`, `double`, `bool`, `string`, `void`.
    #[token("int", |_| Type::Int)]
    #[token("double", |_| Type::Double)]
    #[token("bool", |_| Type::Bool)]
    #[token("string", |_| Type::String)]
    #[token("void", |_| Type::Void)]
    TypeName(Type),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `return`
    #[token("return")]
    Return,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// Identifier tokens; variable or function names such as `x` or `sum`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Double-quoted string literals. Raw newlines are permitted inside and
    /// no escape sequences are processed.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// Line breaks; tracked for positions, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line
/// starts, so every token can be stamped with a line and column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Parses a floating-point literal from the current token slice.
fn parse_double(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digit run does not fit in an `i64`, which turns
/// the token into a lexical error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Strips the surrounding quotes from a string literal slice.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a complete source buffer.
///
/// The whole buffer is consumed up front and returned as a finite token
/// sequence; the end of the sequence is the end-of-input marker. Whitespace
/// and `//` line comments are skipped. Tokenization aborts on the first
/// lexical error, reporting the line and column of the offending text.
///
/// # Errors
/// - [`LexError::UnterminatedString`] for a string literal without a closing
///   quote.
/// - [`LexError::InvalidNumber`] for an integer literal outside the 64-bit
///   range.
/// - [`LexError::UnexpectedCharacter`] for any other unrecognized input.
///
/// # Example
/// ```
/// use shoal::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("int x = 5;").unwrap();
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1].0, Token::Identifier("x".to_string()));
/// assert_eq!(tokens[1].1.line, 1);
/// assert_eq!(tokens[1].1.column, 5);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line:       1,
                                                                   line_start: 0, });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let position = Position { line:   lexer.extras.line,
                                  column: span.start - lexer.extras.line_start + 1, };

        match result {
            Ok(token) => {
                if let Token::Str(_) = &token {
                    // A string literal may span lines; account for them so
                    // following tokens get correct positions.
                    let slice = lexer.slice();
                    if let Some(last_newline) = slice.rfind('\n') {
                        lexer.extras.line += slice.matches('\n').count();
                        lexer.extras.line_start = span.start + last_newline + 1;
                    }
                }
                tokens.push((token, position));
            },
            Err(()) => {
                let found = lexer.slice().to_string();

                if found.starts_with('"') {
                    return Err(LexError::UnterminatedString { line:   position.line,
                                                              column: position.column, });
                }
                if found.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(LexError::InvalidNumber { lexeme: found,
                                                         line:   position.line,
                                                         column: position.column, });
                }
                return Err(LexError::UnexpectedCharacter { found,
                                                           line: position.line,
                                                           column: position.column, });
            },
        }
    }

    Ok(tokens)
}
