/// Lexical errors.
///
/// Defines the error types raised while tokenizing source text. A lexical
/// error aborts the whole tokenization pass; nothing is parsed or evaluated
/// afterwards.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parse errors include unexpected tokens, invalid assignment targets, and
/// oversized array initializers. Most of them are recovered per statement
/// through panic-mode synchronization.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined symbols, type mismatches, out-of-bounds indexing,
/// and division by zero. They abort the remainder of the current submission.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
