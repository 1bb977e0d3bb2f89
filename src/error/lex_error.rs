#[derive(Debug)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending text.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A numeric literal could not be represented.
    InvalidNumber {
        /// The literal text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line, column } => {
                write!(f, "Error on line {line}, column {column}: Unexpected character '{found}'.")
            },

            Self::UnterminatedString { line, column } => {
                write!(f, "Error on line {line}, column {column}: Unterminated string literal.")
            },

            Self::InvalidNumber { lexeme, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Numeric literal '{lexeme}' is out of range."),
        }
    }
}

impl std::error::Error for LexError {}
