//! # shoal
//!
//! shoal is a small imperative scripting language embedded behind a
//! persistent shell boundary. It parses, checks, and evaluates programs
//! with typed variables, arrays, functions, and C-style control flow;
//! declarations survive across submissions on the same [`Shell`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Interpreter, Outcome},
        lexer::tokenize,
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and walked by the evaluator; every node owns its children,
/// so cloning a node yields a fully independent tree.
///
/// # Responsibilities
/// - Defines node variants for all language constructs.
/// - Attaches source lines to nodes for error reporting.
/// - Provides the deep-copy operation function registration relies on.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// submitted unit. It standardizes error reporting and carries line (and,
/// for lexical errors, column) information for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders each error as a human-readable message with its position.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation and the environment to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, state.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// A persistent scripting shell.
///
/// A `Shell` owns one [`Environment`] and evaluates complete program units
/// against it. Variables and functions declared in one submission remain
/// visible to later submissions on the same instance. Each instance is
/// independent; nothing is shared between shells.
///
/// Evaluation is synchronous and exclusive: one unit runs to completion or
/// failure before the next is accepted, and an instance must not be used
/// from more than one evaluation at a time.
///
/// # Example
/// ```
/// use shoal::Shell;
///
/// let mut shell = Shell::new();
///
/// assert_eq!(shell.submit("int x = 2 + 3;"), "5");
/// assert_eq!(shell.submit("x = x * 2; x;"), "10");
/// assert_eq!(shell.submit("x / 0;"), "Error on line 1: Division by zero.");
/// ```
pub struct Shell {
    env: Environment,
}

#[allow(clippy::new_without_default)]
impl Shell {
    /// Creates a shell with a fresh environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new(), }
    }

    /// Evaluates one complete, self-contained program unit.
    ///
    /// The unit is tokenized, parsed and evaluated against the shell's
    /// persistent environment. The returned text is the string rendering of
    /// the last computed value, or a human-readable error message.
    ///
    /// Failure semantics:
    /// - A lexical error aborts the whole unit before anything is parsed or
    ///   evaluated.
    /// - A statement dropped by parse recovery does not block the
    ///   well-formed statements around it; they still execute, but the
    ///   recovered error's message is returned so the caller sees it.
    /// - An evaluation error aborts the remainder of the unit. Side effects
    ///   of statements that already executed are kept.
    /// - A `return`, `break` or `continue` escaping the unit is an error.
    ///
    /// # Parameters
    /// - `unit`: The program text, joined into one string by the caller.
    ///
    /// # Returns
    /// The rendering of the unit's last value, or an error message.
    ///
    /// # Example
    /// ```
    /// use shoal::Shell;
    ///
    /// let mut shell = Shell::new();
    ///
    /// shell.submit("int square(int n) { return n * n; }");
    /// assert_eq!(shell.submit("square(7);"), "49");
    /// assert_eq!(shell.submit("square(1, 2);"),
    ///            "Error on line 1: Function 'square' expects 1 argument(s), got 2.");
    /// ```
    pub fn submit(&mut self, unit: &str) -> String {
        let tokens = match tokenize(unit) {
            Ok(tokens) => tokens,
            Err(error) => return error.to_string(),
        };

        let (program, recovered) = parse_program(&tokens);

        let mut interpreter = Interpreter::new(&mut self.env);
        let result = match interpreter.evaluate(&program) {
            Ok(Outcome::Normal(value)) => Ok(value),
            Ok(Outcome::Return { line, .. }) => Err(RuntimeError::ReturnOutsideFunction { line }),
            Ok(Outcome::Break { line }) => Err(RuntimeError::BreakOutsideLoop { line }),
            Ok(Outcome::Continue { line }) => Err(RuntimeError::ContinueOutsideLoop { line }),
            Err(error) => Err(error),
        };

        match result {
            Err(error) => error.to_string(),
            Ok(value) => match recovered.first() {
                Some(error) => error.to_string(),
                None => value.to_string(),
            },
        }
    }

    /// Gives read access to the shell's environment.
    ///
    /// Useful for embedders and tests that want to inspect interpreter
    /// state between submissions.
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.env
    }
}
