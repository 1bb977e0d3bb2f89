/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a finite sequence of
/// tokens, each stamped with its line and column. This is the first stage of
/// interpretation and it either consumes the whole buffer or aborts on the
/// first lexical error.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles numeric, boolean and string literals, keywords, identifiers,
///   and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of declarations,
/// statements and expressions. Panic-mode recovery isolates a malformed
/// statement so the rest of a unit still parses.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Implements the operator precedence ladder with one-token lookahead.
/// - Recovers from statement-level errors and collects them for reporting.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// mutates the environment, and produces values. Non-local control flow
/// (`return`, `break`, `continue`) is propagated as an explicit outcome
/// rather than through host unwinding.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Enforces declared-type compatibility and numeric promotion rules.
/// - Reports runtime errors such as division by zero or unbound names.
pub mod evaluator;
/// The environment module holds the interpreter state.
///
/// Declares the scope stack and function table that persist across
/// submissions, together with the variable representation.
///
/// # Responsibilities
/// - Maintains the stack of lexical scopes, global scope at the bottom.
/// - Resolves names innermost-to-outermost.
/// - Stores registered functions in one flat namespace.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the closed set of runtime types and values used during
/// execution, along with type queries, truthiness coercion, widening, and
/// string rendering.
///
/// # Responsibilities
/// - Defines the `Value` enum and the matching `Type` kinds.
/// - Implements truthiness coercion and int-to-double widening.
/// - Renders values for shell output.
pub mod value;
