use crate::interpreter::value::Type;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable whose name already exists in the same scope.
    VariableRedeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value's type did not match the declared type of its target slot.
    TypeMismatch {
        /// The type the slot requires.
        expected: Type,
        /// The type of the value being stored.
        found:    Type,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to operands outside its domain.
    InvalidOperand {
        /// Details about the invalid operand.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A boolean value was required, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An indexed variable does not hold an array.
    ExpectedArray {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access an array element outside the allowed bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The length of the array.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `break` propagated outside of any loop.
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `continue` propagated outside of any loop.
    ContinueOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` propagated outside of any function call.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::VariableRedeclared { name, line } => write!(f,
                                                              "Error on line {line}: Variable '{name}' is already declared in this scope."),

            Self::TypeMismatch { expected,
                                 found,
                                 line, } => write!(f,
                                                   "Error on line {line}: Type mismatch: cannot assign {found} to {expected}."),

            Self::InvalidOperand { details, line } => {
                write!(f, "Error on line {line}: {details}.")
            },
            Self::ExpectedBoolean { line } => {
                write!(f, "Error on line {line}: Expected a boolean condition.")
            },
            Self::ExpectedArray { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not an array.")
            },
            Self::IndexOutOfBounds { index, length, line } => write!(f,
                                                                     "Error on line {line}: Index {index} is out of bounds for array of length {length}."),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' expects {expected} argument(s), got {found}."),

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::BreakOutsideLoop { line } => {
                write!(f, "Error on line {line}: 'break' outside of a loop.")
            },
            Self::ContinueOutsideLoop { line } => {
                write!(f, "Error on line {line}: 'continue' outside of a loop.")
            },
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside of a function.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
