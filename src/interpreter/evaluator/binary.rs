use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, Outcome},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation.
    ///
    /// Operands are evaluated left then right. `&&` and `||` apply boolean
    /// coercion to both operands. Otherwise the operand pair selects the
    /// domain:
    ///
    /// - two strings support concatenation, equality and ordering;
    /// - two ints use integer arithmetic, with division by zero fatal;
    /// - two doubles, or a mixed int/double pair with the int promoted, use
    ///   floating arithmetic, with division by a near-zero divisor fatal;
    /// - two bools support equality only.
    ///
    /// Any other combination is a fatal operand error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value.
    pub(crate) fn eval_binary(&mut self,
                              op: BinaryOperator,
                              left: &Node,
                              right: &Node,
                              line: usize)
                              -> EvalResult<Outcome> {
        let left = self.eval_value(left)?;
        let right = self.eval_value(right)?;

        if let BinaryOperator::And | BinaryOperator::Or = op {
            let result = match op {
                BinaryOperator::And => left.truthy() && right.truthy(),
                _ => left.truthy() || right.truthy(),
            };
            return Ok(Outcome::Normal(Value::Bool(result)));
        }

        let value = match (&left, &right) {
            (Value::Str(a), Value::Str(b)) => eval_string_op(op, a, b, line)?,
            (Value::Int(a), Value::Int(b)) => eval_int_op(op, *a, *b, line)?,
            (Value::Double(_) | Value::Int(_), Value::Double(_) | Value::Int(_)) => {
                eval_double_op(op, as_double(&left), as_double(&right), line)?
            },
            (Value::Bool(a), Value::Bool(b)) => match op {
                BinaryOperator::Equal => Value::Bool(a == b),
                BinaryOperator::NotEqual => Value::Bool(a != b),
                _ => {
                    return Err(RuntimeError::InvalidOperand { details: format!("Operation '{op}' is not supported for booleans"),
                                                              line });
                },
            },
            _ => {
                return Err(RuntimeError::InvalidOperand { details: format!("Invalid operand types: {} {op} {}",
                                                                           left.kind(),
                                                                           right.kind()),
                                                          line });
            },
        };

        Ok(Outcome::Normal(value))
    }
}

/// Reads an int or double value as `f64` for promoted arithmetic.
#[allow(clippy::cast_precision_loss)]
fn as_double(value: &Value) -> f64 {
    match value {
        Value::Double(d) => *d,
        Value::Int(n) => *n as f64,
        _ => 0.0,
    }
}

/// Evaluates a binary operation over two strings.
///
/// `+` concatenates; `==`, `!=` and the four orderings compare
/// lexicographically. Arithmetic beyond concatenation is not supported for
/// strings.
fn eval_string_op(op: BinaryOperator, left: &str, right: &str, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
        BinaryOperator::Less => Ok(Value::Bool(left < right)),
        BinaryOperator::LessEqual => Ok(Value::Bool(left <= right)),
        BinaryOperator::Greater => Ok(Value::Bool(left > right)),
        BinaryOperator::GreaterEqual => Ok(Value::Bool(left >= right)),
        _ => {
            Err(RuntimeError::InvalidOperand { details: format!("Operation '{op}' is not supported for strings"),
                                               line })
        },
    }
}

/// Evaluates a binary operation over two integers.
///
/// Division truncates towards zero; a zero divisor is fatal.
fn eval_int_op(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Int(left + right)),
        BinaryOperator::Subtract => Ok(Value::Int(left - right)),
        BinaryOperator::Multiply => Ok(Value::Int(left * right)),
        BinaryOperator::Divide => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero { line })
            } else {
                Ok(Value::Int(left / right))
            }
        },
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
        BinaryOperator::Less => Ok(Value::Bool(left < right)),
        BinaryOperator::LessEqual => Ok(Value::Bool(left <= right)),
        BinaryOperator::Greater => Ok(Value::Bool(left > right)),
        BinaryOperator::GreaterEqual => Ok(Value::Bool(left >= right)),
        BinaryOperator::And | BinaryOperator::Or => unreachable!("handled before dispatch"),
    }
}

/// Evaluates a binary operation over two doubles.
///
/// A divisor within machine epsilon of zero is fatal.
fn eval_double_op(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Double(left + right)),
        BinaryOperator::Subtract => Ok(Value::Double(left - right)),
        BinaryOperator::Multiply => Ok(Value::Double(left * right)),
        BinaryOperator::Divide => {
            if right.abs() < f64::EPSILON {
                Err(RuntimeError::DivisionByZero { line })
            } else {
                Ok(Value::Double(left / right))
            }
        },
        BinaryOperator::Equal => Ok(Value::Bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
        BinaryOperator::Less => Ok(Value::Bool(left < right)),
        BinaryOperator::LessEqual => Ok(Value::Bool(left <= right)),
        BinaryOperator::Greater => Ok(Value::Bool(left > right)),
        BinaryOperator::GreaterEqual => Ok(Value::Bool(left >= right)),
        BinaryOperator::And | BinaryOperator::Or => unreachable!("handled before dispatch"),
    }
}
