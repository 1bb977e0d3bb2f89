use crate::{
    ast::{Node, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, Outcome},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a unary operation.
    ///
    /// Negation accepts int and double operands, logical not accepts bool.
    /// The four increment/decrement forms require the operand to be a bare
    /// variable reference of int or double type: they mutate the bound
    /// variable in place and differ only in whether the pre- or
    /// post-mutation value becomes the result.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `operand`: Operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value.
    pub(crate) fn eval_unary(&mut self,
                             op: UnaryOperator,
                             operand: &Node,
                             line: usize)
                             -> EvalResult<Outcome> {
        match op {
            UnaryOperator::Negate => {
                let value = self.eval_value(operand)?;
                match value {
                    Value::Int(n) => Ok(Outcome::Normal(Value::Int(-n))),
                    Value::Double(d) => Ok(Outcome::Normal(Value::Double(-d))),
                    _ => {
                        Err(RuntimeError::InvalidOperand { details: format!("Invalid operand type {} for unary '-'",
                                                                            value.kind()),
                                                          line })
                    },
                }
            },

            UnaryOperator::LogicalNot => {
                let value = self.eval_value(operand)?;
                match value {
                    Value::Bool(b) => Ok(Outcome::Normal(Value::Bool(!b))),
                    _ => {
                        Err(RuntimeError::InvalidOperand { details: format!("Invalid operand type {} for unary '!'",
                                                                            value.kind()),
                                                          line })
                    },
                }
            },

            UnaryOperator::PreIncrement
            | UnaryOperator::PostIncrement
            | UnaryOperator::PreDecrement
            | UnaryOperator::PostDecrement => self.eval_step(op, operand, line),
        }
    }

    /// Applies an in-place increment or decrement to a variable.
    fn eval_step(&mut self, op: UnaryOperator, operand: &Node, line: usize) -> EvalResult<Outcome> {
        let delta: i64 = match op {
            UnaryOperator::PreIncrement | UnaryOperator::PostIncrement => 1,
            _ => -1,
        };
        let yields_updated = matches!(op,
                                      UnaryOperator::PreIncrement | UnaryOperator::PreDecrement);

        let Node::Variable { name, .. } = operand else {
            return Err(RuntimeError::InvalidOperand { details: format!("'{op}' requires a variable reference"),
                                                      line });
        };

        let variable = match self.env.get_variable_mut(name) {
            Some(variable) => variable,
            None => {
                return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                           line });
            },
        };

        let result = match &mut variable.value {
            Value::Int(n) => {
                let old = *n;
                *n = old + delta;
                Value::Int(if yields_updated { *n } else { old })
            },
            #[allow(clippy::cast_precision_loss)]
            Value::Double(d) => {
                let old = *d;
                *d = old + delta as f64;
                Value::Double(if yields_updated { *d } else { old })
            },
            other => {
                return Err(RuntimeError::InvalidOperand { details: format!("Invalid operand type {} for '{op}'",
                                                                           other.kind()),
                                                          line });
            },
        };

        Ok(Outcome::Normal(result))
    }
}
