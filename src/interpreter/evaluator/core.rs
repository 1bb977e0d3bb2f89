use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The result of evaluating one node.
///
/// Most nodes complete normally and carry a value. `return`, `break` and
/// `continue` instead produce a control-flow signal that callers propagate
/// explicitly until the nearest enclosing function call or loop consumes
/// it. This keeps every unwind path, and the scope cleanup it owes, visible
/// in ordinary control flow.
///
/// The control variants carry the source line of the statement that raised
/// them, so a signal that escapes every matching construct can still be
/// reported as an error with a position.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Evaluation completed and produced a value.
    Normal(Value),
    /// A `return` is unwinding towards the nearest enclosing call.
    Return {
        /// The returned value; void for a bare `return;`.
        value: Value,
        /// Line of the `return` statement.
        line:  usize,
    },
    /// A `break` is unwinding towards the nearest enclosing loop.
    Break {
        /// Line of the `break` statement.
        line: usize,
    },
    /// A `continue` is unwinding towards the nearest enclosing loop.
    Continue {
        /// Line of the `continue` statement.
        line: usize,
    },
}

/// A tree-walking interpreter over a borrowed [`Environment`].
///
/// The interpreter holds no state of its own; everything lives in the
/// environment, which is passed in explicitly so independent instances can
/// coexist and tests stay deterministic. One interpreter evaluates one
/// submitted unit at a time, synchronously, to completion or failure.
///
/// # Example
/// ```
/// use shoal::{
///     ast::Node,
///     interpreter::{
///         environment::Environment,
///         evaluator::core::{Interpreter, Outcome},
///         value::Value,
///     },
/// };
///
/// let mut env = Environment::new();
/// let mut interpreter = Interpreter::new(&mut env);
///
/// let node = Node::Literal { value: Value::Int(7),
///                            line:  1, };
///
/// let outcome = interpreter.evaluate(&node).unwrap();
/// assert_eq!(outcome, Outcome::Normal(Value::Int(7)));
/// ```
pub struct Interpreter<'env> {
    pub(crate) env: &'env mut Environment,
}

impl<'env> Interpreter<'env> {
    /// Creates an interpreter operating on the given environment.
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    /// Evaluates a single AST node.
    ///
    /// This is the main dispatch point: exactly one rule per node kind.
    /// Errors abort evaluation of the whole submitted unit; control-flow
    /// outcomes propagate to the nearest construct that consumes them.
    ///
    /// # Parameters
    /// - `node`: The node to evaluate.
    ///
    /// # Returns
    /// The node's [`Outcome`].
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<Outcome> {
        match node {
            Node::Literal { value, .. } => Ok(Outcome::Normal(value.clone())),
            Node::Variable { name, line } => self.eval_variable(name, *line),
            Node::Array { elements, .. } => self.eval_array(elements),
            Node::ArrayAccess { name, index, line } => self.eval_array_access(name, index, *line),
            Node::UnaryOp { op, operand, line } => self.eval_unary(*op, operand, *line),
            Node::BinOp { op, left, right, line } => self.eval_binary(*op, left, right, *line),
            Node::Assignment { name,
                               declared,
                               index,
                               value,
                               line, } => {
                self.eval_assignment(name, *declared, index.as_deref(), value, *line)
            },
            Node::Block { statements, scoped, .. } => self.eval_block(statements, *scoped),
            Node::If { condition,
                       then_branch,
                       else_branch,
                       .. } => self.eval_if(condition, then_branch, else_branch.as_deref()),
            Node::While { condition, body, .. } => self.eval_while(condition, body),
            Node::For { init,
                        condition,
                        increment,
                        body,
                        .. } => {
                self.eval_for(init.as_deref(), condition.as_deref(), increment.as_deref(), body)
            },
            Node::Function(decl) => {
                self.env.declare_function(decl.clone());
                Ok(Outcome::Normal(Value::Void))
            },
            Node::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval_value(expr)?,
                    None => Value::Void,
                };
                Ok(Outcome::Return { value, line: *line })
            },
            Node::Break { line } => Ok(Outcome::Break { line: *line }),
            Node::Continue { line } => Ok(Outcome::Continue { line: *line }),
            Node::Call { name, arguments, line } => self.eval_call(name, arguments, *line),
        }
    }

    /// Evaluates a node that must produce a value.
    ///
    /// Operand positions (conditions, indices, arguments, right-hand sides)
    /// cannot absorb control flow, so a `return`, `break` or `continue`
    /// surfacing here is reported as escaping its matching construct.
    ///
    /// # Parameters
    /// - `node`: Expression to evaluate.
    ///
    /// # Returns
    /// The evaluated `Value`.
    pub(crate) fn eval_value(&mut self, node: &Node) -> EvalResult<Value> {
        match self.evaluate(node)? {
            Outcome::Normal(value) => Ok(value),
            Outcome::Return { line, .. } => Err(RuntimeError::ReturnOutsideFunction { line }),
            Outcome::Break { line } => Err(RuntimeError::BreakOutsideLoop { line }),
            Outcome::Continue { line } => Err(RuntimeError::ContinueOutsideLoop { line }),
        }
    }

    /// Evaluates a variable reference.
    ///
    /// The nearest binding is returned as a copy; reading an unbound name is
    /// fatal.
    fn eval_variable(&mut self, name: &str, line: usize) -> EvalResult<Outcome> {
        match self.env.get_variable(name) {
            Some(variable) => Ok(Outcome::Normal(variable.value.clone())),
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Evaluates an array literal.
    ///
    /// Element expressions are evaluated left to right into a new array
    /// value.
    fn eval_array(&mut self, elements: &[Node]) -> EvalResult<Outcome> {
        let mut values = Vec::with_capacity(elements.len());

        for element in elements {
            values.push(self.eval_value(element)?);
        }

        Ok(Outcome::Normal(Value::Array(values)))
    }

    /// Evaluates an array access expression.
    ///
    /// The named variable must hold an array, the index must evaluate to an
    /// integer within `0 <= i < length`, and the result is a copy of the
    /// selected element.
    fn eval_array_access(&mut self, name: &str, index: &Node, line: usize) -> EvalResult<Outcome> {
        let variable = match self.env.get_variable(name) {
            Some(variable) => variable,
            None => {
                return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line });
            },
        };

        let Value::Array(elements) = variable.value.clone() else {
            return Err(RuntimeError::ExpectedArray { name: name.to_string(),
                                                     line });
        };

        let index_value = self.eval_value(index)?;
        let Value::Int(i) = index_value else {
            return Err(RuntimeError::InvalidOperand { details: format!("Array index must be an integer, got {}",
                                                                       index_value.kind()),
                                                      line });
        };

        usize::try_from(i)
            .ok()
            .and_then(|idx| elements.get(idx))
            .cloned()
            .map(Outcome::Normal)
            .ok_or(RuntimeError::IndexOutOfBounds { index: i,
                                                    length: elements.len(),
                                                    line })
    }
}
