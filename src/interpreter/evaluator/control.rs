use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, Outcome},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a sequence of statements as a block.
    ///
    /// Only real brace blocks push a scope; declaration groupings and the
    /// top-level program run in the surrounding scope. Statements run in
    /// order and the block yields the last statement's value, or void when
    /// empty. A propagating control-flow outcome or error still pops the
    /// scope this block pushed before continuing outward.
    ///
    /// # Parameters
    /// - `statements`: Statements inside the block.
    /// - `scoped`: Whether this block introduces a scope.
    ///
    /// # Returns
    /// The last statement's outcome.
    pub(crate) fn eval_block(&mut self, statements: &[Node], scoped: bool) -> EvalResult<Outcome> {
        if scoped {
            self.env.push_scope();
        }

        let result = self.eval_statements(statements);

        if scoped {
            self.env.pop_scope();
        }

        result
    }

    /// Runs statements in order, stopping at the first control-flow signal.
    pub(crate) fn eval_statements(&mut self, statements: &[Node]) -> EvalResult<Outcome> {
        let mut last = Value::Void;

        for statement in statements {
            match self.evaluate(statement)? {
                Outcome::Normal(value) => last = value,
                outcome => return Ok(outcome),
            }
        }

        Ok(Outcome::Normal(last))
    }

    /// Evaluates an `if` statement.
    ///
    /// The condition is evaluated and coerced to boolean; exactly one branch
    /// is evaluated. A false condition with no `else` yields void.
    pub(crate) fn eval_if(&mut self,
                          condition: &Node,
                          then_branch: &Node,
                          else_branch: Option<&Node>)
                          -> EvalResult<Outcome> {
        if self.eval_value(condition)?.truthy() {
            self.evaluate(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.evaluate(else_branch)
        } else {
            Ok(Outcome::Normal(Value::Void))
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-checked, with boolean coercion, before each
    /// iteration. `break` ends the loop immediately; `continue` skips the
    /// remainder of the body and re-checks the condition; `return`
    /// propagates outward. The loop yields the last body value.
    pub(crate) fn eval_while(&mut self, condition: &Node, body: &Node) -> EvalResult<Outcome> {
        let mut last = Value::Void;

        loop {
            if !self.eval_value(condition)?.truthy() {
                break;
            }

            match self.evaluate(body)? {
                Outcome::Normal(value) => last = value,
                Outcome::Break { .. } => break,
                Outcome::Continue { .. } => {},
                outcome @ Outcome::Return { .. } => return Ok(outcome),
            }
        }

        Ok(Outcome::Normal(last))
    }

    /// Evaluates a C-style `for` loop.
    ///
    /// One scope spans the entire loop, so header variables live across
    /// iterations and disappear when the loop exits by any path: normal
    /// completion, `break`, a propagating `return`, or an error.
    pub(crate) fn eval_for(&mut self,
                           init: Option<&Node>,
                           condition: Option<&Node>,
                           increment: Option<&Node>,
                           body: &Node)
                           -> EvalResult<Outcome> {
        self.env.push_scope();
        let result = self.run_for(init, condition, increment, body);
        self.env.pop_scope();
        result
    }

    /// The loop proper, separated so the header scope pops on every exit.
    ///
    /// The optional condition must evaluate to exactly a boolean; a false
    /// value ends the loop. `continue` falls through to the increment
    /// clause, `break` skips it.
    fn run_for(&mut self,
               init: Option<&Node>,
               condition: Option<&Node>,
               increment: Option<&Node>,
               body: &Node)
               -> EvalResult<Outcome> {
        if let Some(init) = init {
            match self.evaluate(init)? {
                Outcome::Normal(_) => {},
                outcome => return Ok(outcome),
            }
        }

        let mut last = Value::Void;

        loop {
            if let Some(condition) = condition {
                let flag = self.eval_value(condition)?
                               .as_bool(condition.line_number())?;
                if !flag {
                    break;
                }
            }

            match self.evaluate(body)? {
                Outcome::Normal(value) => last = value,
                Outcome::Break { .. } => break,
                Outcome::Continue { .. } => {},
                outcome @ Outcome::Return { .. } => return Ok(outcome),
            }

            if let Some(increment) = increment {
                match self.evaluate(increment)? {
                    Outcome::Normal(_) => {},
                    outcome => return Ok(outcome),
                }
            }
        }

        Ok(Outcome::Normal(last))
    }
}
