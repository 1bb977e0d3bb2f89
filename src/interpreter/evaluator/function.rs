use crate::{
    ast::{FunctionDecl, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, Outcome},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a function call.
    ///
    /// The function is resolved by name first; calling an unknown function
    /// is fatal. All arguments are then evaluated left to right in the
    /// caller's current scope, before any callee scope exists. The argument
    /// count must equal the declared parameter count. One new scope is
    /// pushed for the call, each parameter is bound to its evaluated
    /// argument, and the body runs inside that scope. A body-level `return`
    /// supplies the call's result; a body that completes without one yields
    /// its last statement's value. The call scope is removed on every exit
    /// path before the result or a propagating error reaches the caller.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The call's result value.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Node],
                            line: usize)
                            -> EvalResult<Outcome> {
        let decl = match self.env.get_function(name) {
            Some(decl) => decl.clone(),
            None => {
                return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                           line });
            },
        };

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_value(argument)?);
        }

        if args.len() != decl.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: decl.params.len(),
                                                             found: args.len(),
                                                             line });
        }

        self.env.push_scope();
        let result = self.run_call(&decl, args, line);
        self.env.pop_scope();

        result.map(Outcome::Normal)
    }

    /// Binds parameters and runs the body inside the already-pushed call
    /// scope.
    ///
    /// Each argument must be compatible with its parameter's declared type,
    /// under the same exact-or-widening rule as variable declaration.
    fn run_call(&mut self, decl: &FunctionDecl, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        for ((param_name, param_type), value) in decl.params.iter().zip(args) {
            if !param_type.is_assignable_from(value.kind()) {
                return Err(RuntimeError::TypeMismatch { expected: *param_type,
                                                        found: value.kind(),
                                                        line });
            }
            self.env
                .declare_variable(param_name, *param_type, value.widened_to(*param_type), line)?;
        }

        match self.evaluate(&decl.body)? {
            Outcome::Normal(value) | Outcome::Return { value, .. } => Ok(value),
            Outcome::Break { line } => Err(RuntimeError::BreakOutsideLoop { line }),
            Outcome::Continue { line } => Err(RuntimeError::ContinueOutsideLoop { line }),
        }
    }
}
