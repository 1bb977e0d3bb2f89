use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, Outcome},
        value::{Type, Value},
    },
};

impl Interpreter<'_> {
    /// Evaluates a declaration or an assignment.
    ///
    /// The right-hand expression is evaluated first in every form. A
    /// declaration (declared type present) checks compatibility against the
    /// declared type, widens an int source into a double slot, and declares
    /// a new binding in the current scope. A re-assignment resolves an
    /// existing binding and either replaces the whole value after a check
    /// against the variable's declared type, or, for an array-index target,
    /// bounds-checks the index and replaces that one element after a check
    /// against the element's current type.
    ///
    /// Every assignment evaluates to the stored (possibly widened) value.
    ///
    /// # Parameters
    /// - `name`: Target variable name.
    /// - `declared`: Declared type for declarations, `None` otherwise.
    /// - `index`: Index expression for array element targets.
    /// - `value`: Right-hand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The assigned value.
    pub(crate) fn eval_assignment(&mut self,
                                  name: &str,
                                  declared: Option<Type>,
                                  index: Option<&Node>,
                                  value: &Node,
                                  line: usize)
                                  -> EvalResult<Outcome> {
        let value = self.eval_value(value)?;

        if let Some(declared_type) = declared {
            return self.declare(name, declared_type, value, line);
        }
        if let Some(index) = index {
            return self.assign_element(name, index, value, line);
        }
        self.assign_variable(name, value, line)
    }

    /// Declares a new variable in the current scope.
    fn declare(&mut self,
               name: &str,
               declared_type: Type,
               value: Value,
               line: usize)
               -> EvalResult<Outcome> {
        if !declared_type.is_assignable_from(value.kind()) {
            return Err(RuntimeError::TypeMismatch { expected: declared_type,
                                                    found: value.kind(),
                                                    line });
        }

        let stored = value.widened_to(declared_type);
        self.env
            .declare_variable(name, declared_type, stored.clone(), line)?;

        Ok(Outcome::Normal(stored))
    }

    /// Replaces the whole value of an existing binding.
    fn assign_variable(&mut self, name: &str, value: Value, line: usize) -> EvalResult<Outcome> {
        let variable = match self.env.get_variable_mut(name) {
            Some(variable) => variable,
            None => {
                return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line });
            },
        };

        if !variable.ty.is_assignable_from(value.kind()) {
            return Err(RuntimeError::TypeMismatch { expected: variable.ty,
                                                    found: value.kind(),
                                                    line });
        }

        let stored = value.widened_to(variable.ty);
        variable.value = stored.clone();

        Ok(Outcome::Normal(stored))
    }

    /// Replaces one element of an existing array binding.
    fn assign_element(&mut self,
                      name: &str,
                      index: &Node,
                      value: Value,
                      line: usize)
                      -> EvalResult<Outcome> {
        let index_value = self.eval_value(index)?;
        let Value::Int(i) = index_value else {
            return Err(RuntimeError::InvalidOperand { details: format!("Array index must be an integer, got {}",
                                                                       index_value.kind()),
                                                      line });
        };

        let variable = match self.env.get_variable_mut(name) {
            Some(variable) => variable,
            None => {
                return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line });
            },
        };

        let Value::Array(elements) = &mut variable.value else {
            return Err(RuntimeError::ExpectedArray { name: name.to_string(),
                                                     line });
        };

        let length = elements.len();
        let slot = usize::try_from(i)
            .ok()
            .and_then(|idx| elements.get_mut(idx))
            .ok_or(RuntimeError::IndexOutOfBounds { index: i,
                                                    length,
                                                    line })?;

        let element_type = slot.kind();
        if !element_type.is_assignable_from(value.kind()) {
            return Err(RuntimeError::TypeMismatch { expected: element_type,
                                                    found: value.kind(),
                                                    line });
        }

        let stored = value.widened_to(element_type);
        *slot = stored.clone();

        Ok(Outcome::Normal(stored))
    }
}
