use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::{
    ast::FunctionDecl,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Type, Value},
    },
};

/// A declared variable: its fixed type and its current value.
///
/// The stored value's kind always equals the declared type; integer values
/// are widened to doubles before being stored into a double slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The declared type, fixed for the variable's lifetime.
    pub ty:    Type,
    /// The current value.
    pub value: Value,
}

/// A single lexical binding frame.
///
/// Maps names to variables with unique keys in declaration-independent
/// order. A scope lives exactly as long as the block, function call or loop
/// that introduced it.
#[derive(Debug, Default)]
pub struct Scope {
    variables: BTreeMap<String, Variable>,
}

impl Scope {
    /// Checks whether a variable is declared in this scope.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Declares a new variable in this scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::VariableRedeclared`] when the name already
    /// exists in this scope.
    pub fn declare_variable(&mut self,
                            name: &str,
                            ty: Type,
                            value: Value,
                            line: usize)
                            -> EvalResult<()> {
        if self.has_variable(name) {
            return Err(RuntimeError::VariableRedeclared { name: name.to_string(),
                                                          line });
        }
        self.variables
            .insert(name.to_string(), Variable { ty, value });
        Ok(())
    }

    /// Looks up a variable in this scope.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Looks up a variable in this scope for mutation.
    pub fn get_variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.get_mut(name)
    }
}

/// The full interpreter state persisted across submissions.
///
/// An environment holds a stack of scopes plus a flat function table. The
/// first scope is the global scope: it is pushed at construction and never
/// removed, so the stack depth is always at least one. Declared variables
/// and functions survive between evaluation calls on the same instance.
///
/// # Example
/// ```
/// use shoal::interpreter::{
///     environment::Environment,
///     value::{Type, Value},
/// };
///
/// let mut env = Environment::new();
/// env.declare_variable("x", Type::Int, Value::Int(10), 1).unwrap();
///
/// let variable = env.get_variable("x").unwrap();
/// assert_eq!(variable.value, Value::Int(10));
/// assert_eq!(env.depth(), 1);
/// ```
#[derive(Debug)]
pub struct Environment {
    scope_stack: Vec<Scope>,
    functions:   HashMap<String, FunctionDecl>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates a new environment containing only the global scope.
    #[must_use]
    pub fn new() -> Self {
        let mut environment = Self { scope_stack: Vec::new(),
                                     functions:   HashMap::new(), };
        environment.push_scope();
        environment
    }

    /// Pushes a fresh scope on top of the stack.
    ///
    /// Used for brace blocks, function calls and `for` loop headers.
    pub fn push_scope(&mut self) {
        trace!(depth = self.scope_stack.len(), "push scope");
        self.scope_stack.push(Scope::default());
    }

    /// Removes the innermost scope.
    ///
    /// The global scope is never removed; popping it is an interpreter bug,
    /// not a user error.
    pub fn pop_scope(&mut self) {
        trace!(depth = self.scope_stack.len(), "pop scope");
        debug_assert!(self.scope_stack.len() > 1, "attempted to pop the global scope");
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Returns the current scope-stack depth. The global scope counts as 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Declares a variable in the current (innermost) scope.
    ///
    /// # Errors
    /// Returns [`RuntimeError::VariableRedeclared`] when the name is already
    /// declared in the current scope. Shadowing a name from an outer scope
    /// is allowed.
    pub fn declare_variable(&mut self,
                            name: &str,
                            ty: Type,
                            value: Value,
                            line: usize)
                            -> EvalResult<()> {
        trace!(%name, %ty, "declare variable");
        self.scope_stack
            .last_mut()
            .expect("scope stack holds at least the global scope")
            .declare_variable(name, ty, value, line)
    }

    /// Retrieves a variable, walking the scope stack innermost-to-outermost.
    ///
    /// Returns the first match, or `None` when the name is not bound in any
    /// active scope.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        trace!(%name, scopes = self.scope_stack.len(), "resolve variable");
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get_variable(name))
    }

    /// Retrieves a variable for mutation, innermost scope first.
    pub fn get_variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.scope_stack
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_variable_mut(name))
    }

    /// Registers a function in the flat function namespace.
    ///
    /// There is no overloading; re-declaring a name replaces the previous
    /// definition. The stored declaration is an owned tree independent of
    /// the parse tree it came from.
    pub fn declare_function(&mut self, decl: FunctionDecl) {
        trace!(name = %decl.name, params = decl.params.len(), "declare function");
        self.functions.insert(decl.name.clone(), decl);
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions.get(name)
    }
}
