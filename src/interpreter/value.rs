use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The closed set of runtime types.
///
/// Every [`Value`] belongs to exactly one of these kinds, and every declared
/// variable is fixed to one of them for its whole lifetime. The only implicit
/// conversion between kinds is the int-to-double widening applied when an
/// integer value is stored into a double slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// The absence of a value; produced by statements that yield nothing.
    Void,
    /// A 64-bit signed integer.
    Int,
    /// A 64-bit floating-point number.
    Double,
    /// A boolean.
    Bool,
    /// A character string.
    String,
    /// An array of values.
    Array,
}

impl Type {
    /// Checks whether a value of `source` kind may be stored into a slot
    /// declared with this type.
    ///
    /// Compatibility is exact type equality, with one widening exception:
    /// an `Int` source may be stored into a `Double` slot.
    ///
    /// # Example
    /// ```
    /// use shoal::interpreter::value::Type;
    ///
    /// assert!(Type::Int.is_assignable_from(Type::Int));
    /// assert!(Type::Double.is_assignable_from(Type::Int));
    /// assert!(!Type::Int.is_assignable_from(Type::Double));
    /// assert!(!Type::String.is_assignable_from(Type::Bool));
    /// ```
    #[must_use]
    pub fn is_assignable_from(self, source: Self) -> bool {
        source == self || (self == Self::Double && source == Self::Int)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Void => "void",
            Self::Int => "int",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Array => "array",
        };
        write!(f, "{name}")
    }
}

/// Represents a runtime value.
///
/// This enum models everything an expression can evaluate to. Arrays own
/// their elements directly, so assigning an array copies it by value;
/// only an index assignment mutates a stored array in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value. Produced by declarations of functions, empty blocks, and
    /// `if` statements whose condition is false and which have no `else`.
    Void,
    /// A 64-bit signed integer value.
    Int(i64),
    /// A 64-bit floating-point value.
    Double(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string value.
    Str(String),
    /// An array of `Value` elements.
    Array(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl Value {
    /// Returns the [`Type`] this value belongs to.
    ///
    /// # Example
    /// ```
    /// use shoal::interpreter::value::{Type, Value};
    ///
    /// assert_eq!(Value::Int(3).kind(), Type::Int);
    /// assert_eq!(Value::Void.kind(), Type::Void);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Type {
        match self {
            Self::Void => Type::Void,
            Self::Int(_) => Type::Int,
            Self::Double(_) => Type::Double,
            Self::Bool(_) => Type::Bool,
            Self::Str(_) => Type::String,
            Self::Array(_) => Type::Array,
        }
    }

    /// Coerces the value to a boolean for use in conditions.
    ///
    /// - booleans are themselves,
    /// - integers and doubles are truthy when nonzero,
    /// - strings are truthy when non-empty and not the literal text `"false"`,
    /// - void and arrays are falsy.
    ///
    /// # Example
    /// ```
    /// use shoal::interpreter::value::Value;
    ///
    /// assert!(Value::Int(2).truthy());
    /// assert!(!Value::Double(0.0).truthy());
    /// assert!(!Value::Str("false".to_string()).truthy());
    /// assert!(Value::Str("yes".to_string()).truthy());
    /// assert!(!Value::Void.truthy());
    /// ```
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Double(d) => *d != 0.0,
            Self::Str(s) => !s.is_empty() && s != "false",
            Self::Void | Self::Array(_) => false,
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used where a condition must be exactly boolean rather than coerced,
    /// such as the condition clause of a `for` loop.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Widens the value to match a target slot type.
    ///
    /// The only conversion performed is `Int` to `Double` when the target is
    /// `Double`; every other combination returns the value unchanged. Callers
    /// are expected to have verified compatibility with
    /// [`Type::is_assignable_from`] first.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn widened_to(self, target: Type) -> Self {
        if target == Type::Double
           && let Self::Int(n) = self
        {
            return Self::Double(n as f64);
        }
        self
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, "]")
            },
        }
    }
}
