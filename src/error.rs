//! Error types for calling function values.
//!
//! The combinators themselves never validate their inputs: absent values
//! propagate silently, extra arguments are passed through. The only failures
//! are calling something that is not a function, and typed extraction of an
//! argument inside a function produced by [`lift`](crate::lift).

use thiserror::Error;

/// A dynamic value did not have the type a typed parameter expected.
///
/// # Examples
///
/// ```rust
/// use argshape::{FromValue, Value};
///
/// let mismatch = i64::from_value(Value::from("seven")).unwrap_err();
/// assert_eq!(mismatch.expected, "int");
/// assert_eq!(mismatch.found, "text");
/// assert_eq!(mismatch.to_string(), "expected int, found text");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct TypeMismatch {
    /// The kind the parameter accepts.
    pub expected: &'static str,
    /// The kind of the value that was supplied.
    pub found: &'static str,
}

impl TypeMismatch {
    /// Creates a new `TypeMismatch`.
    #[must_use]
    pub const fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }

    /// Attaches the call site: the function name and the zero-based
    /// position of the offending argument.
    #[must_use]
    pub fn in_call(self, function: &str, position: usize) -> Error {
        Error::ArgumentType {
            function: function.to_string(),
            position,
            source: self,
        }
    }
}

/// Errors raised while calling function values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A value that is not a function was called.
    #[error("{found} is not a function")]
    NotCallable {
        /// The kind of the value that was called.
        found: &'static str,
    },

    /// An argument could not be converted to the parameter's type.
    #[error("{function}: argument {position}: {source}")]
    ArgumentType {
        /// Name of the called function.
        function: String,
        /// Zero-based position of the argument.
        position: usize,
        /// What was expected and what was found.
        source: TypeMismatch,
    },

    /// A failure reported by a user-supplied function body.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a [`Error::Custom`] from any displayable message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argshape::Error;
    ///
    /// let error = Error::custom("division by zero");
    /// assert_eq!(error.to_string(), "division by zero");
    /// ```
    pub fn custom(message: impl std::fmt::Display) -> Self {
        Self::Custom(message.to_string())
    }
}

/// Result alias used by every function body.
pub type Result<T> = std::result::Result<T, Error>;
