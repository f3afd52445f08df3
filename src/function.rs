//! Function values.
//!
//! A [`Function`] is an opaque callable over [`Args`] that also carries the
//! metadata the combinators need: a name for display, a declared arity, and
//! optionally the declared parameter names. Arity and parameter names are
//! supplied explicitly at construction, or generated by
//! [`lift`](crate::lift).

use std::fmt;
use std::rc::Rc;

use crate::args::Args;
use crate::error::Result;
use crate::value::Value;

type Body = dyn Fn(Args) -> Result<Value>;

/// A callable value with a declared arity.
///
/// Cloning is cheap and shares the body; two clones are
/// [`ptr_eq`](Function::ptr_eq).
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args};
///
/// let add = Function::new("add", 2, |arguments| {
///     let (left, right) = (arguments.get(0), arguments.get(1));
///     Ok(Value::from(left.as_int().unwrap_or(0) + right.as_int().unwrap_or(0)))
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.call(args![3, 4]), Ok(Value::from(7)));
/// ```
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    arity: usize,
    params: Option<Rc<[Rc<str>]>>,
    body: Rc<Body>,
}

impl Function {
    /// Creates a function with an explicit arity.
    pub fn new<F>(name: impl Into<Rc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(Args) -> Result<Value> + 'static,
    {
        Self {
            name: name.into(),
            arity,
            params: None,
            body: Rc::new(body),
        }
    }

    /// Creates a function whose parameters are all gathered into one rest
    /// sequence. Its declared arity is zero.
    pub fn variadic<F>(name: impl Into<Rc<str>>, body: F) -> Self
    where
        F: Fn(Args) -> Result<Value> + 'static,
    {
        Self::new(name, 0, body)
    }

    /// Creates a function with named parameters. The arity is the number of
    /// names; the names give the order used by
    /// [`spread_arg_props`](crate::spread_arg_props).
    pub fn with_params<F>(name: impl Into<Rc<str>>, params: &[&str], body: F) -> Self
    where
        F: Fn(Args) -> Result<Value> + 'static,
    {
        Self {
            params: Some(params.iter().map(|param| Rc::from(*param)).collect()),
            ..Self::new(name, params.len(), body)
        }
    }

    /// Returns a copy with a different declared arity.
    #[must_use]
    pub fn with_arity(&self, arity: usize) -> Self {
        Self {
            arity,
            ..self.clone()
        }
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the body.
    pub fn call(&self, args: Args) -> Result<Value> {
        (self.body)(args)
    }

    /// Calls the function with one argument.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the body.
    pub fn call1(&self, argument: impl Into<Value>) -> Result<Value> {
        self.call(Args::from_iter([argument.into()]))
    }

    /// The function's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared number of positional parameters.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Declared parameter names, if the function was built with them.
    pub fn params(&self) -> Option<&[Rc<str>]> {
        self.params.as_deref()
    }

    /// Returns `true` if both values share the same body.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[Function: {}]", self.name)
    }
}

static_assertions::assert_impl_all!(Function: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(Function: Send, Sync);
