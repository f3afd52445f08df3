//! Basic argument adapters.
//!
//! - [`unary`]: keep only the first argument
//! - [`identity`]: return the first argument
//! - [`constant`]: ignore all arguments and return a fixed value
//! - [`spread_args`]: spread one list argument into positional arguments
//! - [`gather_args`]: gather positional arguments into one list argument

use crate::args::Args;
use crate::function::Function;
use crate::value::Value;

/// Restricts `function` to its first argument.
///
/// The returned function has arity 1. Every argument past the first is
/// dropped; with no arguments at all, `function` receives one absent value.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, unary};
///
/// // Reports how many arguments it actually received.
/// let count = Function::variadic("count", |arguments| {
///     Ok(Value::from(i64::try_from(arguments.len()).unwrap_or(i64::MAX)))
/// });
///
/// assert_eq!(count.call(args!["1", 1, args!["1"]]), Ok(Value::from(3)));
/// assert_eq!(unary(&count).call(args!["1", 1, args!["1"]]), Ok(Value::from(1)));
/// ```
pub fn unary(function: &Function) -> Function {
    let function = function.clone();
    Function::new("only_one_arg", 1, move |arguments| {
        function.call1(arguments.first())
    })
}

/// The identity function: returns its first argument.
///
/// # Examples
///
/// ```rust
/// use argshape::{Value, args, identity};
///
/// assert_eq!(identity().call(args!["Hello World"]), Ok(Value::from("Hello World")));
/// assert_eq!(identity().call(args![]), Ok(Value::Absent));
/// ```
pub fn identity() -> Function {
    Function::new("identity", 1, |arguments| Ok(arguments.first()))
}

/// Creates a function that ignores its arguments and returns `value`.
///
/// # Examples
///
/// ```rust
/// use argshape::{Value, args, constant};
///
/// let always_two = constant(2);
/// assert_eq!(always_two.arity(), 0);
/// assert_eq!(always_two.call(args!["ignored", 1]), Ok(Value::from(2)));
/// ```
pub fn constant(value: impl Into<Value>) -> Function {
    let value = value.into();
    Function::new("value", 0, move |_| Ok(value.clone()))
}

/// Adapts `function` to receive its positional arguments as one list.
///
/// Also known as `apply`. A list argument is spread into positional
/// arguments; an absent argument spreads to nothing; any other value is
/// passed through as the only argument.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, spread_args};
///
/// let add = Function::new("add", 2, |arguments| {
///     Ok(Value::from(
///         arguments.get(0).as_int().unwrap_or(0) + arguments.get(1).as_int().unwrap_or(0),
///     ))
/// });
///
/// let spread = spread_args(&add);
/// assert_eq!(spread.call(args![args![3, 4]]), Ok(Value::from(7)));
/// ```
pub fn spread_args(function: &Function) -> Function {
    let function = function.clone();
    Function::new("spread_fn", 1, move |arguments| match arguments.first() {
        Value::List(spread) => function.call(spread),
        Value::Absent => function.call(Args::new()),
        other => function.call1(other),
    })
}

/// Adapts `function` that expects a single list to receive positional
/// arguments instead.
///
/// Also known as `unapply`. The inverse of [`spread_args`].
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, gather_args};
///
/// let combine_first_two = Function::new("combine_first_two", 1, |arguments| {
///     let list = arguments.first();
///     let pair = list.as_list().cloned().unwrap_or_default();
///     Ok(Value::from(pair.get(0).as_int().unwrap_or(0) + pair.get(1).as_int().unwrap_or(0)))
/// });
///
/// let gathered = gather_args(&combine_first_two);
/// assert_eq!(gathered.call(args![1, 2]), Ok(Value::from(3)));
/// ```
pub fn gather_args(function: &Function) -> Function {
    let function = function.clone();
    Function::variadic("gathered_fn", move |arguments| {
        function.call1(Value::List(arguments))
    })
}
