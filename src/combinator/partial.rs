//! Partial application and argument reversal.
//!
//! ```text
//! partial(f, p)(l)       = f(p ++ l)
//! partial_right(f, p)(l) = f(l ++ p)
//! reverse_args(f)(a)     = f(reverse(a))
//! ```
//!
//! No arity checking happens here. Unfilled parameters of the target read
//! as absent; surplus arguments are passed through for the target's own
//! rest parameter to collect.

use crate::args::Args;
use crate::function::Function;

/// Presets the leading arguments of `function`.
///
/// The result's declared arity is the target's arity minus the number of
/// preset arguments, never below zero.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, partial};
///
/// let add = Function::new("add", 2, |arguments| {
///     Ok(Value::from(
///         arguments.get(0).as_int().unwrap_or(0) + arguments.get(1).as_int().unwrap_or(0),
///     ))
/// });
///
/// let add_three = partial(&add, args![3]);
/// let mapped: Vec<Value> = (1..=5)
///     .map(|value| add_three.call1(value).unwrap_or_default())
///     .collect();
/// assert_eq!(mapped, [4, 5, 6, 7, 8].map(Value::from));
/// ```
pub fn partial(function: &Function, preset: Args) -> Function {
    let arity = function.arity().saturating_sub(preset.len());
    let function = function.clone();
    Function::new("partially_applied", arity, move |later: Args| {
        function.call(preset.concat(&later))
    })
}

/// Presets the trailing arguments of `function`.
///
/// Later arguments come first, preset ones last. Because the target's
/// positional parameters are filled left to right, presets only land on
/// the last parameters when exactly the right number of later arguments is
/// supplied.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, partial_right};
///
/// let show = Function::variadic("show", |arguments| Ok(Value::List(arguments)));
/// let with_last = partial_right(&show, args!["z:last"]);
///
/// assert_eq!(with_last.call(args![1, 2]), Ok(Value::from(args![1, 2, "z:last"])));
/// assert_eq!(with_last.call(args![1]), Ok(Value::from(args![1, "z:last"])));
/// ```
pub fn partial_right(function: &Function, preset: Args) -> Function {
    let arity = function.arity().saturating_sub(preset.len());
    let function = function.clone();
    Function::new("partially_applied", arity, move |later: Args| {
        function.call(later.concat(&preset))
    })
}

/// Calls `function` with its arguments in reverse order.
///
/// Applying it twice restores the original argument order.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, reverse_args};
///
/// let show = Function::variadic("show", |arguments| Ok(Value::List(arguments)));
///
/// assert_eq!(reverse_args(&show).call(args![1, 2, 3]), Ok(Value::from(args![3, 2, 1])));
/// ```
pub fn reverse_args(function: &Function) -> Function {
    let arity = function.arity();
    let function = function.clone();
    Function::new("args_reversed", arity, move |arguments: Args| {
        function.call(arguments.reversed())
    })
}
