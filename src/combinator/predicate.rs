//! Predicate combinators.

use tracing::trace;

use crate::function::Function;
use crate::value::Value;

/// Negates `predicate`.
///
/// The result is always a boolean: the negation of the predicate result's
/// truthiness for the same arguments.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, not};
///
/// let is_short_enough = Function::new("is_short_enough", 1, |arguments| {
///     Ok(Value::from(arguments.first().as_text().is_some_and(|text| text.len() <= 5)))
/// });
/// let is_long_enough = not(&is_short_enough);
///
/// assert_eq!(is_long_enough.call(args!["Hello"]), Ok(Value::from(false)));
/// assert_eq!(is_long_enough.call(args!["Hello World"]), Ok(Value::from(true)));
/// ```
pub fn not(predicate: &Function) -> Function {
    let arity = predicate.arity();
    let predicate = predicate.clone();
    Function::new("negated", arity, move |arguments| {
        Ok(Value::Bool(!predicate.call(arguments)?.is_truthy()))
    })
}

/// Calls `consequent` only when `predicate` holds for the same arguments.
///
/// When the predicate's result is falsy the returned function produces
/// [`Value::Absent`] and `consequent` is never invoked.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, when};
///
/// let is_even = Function::new("is_even", 1, |arguments| {
///     Ok(Value::from(arguments.first().as_int().is_some_and(|number| number % 2 == 0)))
/// });
/// let halve = Function::new("halve", 1, |arguments| {
///     Ok(arguments.first().as_int().map_or(Value::Absent, |number| Value::from(number / 2)))
/// });
///
/// let halve_even = when(&is_even, &halve);
/// assert_eq!(halve_even.call(args![10]), Ok(Value::from(5)));
/// assert_eq!(halve_even.call(args![7]), Ok(Value::Absent));
/// ```
pub fn when(predicate: &Function, consequent: &Function) -> Function {
    let arity = predicate.arity();
    let predicate = predicate.clone();
    let consequent = consequent.clone();
    Function::new("conditional", arity, move |arguments| {
        if predicate.call(arguments.clone())?.is_truthy() {
            return consequent.call(arguments);
        }
        trace!(
            predicate = predicate.name(),
            consequent = consequent.name(),
            "condition not met"
        );
        Ok(Value::Absent)
    })
}
