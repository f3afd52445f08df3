//! The combinators as first-class function values.
//!
//! Each function here returns a [`Function`] that performs the combinator of
//! the same name, so that combinators can themselves be partially applied,
//! curried, or handed to other combinators:
//!
//! ```rust
//! use argshape::{Function, Value, args, lifted, partial_right, uncurry};
//!
//! let is_short_enough = Function::new("is_short_enough", 1, |arguments| {
//!     Ok(Value::from(arguments.first().as_text().is_some_and(|text| text.len() <= 5)))
//! });
//! let shout = Function::new("shout", 1, |arguments| {
//!     Ok(Value::from(arguments.first().to_string().to_uppercase()))
//! });
//!
//! // shout_if(predicate, message) = when(predicate, shout)(message)
//! let shout_if = uncurry(&partial_right(&lifted::when(), args![shout]));
//!
//! assert_eq!(
//!     shout_if.call(args![is_short_enough.clone(), "Hello"]),
//!     Ok(Value::from("HELLO"))
//! );
//! assert_eq!(
//!     shout_if.call(args![is_short_enough, "Hello World"]),
//!     Ok(Value::Absent)
//! );
//! ```
//!
//! Wherever a combinator expects a function and receives something else,
//! the lifted form fails with [`Error::NotCallable`](crate::Error::NotCallable).

use crate::args::Args;
use crate::error::Result;
use crate::function::Function;
use crate::value::Value;

fn function_at(arguments: &Args, index: usize) -> Result<Function> {
    arguments.get(index).to_function()
}

/// An explicit arity at `index`, when one was given as a non-negative
/// integer.
fn arity_at(arguments: &Args, index: usize) -> Option<usize> {
    arguments
        .get(index)
        .as_int()
        .and_then(|arity| usize::try_from(arity).ok())
}

fn lift_unary(name: &str, combinator: fn(&Function) -> Function) -> Function {
    Function::new(name, 1, move |arguments| {
        Ok(Value::Function(combinator(&function_at(&arguments, 0)?)))
    })
}

fn lift_partial(name: &str, combinator: fn(&Function, Args) -> Function) -> Function {
    Function::new(name, 1, move |arguments| {
        let function = function_at(&arguments, 0)?;
        let preset: Args = arguments.into_iter().skip(1).collect();
        Ok(Value::Function(combinator(&function, preset)))
    })
}

fn lift_with_arity(
    name: &str,
    combinator: fn(&Function, usize) -> Function,
    default_arity: fn(&Function) -> usize,
) -> Function {
    Function::new(name, 1, move |arguments| {
        let function = function_at(&arguments, 0)?;
        let arity = arity_at(&arguments, 1).unwrap_or_else(|| default_arity(&function));
        Ok(Value::Function(combinator(&function, arity)))
    })
}

/// `unary(f)`.
pub fn unary() -> Function {
    lift_unary("unary", super::basic::unary)
}

/// `identity(v)`.
pub fn identity() -> Function {
    super::basic::identity()
}

/// `constant(v)`.
pub fn constant() -> Function {
    Function::new("constant", 1, |arguments| {
        Ok(Value::Function(super::basic::constant(arguments.first())))
    })
}

/// `spread_args(f)`.
pub fn spread_args() -> Function {
    lift_unary("spread_args", super::basic::spread_args)
}

/// `gather_args(f)`.
pub fn gather_args() -> Function {
    lift_unary("gather_args", super::basic::gather_args)
}

/// `partial(f, ...preset)`.
pub fn partial() -> Function {
    lift_partial("partial", super::partial::partial)
}

/// `partial_right(f, ...preset)`.
pub fn partial_right() -> Function {
    lift_partial("partial_right", super::partial::partial_right)
}

/// `reverse_args(f)`.
pub fn reverse_args() -> Function {
    lift_unary("reverse_args", super::partial::reverse_args)
}

/// `curry(f, arity?)`. Without an integer arity the declared one is used.
pub fn curry() -> Function {
    lift_with_arity("curry", super::curry::curry_with_arity, Function::arity)
}

/// `loose_curry(f, arity?)`. Without an integer arity the declared one is
/// used.
pub fn loose_curry() -> Function {
    lift_with_arity("loose_curry", super::curry::loose_curry_with_arity, Function::arity)
}

/// `uncurry(f)`.
pub fn uncurry() -> Function {
    lift_unary("uncurry", super::curry::uncurry)
}

/// `not(predicate)`.
pub fn not() -> Function {
    lift_unary("not", super::predicate::not)
}

/// `when(predicate, consequent)`.
pub fn when() -> Function {
    Function::new("when", 2, |arguments| {
        let condition = function_at(&arguments, 0)?;
        let consequent = function_at(&arguments, 1)?;
        Ok(Value::Function(super::predicate::when(&condition, &consequent)))
    })
}

/// `partial_props(f, preset)`. A non-record preset contributes no fields.
#[cfg(feature = "props")]
pub fn partial_props() -> Function {
    Function::new("partial_props", 2, |arguments| {
        let function = function_at(&arguments, 0)?;
        let preset = arguments.get(1).as_record().cloned().unwrap_or_default();
        Ok(Value::Function(super::props::partial_props(&function, preset)))
    })
}

/// `curry_props(f, arity?)`. Without an integer arity one field is awaited.
#[cfg(feature = "props")]
pub fn curry_props() -> Function {
    lift_with_arity("curry_props", super::props::curry_props_with_arity, |_| 1)
}

/// `spread_arg_props(f, order?)`. Without a list of names the declared
/// parameter names are used; non-text entries of the list are skipped.
#[cfg(feature = "props")]
pub fn spread_arg_props() -> Function {
    use super::props;

    Function::new("spread_arg_props", 1, |arguments| {
        let function = function_at(&arguments, 0)?;
        let spread = match arguments.get(1) {
            Value::List(order) => {
                let names: Vec<&str> = order.iter().filter_map(Value::as_text).collect();
                props::spread_arg_props_with_order(&function, &names)
            }
            _ => props::spread_arg_props(&function),
        };
        Ok(Value::Function(spread))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::error::Error;
    use rstest::rstest;

    fn sum() -> Function {
        Function::variadic("sum", |numbers| {
            Ok(Value::from(
                numbers.iter().filter_map(Value::as_int).sum::<i64>(),
            ))
        })
    }

    #[rstest]
    fn test_lifted_partial_takes_rest_as_preset() {
        let add_three_and_four = lifted_call(&partial(), args![sum(), 3, 4]);
        assert_eq!(add_three_and_four.call(args![10]), Ok(Value::from(17)));
    }

    #[rstest]
    fn test_lifted_curry_with_explicit_arity() {
        let curried = lifted_call(&curry(), args![sum(), 2]);
        let result = Value::from(curried).call1(1).and_then(|next| next.call1(2));
        assert_eq!(result, Ok(Value::from(3)));
    }

    #[rstest]
    fn test_lifted_curry_with_non_integer_arity_uses_declared() {
        let add = sum().with_arity(2);
        let curried = lifted_call(&curry(), args![add, "two"]);
        assert!(curried.call1(1).is_ok_and(|next| next.is_function()));
    }

    #[rstest]
    #[case(unary())]
    #[case(reverse_args())]
    #[case(not())]
    #[case(uncurry())]
    fn test_lifted_rejects_non_function(#[case] combinator: Function) {
        assert_eq!(
            combinator.call(args![5]),
            Err(Error::NotCallable { found: "int" })
        );
    }

    #[rstest]
    fn test_curry_of_lifted_partial() {
        // curry(partial, 3)(sum)(1)(2) = partial(sum, 1, 2)
        let curried = Value::from(crate::combinator::curry::curry_with_arity(&partial(), 3));
        let partially = curried
            .call1(sum())
            .and_then(|next| next.call1(1))
            .and_then(|next| next.call1(2))
            .unwrap();
        assert_eq!(partially.call(args![3]), Ok(Value::from(6)));
    }

    fn lifted_call(combinator: &Function, arguments: Args) -> Function {
        combinator
            .call(arguments)
            .and_then(|value| value.to_function())
            .unwrap()
    }
}
