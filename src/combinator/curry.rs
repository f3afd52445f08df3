//! Currying and uncurrying.
//!
//! A curried chain carries its accumulated arguments in an immutable
//! [`Curried`] state. Each call produces either a fresh state wrapped in a new
//! function, or, once the accumulated count reaches the target arity, the
//! single invocation of the target.
//!
//! ```text
//! curry(f)(a)(b)(c)        = f(a, b, c)          arity 3
//! loose_curry(f)(a, b)(c)  = f(a, b, c)
//! uncurry(g)(a, b, c)      = g(a)(b)(c)
//! ```

use tracing::trace;

use crate::args::Args;
use crate::error::Result;
use crate::function::Function;
use crate::value::Value;

/// How many values a single call contributes to the accumulated arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Intake {
    /// Exactly one: the first argument, absent if none was given.
    One,
    /// Every argument given.
    All,
}

#[derive(Clone)]
struct Curried {
    target: Function,
    arity: usize,
    intake: Intake,
    accumulated: Args,
}

impl Curried {
    fn into_function(self) -> Function {
        let declared = match self.intake {
            Intake::One => 1,
            Intake::All => self.arity.saturating_sub(self.accumulated.len()),
        };
        Function::new("curried", declared, move |arguments| self.step(arguments))
    }

    fn step(&self, arguments: Args) -> Result<Value> {
        let mut accumulated = self.accumulated.clone();
        match self.intake {
            Intake::One => accumulated.push(arguments.first()),
            Intake::All => accumulated.extend(arguments),
        }

        if accumulated.len() >= self.arity {
            trace!(
                target_function = self.target.name(),
                accumulated = accumulated.len(),
                arity = self.arity,
                "curried chain complete"
            );
            return self.target.call(accumulated);
        }

        trace!(
            target_function = self.target.name(),
            accumulated = accumulated.len(),
            arity = self.arity,
            "curried chain waiting"
        );
        let next = Self {
            accumulated,
            ..self.clone()
        };
        Ok(Value::Function(next.into_function()))
    }
}

/// Curries `function` using its declared arity.
///
/// See [`curry_with_arity`].
pub fn curry(function: &Function) -> Function {
    curry_with_arity(function, function.arity())
}

/// Curries `function`, waiting for `arity` single-argument calls.
///
/// Each call takes exactly one value (extra arguments are ignored, a call
/// with none contributes absent). Until `arity` values have accumulated the
/// result is another function; the target is then called once with all of
/// them. Intermediate functions can be reused: each call forks its own
/// chain.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, curry_with_arity};
///
/// let sum = Function::variadic("sum", |numbers| {
///     Ok(Value::from(numbers.iter().filter_map(Value::as_int).sum::<i64>()))
/// });
///
/// let curried_sum = curry_with_arity(&sum, 5);
/// let mut step = Value::from(curried_sum);
/// for number in 1..=5 {
///     step = step.call1(number)?;
/// }
/// assert_eq!(step, Value::from(15));
///
/// let partway = Value::from(curry_with_arity(&sum, 5)).call1(1)?.call1(2)?;
/// assert!(partway.is_function());
/// # Ok::<(), argshape::Error>(())
/// ```
pub fn curry_with_arity(function: &Function, arity: usize) -> Function {
    Curried {
        target: function.clone(),
        arity,
        intake: Intake::One,
        accumulated: Args::new(),
    }
    .into_function()
}

/// Curries `function` using its declared arity, accepting any number of
/// values per call.
///
/// See [`loose_curry_with_arity`].
pub fn loose_curry(function: &Function) -> Function {
    loose_curry_with_arity(function, function.arity())
}

/// Curries `function`, accepting one or more values per call until at
/// least `arity` values have accumulated.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, loose_curry_with_arity};
///
/// let sum = Function::variadic("sum", |numbers| {
///     Ok(Value::from(numbers.iter().filter_map(Value::as_int).sum::<i64>()))
/// });
///
/// let curried_sum = Value::from(loose_curry_with_arity(&sum, 5));
/// let total = curried_sum
///     .call(args![1])?
///     .call(args![2, 3])?
///     .call(args![4, 5])?;
/// assert_eq!(total, Value::from(15));
/// # Ok::<(), argshape::Error>(())
/// ```
pub fn loose_curry_with_arity(function: &Function, arity: usize) -> Function {
    Curried {
        target: function.clone(),
        arity,
        intake: Intake::All,
        accumulated: Args::new(),
    }
    .into_function()
}

/// Collapses a chain of single-argument functions into one call.
///
/// The arguments are fed one at a time: the first to `function`, each
/// following one to the previous result. With no arguments the result is
/// `function` itself.
///
/// # Errors
///
/// The returned function fails with [`Error::NotCallable`] when an
/// intermediate result is not a function but arguments remain.
///
/// [`Error::NotCallable`]: crate::Error::NotCallable
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, curry, uncurry};
///
/// let join = Function::new("join", 3, |parts| {
///     Ok(Value::from(parts.iter().map(ToString::to_string).collect::<String>()))
/// });
///
/// let uncurried = uncurry(&curry(&join));
/// assert_eq!(uncurried.call(args!["a", "b", "c"]), Ok(Value::from("abc")));
/// ```
pub fn uncurry(function: &Function) -> Function {
    let function = function.clone();
    Function::variadic("uncurried", move |arguments| {
        arguments
            .into_iter()
            .try_fold(Value::Function(function.clone()), |current, argument| {
                current.call1(argument)
            })
    })
}
