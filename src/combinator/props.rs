//! Named-argument variants of partial application and currying.
//!
//! Here a function's "arguments" are the fields of a single [`Record`]
//! instead of positional parameters. Because fields are addressed by name,
//! they can be supplied in any order without reversing anything.

use std::rc::Rc;

use smallvec::SmallVec;
use tracing::trace;

use crate::args::Args;
use crate::error::Result;
use crate::function::Function;
use crate::record::Record;
use crate::value::Value;

/// Field names projected into positional arguments. Parameter lists are
/// short, so the names usually stay inline.
type FieldOrder = SmallVec<[Rc<str>; 4]>;

/// Reads the record argument of a named-argument call. Anything other than
/// a record contributes no fields.
fn record_argument(arguments: &Args) -> Record {
    match arguments.first() {
        Value::Record(record) => record,
        _ => Record::new(),
    }
}

/// Presets some fields of the record `function` receives.
///
/// The returned function takes one record and calls `function` with
/// `preset` overlaid by it; later fields win on collision.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, partial_props, record};
///
/// let show = Function::new("show", 1, |arguments| {
///     let fields = arguments.first();
///     let fields = fields.as_record().cloned().unwrap_or_default();
///     Ok(Value::from(format!(
///         "x:{} y:{} z:{}",
///         fields.get("x"),
///         fields.get("y"),
///         fields.get("z")
///     )))
/// });
///
/// let with_y = partial_props(&show, record! { y: 2 });
/// assert_eq!(
///     with_y.call(args![record! { z: 3, x: 1 }]),
///     Ok(Value::from("x:1 y:2 z:3"))
/// );
/// ```
pub fn partial_props(function: &Function, preset: Record) -> Function {
    let function = function.clone();
    Function::new("partially_applied", 1, move |arguments| {
        let later = record_argument(&arguments);
        function.call1(preset.merge(&later))
    })
}

#[derive(Clone)]
struct CurriedProps {
    target: Function,
    arity: usize,
    accumulated: Record,
}

impl CurriedProps {
    fn into_function(self) -> Function {
        Function::new("curried", 1, move |arguments| self.step(&arguments))
    }

    fn step(&self, arguments: &Args) -> Result<Value> {
        let mut accumulated = self.accumulated.clone();
        if let Some((key, value)) = record_argument(arguments).first_entry() {
            accumulated.insert(key, value);
        }

        if accumulated.len() >= self.arity {
            trace!(
                target_function = self.target.name(),
                fields = accumulated.len(),
                arity = self.arity,
                "curried props complete"
            );
            return self.target.call1(accumulated);
        }

        trace!(
            target_function = self.target.name(),
            fields = accumulated.len(),
            arity = self.arity,
            "curried props waiting"
        );
        let next = Self {
            accumulated,
            ..self.clone()
        };
        Ok(Value::Function(next.into_function()))
    }
}

/// Curries a named-argument function that needs a single field.
///
/// See [`curry_props_with_arity`].
pub fn curry_props(function: &Function) -> Function {
    curry_props_with_arity(function, 1)
}

/// Curries a named-argument function, one field per call.
///
/// Each call takes a record and keeps only its first field, merging it into
/// the accumulated record (a repeated name overwrites the earlier value
/// without adding a field). A call without fields, whether an empty record
/// or a non-record argument, adds no placeholder field and does not count
/// towards `arity`: it returns a fresh curried function in the same state. Once at
/// least `arity` distinct fields have accumulated, `function` is called
/// once with the full record.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, curry_props_with_arity, record};
///
/// let show = Function::new("show", 1, |arguments| Ok(arguments.first()));
///
/// let curried = Value::from(curry_props_with_arity(&show, 3));
/// let result = curried
///     .call1(record! { y: 2 })?
///     .call1(record! { x: 1 })?
///     .call1(record! { z: 3 })?;
/// assert_eq!(result, Value::from(record! { x: 1, y: 2, z: 3 }));
/// # Ok::<(), argshape::Error>(())
/// ```
pub fn curry_props_with_arity(function: &Function, arity: usize) -> Function {
    CurriedProps {
        target: function.clone(),
        arity,
        accumulated: Record::new(),
    }
    .into_function()
}

/// Adapts a positional function to receive one record, using its declared
/// parameter names as the field order.
///
/// A function without declared parameter names receives no arguments. See
/// [`spread_arg_props_with_order`].
pub fn spread_arg_props(function: &Function) -> Function {
    let order: FieldOrder = function
        .params()
        .map(|params| params.iter().cloned().collect())
        .unwrap_or_default();
    spread_fields(function, order)
}

/// Adapts a positional function to receive one record, projecting the
/// fields named in `order` into positional arguments.
///
/// Missing fields become absent at their position.
///
/// # Examples
///
/// ```rust
/// use argshape::{Function, Value, args, record, spread_arg_props_with_order};
///
/// let show = Function::variadic("show", |arguments| Ok(Value::List(arguments)));
/// let spread = spread_arg_props_with_order(&show, &["x", "y", "z"]);
///
/// assert_eq!(
///     spread.call(args![record! { z: 3, x: 1 }]),
///     Ok(Value::from(args![1, Value::Absent, 3]))
/// );
/// ```
pub fn spread_arg_props_with_order(function: &Function, order: &[&str]) -> Function {
    spread_fields(function, order.iter().map(|name| Rc::from(*name)).collect())
}

fn spread_fields(function: &Function, order: FieldOrder) -> Function {
    let function = function.clone();
    Function::new("spread_fn", 1, move |arguments| {
        let fields = record_argument(&arguments);
        function.call(order.iter().map(|name| fields.get(name)).collect())
    })
}
