#![cfg(feature = "props")]
//! Integration tests for the named-argument combinators.
//!
//! A named-argument function receives one record. The combinators preset,
//! curry, or project fields of that record; field order never matters.

use argshape::{
    Function, Record, Value, args, curry_props, curry_props_with_arity, partial_props, record,
    spread_arg_props, spread_arg_props_with_order,
};
use rstest::{fixture, rstest};

/// Shows fields `x`, `y` and `z` of the record it receives.
#[fixture]
fn show_xyz() -> Function {
    Function::new("show_xyz", 1, |arguments| {
        let fields = arguments.first().as_record().cloned().unwrap_or_default();
        Ok(Value::from(format!(
            "x:{} y:{} z:{}",
            fields.get("x"),
            fields.get("y"),
            fields.get("z")
        )))
    })
}

// =============================================================================
// partial_props
// =============================================================================

#[rstest]
fn test_partial_props_fills_remaining_fields(show_xyz: Function) {
    let with_y = partial_props(&show_xyz, record! { y: 2 });
    assert_eq!(
        with_y.call1(record! { z: 3, x: 1 }),
        Ok(Value::from("x:1 y:2 z:3"))
    );
}

#[rstest]
fn test_partial_props_later_field_wins(show_xyz: Function) {
    let with_x = partial_props(&show_xyz, record! { x: 1 });
    assert_eq!(
        with_x.call1(record! { x: 100, y: 2, z: 3 }),
        Ok(Value::from("x:100 y:2 z:3"))
    );
}

#[rstest]
fn test_partial_props_ignores_non_record_argument(show_xyz: Function) {
    let with_x = partial_props(&show_xyz, record! { x: 1 });
    assert_eq!(
        with_x.call(args!["not a record"]),
        Ok(Value::from("x:1 y:undefined z:undefined"))
    );
}

#[rstest]
fn test_partial_props_preset_is_not_mutated(show_xyz: Function) {
    let with_x = partial_props(&show_xyz, record! { x: 1 });
    with_x.call1(record! { x: 5, y: 5 }).unwrap();
    assert_eq!(
        with_x.call1(record! { z: 3 }),
        Ok(Value::from("x:1 y:undefined z:3"))
    );
}

// =============================================================================
// curry_props
// =============================================================================

#[rstest]
fn test_curry_props_any_order(show_xyz: Function) {
    let curried = Value::from(curry_props_with_arity(&show_xyz, 3));
    let result = curried
        .call1(record! { y: 2 })
        .and_then(|next| next.call1(record! { x: 1 }))
        .and_then(|next| next.call1(record! { z: 3 }));
    assert_eq!(result, Ok(Value::from("x:1 y:2 z:3")));
}

#[rstest]
fn test_curry_props_default_is_single_field(show_xyz: Function) {
    let curried = curry_props(&show_xyz);
    assert_eq!(curried.arity(), 1);
    assert_eq!(
        curried.call1(record! { z: 9 }),
        Ok(Value::from("x:undefined y:undefined z:9"))
    );
}

#[rstest]
fn test_curry_props_branches_do_not_share_state(show_xyz: Function) {
    let with_x = Value::from(curry_props_with_arity(&show_xyz, 2))
        .call1(record! { x: 1 })
        .unwrap();

    let first = with_x.call1(record! { y: 2 });
    let second = with_x.call1(record! { z: 3 });
    assert_eq!(first, Ok(Value::from("x:1 y:2 z:undefined")));
    assert_eq!(second, Ok(Value::from("x:1 y:undefined z:3")));
}

// =============================================================================
// spread_arg_props
// =============================================================================

#[rstest]
fn test_spread_arg_props_with_explicit_order() {
    let listed = Function::variadic("listed", |arguments| Ok(Value::List(arguments)));
    let spread = spread_arg_props_with_order(&listed, &["z", "x"]);
    assert_eq!(
        spread.call1(record! { x: 1, y: 2, z: 3 }),
        Ok(Value::from(args![3, 1]))
    );
}

#[rstest]
fn test_spread_arg_props_missing_fields_are_absent() {
    let foo = Function::with_params("foo", &["x", "y", "z"], |arguments| {
        Ok(Value::List(arguments))
    });
    assert_eq!(
        spread_arg_props(&foo).call1(record! { y: 2 }),
        Ok(Value::from(args![Value::Absent, 2, Value::Absent]))
    );
}

#[rstest]
fn test_spread_then_curry_props(show_xyz: Function) {
    // A positional function curried one named field at a time.
    let positional = Function::with_params("positional", &["x", "y", "z"], move |arguments| {
        let fields: Record = ["x", "y", "z"]
            .into_iter()
            .zip(arguments)
            .collect();
        show_xyz.call1(fields)
    });
    let curried = Value::from(curry_props_with_arity(&spread_arg_props(&positional), 3));
    let result = curried
        .call1(record! { z: 3 })
        .and_then(|next| next.call1(record! { y: 2 }))
        .and_then(|next| next.call1(record! { x: 1 }));
    assert_eq!(result, Ok(Value::from("x:1 y:2 z:3")));
}
