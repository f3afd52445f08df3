//! Integration tests for `partial`, `partial_right` and `reverse_args`.

use argshape::{
    Args, Function, Value, args, constant, gather_args, identity, partial, partial_right,
    reverse_args, spread_args, unary,
};
use rstest::{fixture, rstest};

/// `foo(x, y, z, ...rest)` returning `[x, y, z, rest]`.
#[fixture]
fn foo() -> Function {
    Function::with_params("foo", &["x", "y", "z"], |arguments| {
        let ([x, y, z], rest) = arguments.gather::<3>();
        Ok(Value::from(args![x, y, z, rest]))
    })
}

#[fixture]
fn join() -> Function {
    Function::variadic("join", |parts| {
        Ok(Value::from(
            parts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        ))
    })
}

// =============================================================================
// partial / partial_right
// =============================================================================

#[rstest]
fn test_partial_then_partial_right(join: Function) {
    let framed = partial_right(&partial(&join, args!["<"]), args![">"]);
    assert_eq!(framed.call(args!["a", "b"]), Ok(Value::from("< a b >")));
}

#[rstest]
fn test_partial_with_empty_preset_behaves_like_original(foo: Function) {
    let same = partial(&foo, args![]);
    assert_eq!(same.arity(), foo.arity());
    assert_eq!(same.call(args![1, 2, 3, 4]), foo.call(args![1, 2, 3, 4]));
}

#[rstest]
#[case(args![1, 2], r#"[1, 2, "z:last", []]"#)]
#[case(args![1], r#"[1, "z:last", undefined, []]"#)]
#[case(args![1, 2, 3], r#"[1, 2, 3, ["z:last"]]"#)]
#[case(args![1, 2, 3, 4], r#"[1, 2, 3, [4, "z:last"]]"#)]
fn test_partial_right_depends_on_call_length(
    foo: Function,
    #[case] later: Args,
    #[case] expected: &str,
) {
    let with_last = partial_right(&foo, args!["z:last"]);
    let shown = with_last.call(later).map(|value| value.to_string());
    assert_eq!(shown.as_deref(), Ok(expected));
}

#[rstest]
fn test_nested_partial_concatenates_presets(foo: Function) {
    let nested = partial(&partial(&foo, args![1]), args![2]);
    assert_eq!(nested.arity(), 1);
    assert_eq!(nested.call(args![3]), Ok(Value::from(args![1, 2, 3, args![]])));
}

// =============================================================================
// reverse_args
// =============================================================================

#[rstest]
fn test_reverse_args_reverses_every_argument(join: Function) {
    let reversed = reverse_args(&join);
    assert_eq!(reversed.call(args![1, 2, 3]), Ok(Value::from("3 2 1")));
}

#[rstest]
fn test_reverse_args_keeps_arity(foo: Function) {
    assert_eq!(reverse_args(&foo).arity(), 3);
}

#[rstest]
#[case(args![])]
#[case(args![1])]
#[case(args![1, "two", 3.5, true, args![5]])]
fn test_double_reverse_is_identity(join: Function, #[case] arguments: Args) {
    let twice = reverse_args(&reverse_args(&join));
    assert_eq!(twice.call(arguments.clone()), join.call(arguments));
}

// =============================================================================
// Basic toolbox
// =============================================================================

#[rstest]
fn test_unary_keeps_first_argument_only(join: Function) {
    assert_eq!(unary(&join).call(args![1, 2, 3]), Ok(Value::from("1")));
}

#[rstest]
fn test_identity_and_constant() {
    assert_eq!(identity().call(args![7, 8]), Ok(Value::from(7)));
    assert_eq!(identity().call(args![]), Ok(Value::Absent));

    let always_zero = constant(0);
    assert_eq!(always_zero.arity(), 0);
    assert_eq!(always_zero.call(args!["ignored", 1]), Ok(Value::from(0)));
}

#[rstest]
fn test_spread_args_and_gather_args(join: Function) {
    let spread = spread_args(&join);
    assert_eq!(spread.call(args![args![1, 2, 3]]), Ok(Value::from("1 2 3")));

    let gathered = gather_args(&spread);
    assert_eq!(gathered.call(args![1, 2, 3]), Ok(Value::from("1 2 3")));
}
