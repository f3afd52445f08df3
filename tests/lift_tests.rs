#![cfg(all(feature = "derive", feature = "props"))]
//! Tests for the `#[lift]` attribute macro.
//!
//! Lifted functions carry their arity and parameter names, which the
//! currying and named-argument combinators rely on.

use argshape::{
    Args, Error, TypeMismatch, Value, args, curry, lift, partial_right, record, spread_arg_props,
};
use rstest::rstest;

#[lift]
fn foo(x: Value, y: Value, z: Value, #[rest] rest: Args) -> Args {
    args![x, y, z, rest]
}

#[lift]
fn volume(width: i64, height: i64, depth: i64) -> i64 {
    width * height * depth
}

#[lift]
fn greet(name: String, punctuation: Option<String>) -> String {
    format!("Hello, {name}{}", punctuation.unwrap_or_default())
}

#[lift]
fn answer() -> i64 {
    42
}

// =============================================================================
// Metadata
// =============================================================================

#[rstest]
fn test_lifted_arity_excludes_rest() {
    assert_eq!(foo_lifted().arity(), 3);
    assert_eq!(volume_lifted().arity(), 3);
    assert_eq!(answer_lifted().arity(), 0);
}

#[rstest]
fn test_lifted_params_and_name() {
    let function = volume_lifted();
    let names: Vec<&str> = function
        .params()
        .unwrap_or_default()
        .iter()
        .map(|name| name.as_ref())
        .collect();
    assert_eq!(names, ["width", "height", "depth"]);
    assert_eq!(function.name(), "volume");
}

#[rstest]
fn test_original_function_is_kept() {
    assert_eq!(volume(2, 3, 4), 24);
    assert_eq!(foo(Value::from(1), Value::Absent, Value::Absent, args![]).len(), 4);
}

// =============================================================================
// Calling
// =============================================================================

#[rstest]
#[case(args![1, 2], r#"[1, 2, "z:last", []]"#)]
#[case(args![1, 2, 3, 4], r#"[1, 2, 3, [4, "z:last"]]"#)]
fn test_lifted_rest_parameter(#[case] later: Args, #[case] expected: &str) {
    let with_last = partial_right(&foo_lifted(), args!["z:last"]);
    let shown = with_last.call(later).map(|value| value.to_string());
    assert_eq!(shown.as_deref(), Ok(expected));
}

#[rstest]
fn test_curry_uses_lifted_arity() {
    let curried = Value::from(curry(&volume_lifted()));
    let result = curried
        .call1(2)
        .and_then(|next| next.call1(3))
        .and_then(|next| next.call1(4));
    assert_eq!(result, Ok(Value::from(24)));
}

#[rstest]
fn test_spread_arg_props_uses_lifted_names() {
    let by_name = spread_arg_props(&volume_lifted());
    assert_eq!(
        by_name.call1(record! { depth: 4, width: 2, height: 3 }),
        Ok(Value::from(24))
    );
}

#[rstest]
#[case(args!["World"], "Hello, World")]
#[case(args!["World", "!"], "Hello, World!")]
fn test_optional_parameter_accepts_absent(#[case] arguments: Args, #[case] expected: &str) {
    assert_eq!(greet_lifted().call(arguments), Ok(Value::from(expected)));
}

#[rstest]
fn test_wrong_argument_type_reports_position() {
    assert_eq!(
        volume_lifted().call(args![2, "three", 4]),
        Err(Error::ArgumentType {
            function: "volume".to_string(),
            position: 1,
            source: TypeMismatch::new("int", "text"),
        })
    );
}

#[rstest]
fn test_missing_required_argument_is_absent_mismatch() {
    assert_eq!(
        volume_lifted().call(args![2, 3]),
        Err(TypeMismatch::new("int", "absent").in_call("volume", 2))
    );
}
