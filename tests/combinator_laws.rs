//! Property-based tests for the combinator laws.
//!
//! ## Currying
//! - **Curry Equivalence**: `curry(f, n)(a0)...(an-1) == f(a0, ..., an-1)`
//! - **Loose Curry Grouping**: any grouping of `a` into calls gives `f(a)`
//! - **Uncurry Inverse**: `uncurry(curry(f, n))(a) == f(a)`
//!
//! ## Partial Application
//! - **Partial**: `partial(f, p)(l) == f(p ++ l)`
//! - **Partial Right**: `partial_right(f, p)(l) == f(l ++ p)`
//! - **Double Reverse Identity**: `reverse_args(reverse_args(f)) == f`
//!
//! ## Predicates
//! - **Not**: `not(p)(x) == !truthy(p(x))`
//! - **When**: `when(p, f)(x) == if truthy(p(x)) { f(x) } else { absent }`

use argshape::{
    Args, Function, Value, curry_with_arity, loose_curry_with_arity, not, partial, partial_right,
    reverse_args, uncurry, when,
};
use proptest::prelude::*;

/// Records its arguments as a list, so argument order is observable.
fn listed() -> Function {
    Function::variadic("listed", |arguments| Ok(Value::List(arguments)))
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Absent),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn arguments(max: usize) -> impl Strategy<Value = Args> {
    prop::collection::vec(scalar(), 0..=max).prop_map(Args::from)
}

// =============================================================================
// Currying Laws
// =============================================================================

proptest! {
    /// Curry Equivalence: one argument per call reaches the same result.
    #[test]
    fn prop_curry_equivalence(values in prop::collection::vec(scalar(), 1..8)) {
        let curried = Value::from(curry_with_arity(&listed(), values.len()));
        let result = values
            .iter()
            .cloned()
            .try_fold(curried, |current, value| current.call1(value));

        prop_assert_eq!(result, listed().call(Args::from(values)));
    }

    /// Loose Curry Grouping: calls may carry any number of arguments.
    #[test]
    fn prop_loose_curry_any_grouping(
        values in prop::collection::vec(scalar(), 1..10),
        chunk in 1_usize..4,
    ) {
        let mut current = Value::from(loose_curry_with_arity(&listed(), values.len()));
        for group in values.chunks(chunk) {
            current = current.call(group.iter().cloned().collect()).unwrap();
        }

        prop_assert_eq!(current, Value::List(Args::from(values)));
    }

    /// Uncurry Inverse: uncurry(curry(f, n)) called with n arguments.
    #[test]
    fn prop_uncurry_inverts_curry(values in prop::collection::vec(scalar(), 1..8)) {
        let arguments = Args::from(values);
        let round_trip = uncurry(&curry_with_arity(&listed(), arguments.len()));

        prop_assert_eq!(round_trip.call(arguments.clone()), listed().call(arguments));
    }
}

// =============================================================================
// Partial Application Laws
// =============================================================================

proptest! {
    /// Partial: preset arguments come first.
    #[test]
    fn prop_partial_prepends(preset in arguments(4), later in arguments(4)) {
        let applied = partial(&listed(), preset.clone());
        prop_assert_eq!(applied.call(later.clone()), listed().call(preset.concat(&later)));
    }

    /// Partial Right: preset arguments come last.
    #[test]
    fn prop_partial_right_appends(preset in arguments(4), later in arguments(4)) {
        let applied = partial_right(&listed(), preset.clone());
        prop_assert_eq!(applied.call(later.clone()), listed().call(later.concat(&preset)));
    }

    /// Double Reverse Identity: reverse_args(reverse_args(f)) == f.
    #[test]
    fn prop_double_reverse_identity(values in arguments(8)) {
        let twice = reverse_args(&reverse_args(&listed()));
        prop_assert_eq!(twice.call(values.clone()), listed().call(values));
    }

    /// Reverse: the target observes the arguments back to front.
    #[test]
    fn prop_reverse_args_reverses(values in arguments(8)) {
        let reversed = reverse_args(&listed());
        prop_assert_eq!(reversed.call(values.clone()), Ok(Value::List(values.reversed())));
    }
}

// =============================================================================
// Predicate Laws
// =============================================================================

proptest! {
    /// Not: negation of the predicate's truthiness.
    #[test]
    fn prop_not_negates(value in scalar()) {
        let echo = Function::new("echo", 1, |arguments| Ok(arguments.first()));
        prop_assert_eq!(not(&echo).call1(value.clone()), Ok(Value::from(!value.is_truthy())));
    }

    /// When: the consequent's result or absent.
    #[test]
    fn prop_when_selects(value in scalar()) {
        let echo = Function::new("echo", 1, |arguments| Ok(arguments.first()));
        let expected = if value.is_truthy() {
            Value::List(Args::from(vec![value.clone()]))
        } else {
            Value::Absent
        };
        prop_assert_eq!(when(&echo, &listed()).call1(value), Ok(expected));
    }
}
