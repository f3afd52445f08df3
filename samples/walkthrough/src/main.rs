//! Walkthrough Sample Entry Point
//!
//! Replays small point-free programs built from the argshape combinators and
//! prints what each one produces. Set `RUST_LOG=argshape=trace` to watch
//! curried chains accumulate their arguments.

use argshape::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting walkthrough...");

    unary_demo()?;
    identity_demo()?;
    partial_demo()?;
    curry_demo()?;
    props_demo()?;
    predicate_demo()?;

    tracing::info!("Walkthrough finished");
    Ok(())
}

fn parse_int() -> Function {
    Function::new("parse_int", 2, |arguments| {
        let radix = match arguments.get(1) {
            Value::Absent | Value::Int(0) => 10,
            Value::Int(radix @ 2..=36) => u32::try_from(radix).unwrap_or(10),
            _ => return Ok(Value::Absent),
        };
        Ok(arguments
            .first()
            .as_text()
            .and_then(|text| i64::from_str_radix(text, radix).ok())
            .map_or(Value::Absent, Value::from))
    })
}

/// Calls `function` the way an indexed map does: element, then index.
fn map_with_index(items: &[&str], function: &Function) -> Result<Value, Error> {
    items
        .iter()
        .zip(0_i64..)
        .map(|(item, index)| function.call(args![*item, index]))
        .collect::<Result<Args, Error>>()
        .map(Value::List)
}

fn unary_demo() -> Result<(), Error> {
    tracing::info!("unary");
    let items = ["1", "2", "3"];
    println!("map(parse_int)        = {}", map_with_index(&items, &parse_int())?);
    println!(
        "map(unary(parse_int)) = {}",
        map_with_index(&items, &unary(&parse_int()))?
    );
    Ok(())
}

fn identity_demo() -> Result<(), Error> {
    tracing::info!("identity");
    let output = |message: &str, format: &Function| format.call1(message);
    let upper = Function::new("upper", 1, |arguments| {
        Ok(Value::from(arguments.first().to_string().to_uppercase()))
    });

    println!("output(upper)    = {}", output("Hello World", &upper)?);
    println!("output(identity) = {}", output("Hello World", &identity())?);

    let spread_sum = spread_args(&Function::variadic("sum", |numbers| {
        Ok(Value::from(
            numbers.iter().filter_map(Value::as_int).sum::<i64>(),
        ))
    }));
    println!("spread_args(sum)([1, 2, 3]) = {}", spread_sum.call1(args![1, 2, 3])?);
    Ok(())
}

#[lift]
fn foo(x: Value, y: Value, z: Value, #[rest] rest: Args) -> String {
    format!("x:{x} y:{y} z:{z} rest:{}", Value::from(rest))
}

fn partial_demo() -> Result<(), Error> {
    tracing::info!("partial_right");
    let with_last = partial_right(&foo_lifted(), args!["z:last"]);
    for later in [args![1, 2], args![1], args![1, 2, 3], args![1, 2, 3, 4]] {
        println!("{:<16} -> {}", Value::from(later.clone()).to_string(), with_last.call(later)?);
    }
    Ok(())
}

fn curry_demo() -> Result<(), Error> {
    tracing::info!("curry");
    let sum = Function::variadic("sum", |numbers| {
        Ok(Value::from(
            numbers.iter().filter_map(Value::as_int).sum::<i64>(),
        ))
    });

    let curried_sum = Value::from(curry_with_arity(&sum, 5));
    let total = curried_sum
        .call1(1)?
        .call1(2)?
        .call1(3)?
        .call1(4)?
        .call1(5)?;
    println!("curried_sum(1)(2)(3)(4)(5) = {total}");

    let loose_sum = Value::from(loose_curry_with_arity(&sum, 5));
    let total = loose_sum.call(args![1, 2])?.call(args![3])?.call(args![4, 5])?;
    println!("loose_sum(1, 2)(3)(4, 5)   = {total}");

    let uncurried = uncurry(&curry_with_arity(&sum, 5));
    println!(
        "uncurry(curried_sum)(1, 2, 3, 4, 5) = {}",
        uncurried.call(args![1, 2, 3, 4, 5])?
    );
    Ok(())
}

#[lift]
fn show(x: Value, y: Value, z: Value) -> String {
    format!("x:{x} y:{y} z:{z}")
}

fn props_demo() -> Result<(), Error> {
    tracing::info!("named arguments");
    let by_name = spread_arg_props(&show_lifted());

    let with_y = partial_props(&by_name, record! { y: 2 });
    println!("partial_props(y: 2)({{ z: 3, x: 1 }}) = {}", with_y.call1(record! { z: 3, x: 1 })?);

    let curried = Value::from(curry_props_with_arity(&by_name, 3));
    let result = curried
        .call1(record! { y: 2 })?
        .call1(record! { x: 1 })?
        .call1(record! { z: 3 })?;
    println!("curry_props(show, 3)({{ y }})({{ x }})({{ z }}) = {result}");
    Ok(())
}

fn predicate_demo() -> Result<(), Error> {
    tracing::info!("predicates");
    let is_short_enough = Function::new("is_short_enough", 1, |arguments| {
        Ok(Value::from(
            arguments.first().as_text().is_some_and(|text| text.len() <= 5),
        ))
    });
    let output = Function::new("output", 1, |arguments| {
        println!("  output: {}", arguments.first());
        Ok(Value::Absent)
    });

    let print_if = uncurry(&partial_right(&lifted::when(), args![output.clone()]));
    for message in ["Hello", "Hello World"] {
        print_if.call(args![is_short_enough.clone(), message])?;
    }

    let is_long_enough = not(&is_short_enough);
    let print_if_long = when(&is_long_enough, &output);
    for message in ["Hello", "Hello World"] {
        print_if_long.call1(message)?;
    }
    Ok(())
}
