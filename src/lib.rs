//! # argshape
//!
//! Argument-shaping combinators: higher-order functions that take a function
//! and return a new one whose inputs are arranged differently.
//!
//! ## Overview
//!
//! Function values are dynamic. A [`Function`] takes an [`Args`] sequence
//! and returns a [`Value`], and carries a declared arity and optionally its
//! parameter names. On top of that the library provides:
//!
//! - **Basic toolbox**: [`unary`], [`identity`], [`constant`]
//! - **Spreading**: [`spread_args`], [`gather_args`]
//! - **Partial application**: [`partial`], [`partial_right`], [`reverse_args`]
//! - **Currying**: [`curry`], [`loose_curry`], [`uncurry`]
//! - **Named arguments**: [`partial_props`], [`curry_props`], [`spread_arg_props`]
//! - **Predicates**: [`not`], [`when`]
//! - **First-class combinators**: [`lifted`]
//! - **Typed closures**: [`typed`], for when shapes are known statically
//!
//! ## Feature Flags
//!
//! - `props`: named-argument combinators (default)
//! - `derive`: the `#[lift]` attribute macro (default)
//! - `serde`: `Serialize`/`Deserialize` for [`Value`], [`Args`] and [`Record`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use argshape::prelude::*;
//!
//! let sum = Function::variadic("sum", |numbers| {
//!     Ok(Value::from(numbers.iter().filter_map(Value::as_int).sum::<i64>()))
//! });
//!
//! let curried_sum = Value::from(curry_with_arity(&sum, 5));
//! let total = curried_sum
//!     .call1(1)?
//!     .call1(2)?
//!     .call1(3)?
//!     .call1(4)?
//!     .call1(5)?;
//! assert_eq!(total, Value::from(15));
//!
//! let add_ten = partial(&sum, args![4, 6]);
//! assert_eq!(add_ten.call(args![1]), Ok(Value::from(11)));
//! # Ok::<(), argshape::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types, the error types and every combinator.
///
/// # Usage
///
/// ```rust
/// use argshape::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args::Args;
    pub use crate::combinator::*;
    pub use crate::error::{Error, TypeMismatch};
    pub use crate::function::Function;
    pub use crate::record::Record;
    pub use crate::value::{FromValue, Value};
    pub use crate::{args, record};

    #[cfg(feature = "derive")]
    pub use argshape_derive::lift;
}

mod args;
pub mod combinator;
mod error;
mod function;
mod record;
pub mod typed;
mod value;

pub use args::Args;
pub use combinator::*;
pub use error::{Error, Result, TypeMismatch};
pub use function::Function;
pub use record::Record;
pub use value::{FromValue, Value};

#[cfg(feature = "derive")]
pub use argshape_derive::lift;
