//! Higher-order function transformers over [`Function`](crate::Function)
//! values.
//!
//! Every combinator is a pure factory: given a function (and possibly preset
//! arguments or an arity) it returns a new function. Nothing is shared
//! between independently built chains, and each returned function can be
//! called any number of times.
//!
//! # Overview
//!
//! - [`unary`], [`identity`], [`constant`]: the basic toolbox
//! - [`spread_args`], [`gather_args`]: adapt between positional arguments
//!   and a single list
//! - [`partial`], [`partial_right`], [`reverse_args`]: preset arguments
//! - [`curry`], [`loose_curry`], [`uncurry`]: argument-at-a-time calls
//! - [`partial_props`], [`curry_props`], [`spread_arg_props`]: the same for
//!   a single record of named fields (feature `props`)
//! - [`not`], [`when`]: predicate combinators
//! - [`lifted`]: all of the above as [`Function`](crate::Function) values
//!
//! # Laws
//!
//! ```text
//! curry(f)(a0)...(an-1)          = f(a0, ..., an-1)      n = arity of f
//! partial(f, p)(l)               = f(p ++ l)
//! partial_right(f, p)(l)         = f(l ++ p)
//! reverse_args(reverse_args(f))  = f
//! uncurry(curry(f, n))(a)        = f(a)                  |a| = n
//! when(p, f)(x)                  = if p(x) { f(x) } else { absent }
//! not(p)(x)                      = !p(x)
//! ```

mod basic;
mod curry;
pub mod lifted;
mod partial;
mod predicate;
#[cfg(feature = "props")]
mod props;

pub use basic::{constant, gather_args, identity, spread_args, unary};
pub use curry::{curry, curry_with_arity, loose_curry, loose_curry_with_arity, uncurry};
pub use partial::{partial, partial_right, reverse_args};
pub use predicate::{not, when};
#[cfg(feature = "props")]
pub use props::{
    curry_props, curry_props_with_arity, partial_props, spread_arg_props,
    spread_arg_props_with_order,
};
