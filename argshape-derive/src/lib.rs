//! Procedural macros for argshape.
//!
//! # Available Attribute Macros
//!
//! - [`macro@lift`]: Generates a dynamic `Function` for a typed Rust function,
//!   carrying its arity and parameter names
//!
//! # Example
//!
//! ```rust,ignore
//! use argshape::{Value, args, lift, spread_arg_props, record};
//!
//! #[lift]
//! fn volume(width: i64, height: i64, depth: i64) -> i64 {
//!     width * height * depth
//! }
//!
//! let function = volume_lifted();
//! assert_eq!(function.arity(), 3);
//!
//! let by_name = spread_arg_props(&function);
//! assert_eq!(
//!     by_name.call1(record! { depth: 4, width: 2, height: 3 }),
//!     Ok(Value::from(24))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lift;

use proc_macro::TokenStream;

/// Lifts a typed function into an `argshape::Function`.
///
/// The annotated function is kept unchanged. Next to it, a function named
/// `{name}_lifted` is generated that returns the dynamic form:
///
/// - declared parameter names are the function's parameter names, in order
/// - the arity is the number of positional parameters
/// - each argument is converted with `argshape::FromValue`; a mismatch
///   makes the call fail with `Error::ArgumentType`
/// - the return value is converted with `Value::from`
///
/// This stands in for reading a function's parameter count and names at
/// runtime, which Rust cannot do.
///
/// # Rest Parameter
///
/// The last parameter may be marked `#[rest]`. It must have type
/// `argshape::Args` and receives every argument past the positional ones.
/// It does not count towards the arity. Any other type is rejected at the
/// parameter.
///
/// ```rust,ignore
/// use argshape::{Args, Value, args, lift};
///
/// #[lift]
/// fn foo(x: Value, y: Value, z: Value, #[rest] rest: Args) -> Args {
///     args![x, y, z, rest]
/// }
///
/// let function = foo_lifted();
/// assert_eq!(function.arity(), 3);
/// assert_eq!(
///     function.call(args![1, 2, 3, 4]),
///     Ok(Value::from(args![1, 2, 3, args![4]]))
/// );
/// ```
///
/// # Restrictions
///
/// Methods, generic, `async`, `const` and `unsafe` functions are rejected,
/// as are parameters that are not plain identifiers.
#[proc_macro_attribute]
pub fn lift(attribute: TokenStream, item: TokenStream) -> TokenStream {
    lift::lift_impl(attribute, item)
}
