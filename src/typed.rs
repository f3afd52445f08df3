//! Statically typed counterparts of the combinators.
//!
//! When argument types and counts are known at compile time, the same shapes
//! can be expressed as plain generic closures with no dynamic dispatch and
//! no [`Value`](crate::Value) boxing. The absent result of [`when`] becomes
//! [`None`].
//!
//! - [`identity`]: the I combinator
//! - [`constant`]: the K combinator
//! - [`flip`]: reverse the arguments of a binary function
//! - [`partial`] / [`partial_right`]: preset the first or last argument of a
//!   binary function
//! - [`spread`] / [`gather`]: convert between a tuple parameter and two
//!   parameters
//! - [`not`] / [`when`]: predicate combinators
//! - [`uncurry2`]: collapse `|a| |b| ...` into `|a, b| ...`

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use argshape::typed::identity;
///
/// fn output(message: &str, format: impl Fn(String) -> String) -> String {
///     format(message.to_string())
/// }
///
/// assert_eq!(output("Hello World", |text| text.to_uppercase()), "HELLO WORLD");
/// assert_eq!(output("Hello World", identity), "Hello World");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use argshape::typed::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use argshape::typed::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Presets the first argument of a binary function.
///
/// # Examples
///
/// ```
/// use argshape::typed::partial;
///
/// let add = |first: i32, second: i32| first + second;
/// let mapped: Vec<i32> = [1, 2, 3, 4, 5].into_iter().map(partial(add, 3)).collect();
/// assert_eq!(mapped, [4, 5, 6, 7, 8]);
/// ```
#[inline]
pub fn partial<A: Clone, B, C, F>(function: F, first: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
{
    move |second| function(first.clone(), second)
}

/// Presets the last argument of a binary function.
///
/// # Examples
///
/// ```
/// use argshape::typed::partial_right;
///
/// let divide = |numerator: f64, denominator: f64| numerator / denominator;
/// let half = partial_right(divide, 2.0);
/// assert!((half(7.0) - 3.5).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn partial_right<A, B: Clone, C, F>(function: F, second: B) -> impl Fn(A) -> C
where
    F: Fn(A, B) -> C,
{
    move |first| function(first, second.clone())
}

/// Adapts a binary function to take one pair. Also known as `apply`.
///
/// # Examples
///
/// ```
/// use argshape::typed::spread;
///
/// let add = |first: i32, second: i32| first + second;
/// let sums: Vec<i32> = vec![(1, 2), (3, 4)].into_iter().map(spread(add)).collect();
/// assert_eq!(sums, vec![3, 7]);
/// ```
#[inline]
pub fn spread<A, B, C, F>(function: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(first, second)| function(first, second)
}

/// Adapts a function taking one pair to take two arguments. Also known as
/// `unapply`.
///
/// # Examples
///
/// ```
/// use argshape::typed::gather;
///
/// let combine_first_two = |(first, second): (i32, i32)| first + second;
/// assert_eq!([1, 2, 3, 4, 5].into_iter().reduce(gather(combine_first_two)), Some(15));
/// ```
#[inline]
pub fn gather<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn((A, B)) -> C,
{
    move |first, second| function((first, second))
}

/// Negates a predicate.
///
/// # Examples
///
/// ```
/// use argshape::typed::not;
///
/// let is_short_enough = |text: &&str| text.len() <= 5;
/// let long: Vec<&str> = vec!["Hello", "Hello World"]
///     .into_iter()
///     .filter(not(is_short_enough))
///     .collect();
/// assert_eq!(long, vec!["Hello World"]);
/// ```
#[inline]
pub fn not<A: ?Sized, P>(predicate: P) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
{
    move |argument| !predicate(argument)
}

/// Applies `function` only when `predicate` holds; otherwise returns
/// [`None`] without calling it.
///
/// # Examples
///
/// ```
/// use argshape::typed::when;
///
/// let halve_even = when(|number: &i32| number % 2 == 0, |number: i32| number / 2);
/// assert_eq!(halve_even(10), Some(5));
/// assert_eq!(halve_even(7), None);
/// ```
#[inline]
pub fn when<A, B, P, F>(predicate: P, function: F) -> impl Fn(A) -> Option<B>
where
    P: Fn(&A) -> bool,
    F: Fn(A) -> B,
{
    move |argument| predicate(&argument).then(|| function(argument))
}

/// Collapses a two-level curried function into a binary one.
///
/// # Examples
///
/// ```
/// use argshape::typed::uncurry2;
///
/// let curried_add = |first: i32| move |second: i32| first + second;
/// assert_eq!(uncurry2(curried_add)(3, 4), 7);
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}
