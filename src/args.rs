//! Argument sequences.
//!
//! [`Args`] is the ordered, finite collection that gathers and spreads
//! arguments between combinators. It plays the role of both the rest
//! parameter (`...args` in a declaration) and the spread at a call site.

use crate::value::Value;

/// An ordered sequence of argument values.
///
/// Reading past the end yields [`Value::Absent`], which is how unfilled
/// parameters behave.
///
/// # Examples
///
/// ```rust
/// use argshape::{Value, args};
///
/// let arguments = args![1, 2, 3, 4, 5];
/// assert_eq!(arguments.get(3), Value::from(4));
/// assert_eq!(arguments.get(9), Value::Absent);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args(Vec<Value>);

impl Args {
    /// Creates an empty argument sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the argument at `index`, or absent.
    pub fn get(&self, index: usize) -> Value {
        self.0.get(index).cloned().unwrap_or_default()
    }

    /// Returns the first argument, or absent.
    pub fn first(&self) -> Value {
        self.get(0)
    }

    /// Appends one argument.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// Returns `self` followed by `later`.
    #[must_use]
    pub fn concat(&self, later: &Self) -> Self {
        self.iter().chain(later.iter()).cloned().collect()
    }

    /// Returns the arguments in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Destructures into `N` positional values and the rest.
    ///
    /// Positions without a matching argument are absent; the rest is empty
    /// when there are `N` or fewer arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argshape::{Value, args};
    ///
    /// let ([x, y, z], rest) = args![1, 2].gather::<3>();
    /// assert_eq!((x, y, z), (Value::from(1), Value::from(2), Value::Absent));
    /// assert!(rest.is_empty());
    ///
    /// let ([_, _, _], rest) = args![1, 2, 3, 4, 5].gather::<3>();
    /// assert_eq!(rest, args![4, 5]);
    /// ```
    pub fn gather<const N: usize>(mut self) -> ([Value; N], Self) {
        let split = N.min(self.len());
        let rest = Self(self.0.drain(split..).collect());
        let mut positional = self.0.into_iter();
        let heads = std::array::from_fn(|_| positional.next().unwrap_or_default());
        (heads, rest)
    }

    /// Iterates over the arguments.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Views the arguments as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iterator: I) -> Self {
        Self(iterator.into_iter().collect())
    }
}

impl IntoIterator for Args {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl Extend<Value> for Args {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iterator: I) {
        self.0.extend(iterator);
    }
}

/// Builds [`Args`] from a list of expressions, converting each with
/// [`Value::from`].
///
/// # Examples
///
/// ```rust
/// use argshape::{Value, args};
///
/// let arguments = args![1, "two", 3.0, true];
/// assert_eq!(arguments.len(), 4);
/// assert_eq!(arguments.get(1), Value::from("two"));
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::Args as ::core::iter::FromIterator<$crate::Value>>::from_iter([
            $($crate::Value::from($value)),+
        ])
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Args {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Args {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<Value> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_concat_keeps_order() {
        let preset = args![1, 2];
        let later = args![3];
        assert_eq!(preset.concat(&later), args![1, 2, 3]);
    }

    #[rstest]
    fn test_reversed() {
        assert_eq!(args![1, "b", 3.5].reversed(), args![3.5, "b", 1]);
    }

    #[rstest]
    #[case(args![], args![])]
    #[case(args![1, 2, 3], args![])]
    #[case(args![1, 2, 3, 4], args![4])]
    #[case(args![1, 2, 3, 4, 5], args![4, 5])]
    fn test_gather_rest(#[case] arguments: Args, #[case] expected_rest: Args) {
        let (_, rest) = arguments.gather::<3>();
        assert_eq!(rest, expected_rest);
    }

    #[rstest]
    fn test_gather_pads_with_absent() {
        let ([x, y, z], _) = Args::new().gather::<3>();
        assert!(x.is_absent() && y.is_absent() && z.is_absent());
    }

    #[rstest]
    fn test_collect_many_arguments() {
        let arguments: Args = (0_i64..10).map(Value::from).collect();
        assert_eq!(arguments.len(), 10);
        assert_eq!(arguments.get(9), Value::from(9));
    }
}
