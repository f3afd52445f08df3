//! The dynamic value passed between function values.
//!
//! Combinators such as [`partial`](crate::partial) or
//! [`curry`](crate::curry) are variadic and may return either a final result
//! or another function depending on how many arguments have accumulated.
//! [`Value`] is the single type that can carry all of those outcomes.

use std::fmt;
use std::rc::Rc;

use crate::args::Args;
use crate::error::{Error, Result, TypeMismatch};
use crate::function::Function;
use crate::record::Record;

/// A dynamically typed value.
///
/// `Absent` is the "no value" marker: an unfilled parameter, a missing
/// record field, or the skipped branch of [`when`](crate::when).
///
/// # Examples
///
/// ```rust
/// use argshape::{Value, args};
///
/// let list = Value::from(args![1, 2, "z:last"]);
/// assert_eq!(list.to_string(), r#"[1, 2, "z:last"]"#);
/// assert_eq!(Value::Absent.to_string(), "undefined");
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// No value.
    #[default]
    Absent,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(Rc<str>),
    /// An ordered sequence of values.
    List(Args),
    /// Named fields.
    Record(Record),
    /// A callable function value.
    Function(Function),
}

impl Value {
    /// Returns the name of this value's variant.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this value is a function.
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Truthiness as used by [`not`](crate::not) and [`when`](crate::when).
    ///
    /// Absent, `false`, zero, NaN and the empty string are falsy; everything
    /// else, including empty lists and records, is truthy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argshape::{Args, Value};
    ///
    /// assert!(!Value::Absent.is_truthy());
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from(Args::new()).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(value) => !value.is_empty(),
            Self::List(_) | Self::Record(_) | Self::Function(_) => true,
        }
    }

    /// Calls this value with `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotCallable`] if this value is not a function, or
    /// whatever error the function itself returns.
    pub fn call(&self, args: Args) -> Result<Self> {
        match self {
            Self::Function(function) => function.call(args),
            other => Err(Error::NotCallable {
                found: other.kind(),
            }),
        }
    }

    /// Calls this value with a single argument.
    ///
    /// # Errors
    ///
    /// See [`Value::call`].
    pub fn call1(&self, argument: impl Into<Self>) -> Result<Self> {
        self.call(Args::from_iter([argument.into()]))
    }

    /// Returns the contained boolean, if any.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained integer, if any.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the contained number as a float. Integers are widened.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the contained string, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Returns the contained list, if any.
    pub const fn as_list(&self) -> Option<&Args> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the contained record, if any.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the contained function, if any.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the contained function or [`Error::NotCallable`].
    ///
    /// # Errors
    ///
    /// Fails when this value is not a function.
    pub fn to_function(&self) -> Result<Function> {
        self.as_function().cloned().ok_or(Error::NotCallable {
            found: self.kind(),
        })
    }

    fn fmt_nested(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(formatter, "{text:?}"),
            other => write!(formatter, "{other}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Record(left), Self::Record(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(formatter, "undefined"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) if value.is_infinite() => {
                let sign = if value.is_sign_negative() { "-" } else { "" };
                write!(formatter, "{sign}Infinity")
            }
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value}"),
            Self::List(values) => {
                write!(formatter, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    value.fmt_nested(formatter)?;
                }
                write!(formatter, "]")
            }
            Self::Record(record) => {
                if record.is_empty() {
                    return write!(formatter, "{{}}");
                }
                write!(formatter, "{{ ")?;
                for (index, (key, value)) in record.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: ")?;
                    value.fmt_nested(formatter)?;
                }
                write!(formatter, " }}")
            }
            Self::Function(function) => write!(formatter, "[Function: {}]", function.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(Rc::from(value))
    }
}

impl From<Args> for Value {
    fn from(value: Args) -> Self {
        Self::List(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Typed extraction from a [`Value`].
///
/// Used by functions generated with [`lift`](crate::lift) to convert each
/// dynamic argument into the declared parameter type.
///
/// # Examples
///
/// ```rust
/// use argshape::{FromValue, Value};
///
/// assert_eq!(i64::from_value(Value::from(3)), Ok(3));
/// assert_eq!(Option::<i64>::from_value(Value::Absent), Ok(None));
/// ```
pub trait FromValue: Sized {
    /// Converts `value`, or reports what was expected and found.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when `value` has the wrong kind.
    fn from_value(value: Value) -> std::result::Result<Self, TypeMismatch>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> std::result::Result<Self, TypeMismatch> {
        Ok(value)
    }
}

macro_rules! impl_from_value {
    ($target:ty, $expected:literal, $($pattern:pat => $converted:expr),+ $(,)?) => {
        impl FromValue for $target {
            fn from_value(value: Value) -> std::result::Result<Self, TypeMismatch> {
                match value {
                    $($pattern => Ok($converted),)+
                    other => Err(TypeMismatch::new($expected, other.kind())),
                }
            }
        }
    };
}

impl_from_value!(bool, "bool", Value::Bool(value) => value);
impl_from_value!(i64, "int", Value::Int(value) => value);

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> std::result::Result<Self, TypeMismatch> {
        match value {
            Value::Float(value) => Ok(value),
            Value::Int(value) => Ok(value as Self),
            other => Err(TypeMismatch::new("float", other.kind())),
        }
    }
}

impl_from_value!(String, "text", Value::Text(value) => value.to_string());
impl_from_value!(Args, "list", Value::List(value) => value);
impl_from_value!(Record, "record", Value::Record(value) => value);
impl_from_value!(Function, "function", Value::Function(value) => value);

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> std::result::Result<Self, TypeMismatch> {
        match value {
            Value::Absent => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Functions serialize as their display string; they cannot be read back.
#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::List(values) => serde::Serialize::serialize(values, serializer),
            Self::Record(record) => serde::Serialize::serialize(record, serializer),
            Self::Function(function) => serializer.collect_str(function),
        }
    }
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a null, boolean, number, string, sequence or map")
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Absent)
    }

    fn visit_none<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
        Ok(Value::Int(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
        Ok(i64::try_from(value).map_or(Value::Float(value as f64), Value::Int))
    }

    fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut values = Args::new();
        while let Some(value) = access.next_element::<Value>()? {
            values.push(value);
        }
        Ok(Value::List(values))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            record.insert(key, value);
        }
        Ok(Value::Record(record))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
