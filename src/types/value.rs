//! Dynamic attribute values read from a [`Resource`](crate::traits::Resource).

use crate::types::alloc_type::{Cow, String};
use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The current value of one resource attribute.
///
/// Resources hand out attribute values by name; the engine only ever inspects
/// them. Integers and floats compare with each other by numeric value.
///
/// # Examples
///
/// ```
/// use validation_rail::Value;
///
/// assert_eq!(Value::from(30), Value::Integer(30));
/// assert_eq!(Value::from(None::<i64>), Value::Nil);
/// assert!(Value::from("active").is_truthy());
/// assert!(!Value::Bool(false).is_truthy());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Outcome of comparing values the numeric predicates cannot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Incomparable;

impl Value {
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// `Nil` and `false` are falsy, everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns the value as `f64` when it is numeric.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Short lowercase name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }

    /// Orders `self` against a numeric `bound`.
    ///
    /// `Ok(None)` means comparable but unordered (`Nil`, or a `NaN` operand):
    /// such a value satisfies no predicate except inequality.
    /// `Err(Incomparable)` covers every other type pairing.
    pub(crate) fn numeric_cmp(&self, bound: &Value) -> Result<Option<Ordering>, Incomparable> {
        match (self, bound) {
            (Self::Integer(a), Self::Integer(b)) => Ok(Some(a.cmp(b))),
            (Self::Integer(a), Self::Float(b)) => Ok(cmp_int_float(*a, *b)),
            (Self::Float(a), Self::Integer(b)) => Ok(cmp_int_float(*b, *a).map(Ordering::reverse)),
            (Self::Float(a), Self::Float(b)) => Ok(a.partial_cmp(b)),
            (Self::Nil, b) if b.is_numeric() => Ok(None),
            _ => Err(Incomparable),
        }
    }
}

/// Exact ordering of an integer against a float.
///
/// Casting the integer to `f64` rounds above 2^53, so the float is truncated
/// into `i64` range instead and its fractional part breaks ties.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }

    let truncated = float as i64;
    match int.cmp(&truncated) {
        Ordering::Equal => (truncated as f64).partial_cmp(&float),
        unequal => Some(unequal),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_try_from_integer {
    ($($ty:ty),*) => {
        $(
            /// Fails when the value does not fit in `i64`.
            impl TryFrom<$ty> for Value {
                type Error = core::num::TryFromIntError;

                #[inline]
                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Self::Integer)
                }
            }
        )*
    };
}

impl_try_from_integer!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Cow<'_, str>> for Value {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}
