use std::fmt;

use derive_more::with_trait::{Display, From};
use serde::{
    Serialize,
    de::{self, Deserialize, Deserializer},
};

/// Primitive leaf of a raw [`Value`].
///
/// Parse capabilities inspect scalars through this trait only, so a custom
/// representation (e.g. one with 64-bit integers) can be plugged in as long
/// as it exposes the four built-in GraphQL primitives.
///
/// [`Value`]: crate::Value
pub trait ScalarValue:
    fmt::Debug + fmt::Display + Clone + PartialEq + Send + Sync + 'static
{
    /// Returns the wrapped [`i32`], if this scalar is an integer.
    fn try_to_int(&self) -> Option<i32>;

    /// Returns the wrapped [`f64`], if this scalar is a number.
    ///
    /// Integers are widened losslessly.
    fn try_to_float(&self) -> Option<f64>;

    /// Returns the wrapped string, if this scalar is a string.
    fn try_as_str(&self) -> Option<&str>;

    /// Returns the wrapped [`bool`], if this scalar is a boolean.
    fn try_to_bool(&self) -> Option<bool>;
}

/// The default [`ScalarValue`] representation.
///
/// Covers the primitives required by the GraphQL spec: `Int`, `Float`,
/// `String` and `Boolean`.
#[derive(Clone, Debug, Display, From, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultScalarValue {
    /// `Int` primitive.
    Int(i32),

    /// `Float` primitive.
    Float(f64),

    /// `String` primitive.
    String(String),

    /// `Boolean` primitive.
    Boolean(bool),
}

impl From<&str> for DefaultScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl ScalarValue for DefaultScalarValue {
    fn try_to_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn try_to_float(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(f64::from(*i)),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn try_as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    fn try_to_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for DefaultScalarValue {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = DefaultScalarValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a valid input value")
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
                Ok(DefaultScalarValue::Boolean(b))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
                if let Ok(n) = i32::try_from(n) {
                    Ok(DefaultScalarValue::Int(n))
                } else {
                    // Browser's `JSON.stringify()` serializes all numbers
                    // having no fractional part as integers (no decimal
                    // point), so we must parse large integers as floating
                    // point, otherwise we would error on transferring large
                    // floating point numbers.
                    Ok(DefaultScalarValue::Float(n as f64))
                }
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
                if let Ok(n) = i32::try_from(n) {
                    Ok(DefaultScalarValue::Int(n))
                } else {
                    // See the comment in `visit_i64()` above.
                    Ok(DefaultScalarValue::Float(n as f64))
                }
            }

            fn visit_f64<E: de::Error>(self, f: f64) -> Result<Self::Value, E> {
                Ok(DefaultScalarValue::Float(f))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                self.visit_string(s.into())
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                Ok(DefaultScalarValue::String(s))
            }
        }

        de.deserialize_any(Visitor)
    }
}
