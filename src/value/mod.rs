mod scalar;

use std::fmt;

use indexmap::IndexMap;

pub use self::scalar::{DefaultScalarValue, ScalarValue};

/// A JSON-like raw value, as handed to this crate by its callers.
///
/// The same representation is used for values checked against input types
/// (arguments, variables, input object fields) and for runtime values handed
/// to abstract type resolvers.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<S = DefaultScalarValue> {
    /// The null marker.
    Null,

    /// A primitive value.
    Scalar(S),

    /// An enum literal, e.g. `MUSEUM`.
    Enum(String),

    /// An ordered list of values.
    List(Vec<Value<S>>),

    /// An object with fields kept in insertion order.
    Object(IndexMap<String, Value<S>>),
}

impl<S> Value<S> {
    /// Constructs a null value.
    #[must_use]
    pub fn null() -> Self {
        Self::Null
    }

    /// Constructs a scalar value.
    #[must_use]
    pub fn scalar<T: Into<S>>(v: T) -> Self {
        Self::Scalar(v.into())
    }

    /// Constructs an enum literal.
    #[must_use]
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Constructs a list value.
    #[must_use]
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Constructs an object value from `(key, value)` pairs.
    #[must_use]
    pub fn object<K>(o: IndexMap<K, Self>) -> Self
    where
        K: AsRef<str> + Eq + std::hash::Hash,
    {
        Self::Object(o.into_iter().map(|(k, v)| (k.as_ref().into(), v)).collect())
    }

    /// Indicates whether this value is the null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Views this value as a scalar, if it is one.
    pub fn as_scalar(&self) -> Option<&S> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Views this value as an enum literal, if it is one.
    pub fn as_enum_value(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Views this value as a list, if it is one.
    pub fn as_list_value(&self) -> Option<&[Self]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Views this value as an object, if it is one.
    pub fn as_object_value(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up a field of an object value.
    ///
    /// Returns [`None`] for absent fields and non-object values.
    pub fn get_field_value(&self, key: &str) -> Option<&Self> {
        self.as_object_value().and_then(|o| o.get(key))
    }
}

impl<S: ScalarValue> Value<S> {
    /// Views this value as a string scalar, if it is one.
    pub fn as_string_value(&self) -> Option<&str> {
        self.as_scalar().and_then(ScalarValue::try_as_str)
    }
}

impl<S: ScalarValue> fmt::Display for Value<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(s) => {
                if let Some(s) = s.try_as_str() {
                    write!(f, "\"{s}\"")
                } else {
                    write!(f, "{s}")
                }
            }
            Self::Enum(v) => write!(f, "{v}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    item.fmt(f)?;
                    if i < v.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Self::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    write!(f, "{k}: ")?;
                    v.fmt(f)?;
                    if i < o.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

impl<S, T> From<Option<T>> for Value<S>
where
    Self: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<S: From<String>> From<&str> for Value<S> {
    fn from(s: &str) -> Self {
        Self::scalar(s.to_owned())
    }
}

impl<S: From<String>> From<String> for Value<S> {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

impl<S: From<i32>> From<i32> for Value<S> {
    fn from(i: i32) -> Self {
        Self::scalar(i)
    }
}

impl<S: From<f64>> From<f64> for Value<S> {
    fn from(f: f64) -> Self {
        Self::scalar(f)
    }
}

impl<S: From<bool>> From<bool> for Value<S> {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}

impl<S, T> From<Vec<T>> for Value<S>
where
    Self: From<T>,
{
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::Value;

    #[test]
    fn value_fmt() {
        let value: Value = Value::null();
        assert_eq!(value.to_string(), "null");

        let value: Value = 123.into();
        assert_eq!(value.to_string(), "123");

        let value: Value = 12.3.into();
        assert_eq!(value.to_string(), "12.3");

        let value: Value = "FOO".into();
        assert_eq!(value.to_string(), "\"FOO\"");

        let value: Value = true.into();
        assert_eq!(value.to_string(), "true");

        let value: Value = Value::enum_value("BAR");
        assert_eq!(value.to_string(), "BAR");

        let value: Value = vec![1, 2].into();
        assert_eq!(value.to_string(), "[1, 2]");

        let value: Value = Value::object(IndexMap::from([
            ("foo", Value::from(1)),
            ("bar", Value::from(2)),
        ]));
        assert_eq!(value.to_string(), "{foo: 1, bar: 2}");
    }

    #[test]
    fn option_maps_none_to_null() {
        let value: Value = None::<i32>.into();
        assert!(value.is_null());

        let value: Value = Some("a").into();
        assert_eq!(value.as_string_value(), Some("a"));
    }

    #[test]
    fn field_access_on_objects_only() {
        let value: Value = Value::object(IndexMap::from([("kind", Value::from("museum"))]));

        assert_eq!(
            value.get_field_value("kind").and_then(Value::as_string_value),
            Some("museum"),
        );
        assert_eq!(value.get_field_value("missing"), None);
        assert_eq!(Value::<crate::DefaultScalarValue>::from(1).get_field_value("kind"), None);
    }
}
