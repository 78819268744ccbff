//! [`serde`] support for raw [`Value`]s.
//!
//! [`Value`]: crate::Value

use std::{fmt, marker::PhantomData};

use indexmap::IndexMap;
use serde::{
    Serialize, Serializer,
    de::{self, Deserialize, Deserializer, IntoDeserializer as _},
    ser::{SerializeMap as _, SerializeSeq as _},
};

use crate::value::Value;

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Value<S> {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct Visitor<S: ?Sized>(PhantomData<S>);

        impl<'de, S: Deserialize<'de>> de::Visitor<'de> for Visitor<S> {
            type Value = Value<S>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a valid input value")
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
                S::deserialize(b.into_deserializer()).map(Value::Scalar)
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
                S::deserialize(n.into_deserializer()).map(Value::Scalar)
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
                S::deserialize(n.into_deserializer()).map(Value::Scalar)
            }

            fn visit_f64<E: de::Error>(self, n: f64) -> Result<Self::Value, E> {
                S::deserialize(n.into_deserializer()).map(Value::Scalar)
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                S::deserialize(s.into_deserializer()).map(Value::Scalar)
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                S::deserialize(s.into_deserializer()).map(Value::Scalar)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
            where
                V: de::SeqAccess<'de>,
            {
                let mut vals = Vec::new();
                while let Some(v) = visitor.next_element()? {
                    vals.push(v);
                }
                Ok(Value::List(vals))
            }

            fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                let mut obj = IndexMap::<String, Value<S>>::with_capacity(
                    visitor.size_hint().unwrap_or(0),
                );
                while let Some((key, val)) = visitor.next_entry()? {
                    obj.insert(key, val);
                }
                Ok(Value::Object(obj))
            }
        }

        de.deserialize_any(Visitor(PhantomData))
    }
}

impl<S: Serialize> Serialize for Value<S> {
    fn serialize<Ser: Serializer>(&self, ser: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            Self::Null => ser.serialize_unit(),
            Self::Scalar(s) => s.serialize(ser),
            Self::Enum(e) => ser.serialize_str(e),
            Self::List(l) => {
                let mut seq = ser.serialize_seq(Some(l.len()))?;
                for v in l {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Self::Object(o) => {
                let mut map = ser.serialize_map(Some(o.len()))?;
                for (k, v) in o {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
