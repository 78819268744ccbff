//! Conversion of [`serde_json::Value`]s into raw [`Value`]s.

use serde_json::Value as Json;

use crate::value::{DefaultScalarValue, Value};

impl From<Json> for Value<DefaultScalarValue> {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::scalar(b),
            Json::Number(n) => n
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(Self::scalar)
                .or_else(|| n.as_f64().map(Self::scalar))
                .unwrap_or(Self::Null),
            Json::String(s) => Self::scalar(s),
            Json::Array(a) => Self::List(a.into_iter().map(Into::into).collect()),
            Json::Object(o) => Self::Object(o.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}
