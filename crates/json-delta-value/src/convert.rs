//! Conversions between [`Value`] and `serde_json::Value`, plus serde
//! implementations for the JSON-representable subset.
//!
//! `Undefined`, `Date`, `Pattern`, and non-finite numbers have no standard
//! JSON encoding; a wire convention for them is a collaborator concern, so
//! converting them out is an error rather than a silent guess.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::Value as Json;
use thiserror::Error;

use crate::value::{Kind, Value};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToJsonError {
    #[error("{0} value has no JSON representation")]
    Unrepresentable(Kind),
    #[error("non-finite number has no JSON representation")]
    NonFiniteNumber,
}

impl From<Json> for Value {
    fn from(json: Json) -> Value {
        Value::from(&json)
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            // serde_json numbers always fit f64 unless arbitrary_precision is
            // enabled, which this workspace never turns on.
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::string(s),
            Json::Array(items) => items.iter().map(Value::from).collect(),
            Json::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v)))
                .collect(),
        }
    }
}

impl Value {
    /// Convert to a `serde_json::Value`.
    ///
    /// Whole numbers in the i64 range come back as JSON integers so that the
    /// encoding of a value decoded from JSON is byte-stable.
    pub fn to_json(&self) -> Result<Json, ToJsonError> {
        match self {
            Value::Null => Ok(Json::Null),
            Value::Bool(b) => Ok(Json::Bool(*b)),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Ok(Json::String(s.to_string())),
            Value::Array(items) => items.iter().map(Value::to_json).collect(),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
                .collect::<Result<serde_json::Map<String, Json>, ToJsonError>>()
                .map(Json::Object),
            Value::Undefined | Value::Date(_) | Value::Pattern(_) => {
                Err(ToJsonError::Unrepresentable(self.kind()))
            }
        }
    }
}

fn number_to_json(n: f64) -> Result<Json, ToJsonError> {
    if !n.is_finite() {
        return Err(ToJsonError::NonFiniteNumber);
    }
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        return Ok(Json::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(Json::Number)
        .ok_or(ToJsonError::NonFiniteNumber)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match number_to_json(*n) {
                Ok(json) => json.serialize(serializer),
                Err(err) => Err(S::Error::custom(err)),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items.iter()),
            Value::Object(map) => serializer.collect_map(map.iter()),
            Value::Undefined | Value::Date(_) | Value::Pattern(_) => Err(S::Error::custom(
                ToJsonError::Unrepresentable(self.kind()),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        Ok(Value::from(Json::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_keeps_object_order() {
        let value = Value::from(json!({"z": 1, "a": [true, null, "s"]}));
        let map = value.as_object().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn to_json_round_trips() {
        let json = json!({"a": [1, 2.5, "x"], "b": {"c": null, "d": false}});
        assert_eq!(Value::from(&json).to_json().unwrap(), json);
    }

    #[test]
    fn whole_numbers_encode_as_integers() {
        assert_eq!(Value::from(3.0).to_json().unwrap(), json!(3));
        assert_eq!(Value::from(3.5).to_json().unwrap(), json!(3.5));
        assert_eq!(Value::from(-2.0).to_json().unwrap(), json!(-2));
    }

    #[test]
    fn unrepresentable_values_fail() {
        assert_eq!(
            Value::Undefined.to_json(),
            Err(ToJsonError::Unrepresentable(Kind::Undefined))
        );
        assert_eq!(
            Value::Date(0).to_json(),
            Err(ToJsonError::Unrepresentable(Kind::Date))
        );
        assert_eq!(
            Value::pattern("x").to_json(),
            Err(ToJsonError::Unrepresentable(Kind::Pattern))
        );
        assert_eq!(
            Value::Number(f64::NAN).to_json(),
            Err(ToJsonError::NonFiniteNumber)
        );
        // The error surfaces through a nested container too.
        let nested = Value::from(json!({"a": [1]}));
        assert!(nested.to_json().is_ok());
        let holed = Value::array(vec![Value::Undefined]);
        assert!(holed.to_json().is_err());
    }

    #[test]
    fn serde_round_trip() {
        let value = Value::from(json!({"n": 7, "s": ["a", {"b": true}]}));
        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn serialize_rejects_dates() {
        assert!(serde_json::to_string(&Value::Date(17)).is_err());
    }
}
