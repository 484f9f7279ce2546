//! The value tree and its kind classifier.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Insertion-ordered string-keyed mapping used for [`Value::Object`].
pub type Map = IndexMap<String, Value>;

/// A JSON-shaped value tree.
///
/// Containers are reference-counted, so `clone` is cheap and a value produced
/// by an update operation shares every unchanged branch with its input.
/// Callers must treat values as immutable; there is no way to write through
/// the shared structure from safe code anyway.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Explicit "no value": an absent leaf, or a hole left in a sparse array
    /// by a keyed delete.
    Undefined,
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    /// An instant, as milliseconds since the Unix epoch. Compared by value
    /// only; never interpreted.
    Date(i64),
    /// A pattern, carried as its source text. Compared by text only; never
    /// compiled or executed.
    Pattern(Arc<str>),
    Array(Arc<Vec<Value>>),
    Object(Arc<Map>),
}

/// The comparison kind of a [`Value`].
///
/// The differ descends only when both sides classify as `Array` or both as
/// `Object`; any other kind mismatch is a whole-value replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Date,
    Pattern,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Date => "date",
            Kind::Pattern => "pattern",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Build an array value.
    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(Arc::new(items))
    }

    /// Build an object value.
    pub fn object(map: Map) -> Value {
        Value::Object(Arc::new(map))
    }

    /// Build a string value.
    pub fn string(s: impl AsRef<str>) -> Value {
        Value::String(Arc::from(s.as_ref()))
    }

    /// Build a pattern value from its source text.
    pub fn pattern(source: impl AsRef<str>) -> Value {
        Value::Pattern(Arc::from(source.as_ref()))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Date(_) => Kind::Date,
            Value::Pattern(_) => Kind::Pattern,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for the two container kinds the navigator can descend into.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// True when both sides are the same shared allocation.
    ///
    /// This is the differ's fast path: a branch shared by reference between
    /// two snapshots is unchanged by construction and is skipped in O(1).
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b),
            (Value::Pattern(a), Value::Pattern(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Structural equality. Deviates from IEEE 754 in one place: two `Number`
/// values that are both NaN compare equal, so an unchanged NaN field does not
/// show up in every diff. Object equality ignores key insertion order.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(Arc::from(s.as_str()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Value {
        Value::object(map)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Value {
        Value::array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Value {
        Value::object(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(1.5).kind(), Kind::Number);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::Date(0).kind(), Kind::Date);
        assert_eq!(Value::pattern("a.*b").kind(), Kind::Pattern);
        assert_eq!(Value::array(vec![]).kind(), Kind::Array);
        assert_eq!(Value::object(Map::new()).kind(), Kind::Object);
    }

    #[test]
    fn nan_equals_nan() {
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::Number(f64::NAN), Value::Number(1.0));
    }

    #[test]
    fn object_equality_ignores_insertion_order() {
        let mut a = Map::new();
        a.insert("x".into(), Value::from(1));
        a.insert("y".into(), Value::from(2));
        let mut b = Map::new();
        b.insert("y".into(), Value::from(2));
        b.insert("x".into(), Value::from(1));
        assert_eq!(Value::object(a), Value::object(b));
    }

    #[test]
    fn clone_shares_containers() {
        let original = Value::array(vec![Value::from(1), Value::from(2)]);
        let copy = original.clone();
        assert!(original.ptr_eq(&copy));
        assert!(!original.ptr_eq(&Value::array(vec![Value::from(1), Value::from(2)])));
    }

    #[test]
    fn date_and_pattern_compare_by_value() {
        assert_eq!(Value::Date(1000), Value::Date(1000));
        assert_ne!(Value::Date(1000), Value::Date(1001));
        assert_eq!(Value::pattern("re"), Value::pattern("re"));
        assert_ne!(Value::pattern("re"), Value::pattern("er"));
        // A date never equals a number, even with the same raw value.
        assert_ne!(Value::Date(0), Value::from(0));
    }
}
