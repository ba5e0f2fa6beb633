//! Runtime values carried by constants, field defaults and parameter defaults.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

/// Map key used to describe an opaque value in serialized form.
const OPAQUE_KEY: &str = "$opaque";

/// Map key standing for null in formats without a null literal (TOML).
const NULL_KEY: &str = "$null";

/// A key of an ordered PHP array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    String(String),
}

impl ArrayKey {
    /// Build a key the way PHP normalizes string keys: a canonical decimal
    /// integer string becomes an integer key, everything else stays a string.
    pub fn from_php_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(n) if n.to_string() == key => ArrayKey::Int(n),
            _ => ArrayKey::String(key.to_string()),
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(value: i64) -> Self {
        ArrayKey::Int(value)
    }
}

impl From<&str> for ArrayKey {
    fn from(value: &str) -> Self {
        ArrayKey::String(value.to_string())
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(n) => write!(f, "{}", n),
            ArrayKey::String(s) => f.write_str(s),
        }
    }
}

/// A runtime value as exposed by the introspection facility.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Ordered array; a list when its keys are exactly `0..n` in order.
    Array(IndexMap<ArrayKey, Value>),
    /// A value with no literal form (resource, object, closure).
    Opaque(String),
}

impl Value {
    /// Create a string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a sequentially indexed array.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Int(i as i64), v))
                .collect(),
        )
    }

    /// Create a keyed array, preserving the given order.
    pub fn map<K: Into<ArrayKey>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Array(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create an opaque value of the given runtime kind.
    pub fn opaque(kind: impl Into<String>) -> Self {
        Self::Opaque(kind.into())
    }

    /// The scalar/array type name inferred from the value itself.
    ///
    /// Returns `None` when the value alone says nothing useful (null and
    /// opaque values).
    pub fn php_type(&self) -> Option<&'static str> {
        match self {
            Value::Bool(_) => Some("bool"),
            Value::Int(_) => Some("int"),
            Value::Float(_) => Some("float"),
            Value::String(_) => Some("string"),
            Value::Array(_) => Some("array"),
            Value::Null | Value::Opaque(_) => None,
        }
    }
}

/// Returns true if the array keys are exactly `0, 1, ..., n-1` in that order.
///
/// An empty array counts as a list.
pub fn is_list(entries: &IndexMap<ArrayKey, Value>) -> bool {
    entries
        .keys()
        .enumerate()
        .all(|(i, key)| matches!(key, ArrayKey::Int(n) if *n == i as i64))
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl Serialize for ArrayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArrayKey::Int(n) => serializer.collect_str(n),
            ArrayKey::String(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for ArrayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = ArrayKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or string array key")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ArrayKey, E> {
                Ok(ArrayKey::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ArrayKey, E> {
                i64::try_from(v)
                    .map(ArrayKey::Int)
                    .map_err(|_| E::custom("array key out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ArrayKey, E> {
                Ok(ArrayKey::from_php_key(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Non-finite floats have no JSON form and are written as the PHP
/// constant names `INF`, `-INF` and `NAN`.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) if x.is_nan() => serializer.serialize_str("NAN"),
            Value::Float(x) if x.is_infinite() => {
                serializer.serialize_str(if *x > 0.0 { "INF" } else { "-INF" })
            }
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(entries) if is_list(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for item in entries.values() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Array(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, item) in entries {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
            Value::Opaque(kind) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(OPAQUE_KEY, kind)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a null, boolean, number, string, array or table value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        // PHP integers overflow into floats
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::list(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries = IndexMap::new();
        while let Some(key) = map.next_key::<ArrayKey>()? {
            let value = map.next_value::<Value>()?;
            entries.insert(key, value);
        }

        // A lone `$opaque` or `$null` entry is a marker, not an array.
        if entries.len() == 1 {
            if let Some(Value::String(kind)) = entries.get(&ArrayKey::from(OPAQUE_KEY)) {
                return Ok(Value::Opaque(kind.clone()));
            }
            if let Some(Value::Bool(true)) = entries.get(&ArrayKey::from(NULL_KEY)) {
                return Ok(Value::Null);
            }
        }

        Ok(Value::Array(entries))
    }
}
