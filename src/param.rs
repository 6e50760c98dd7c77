use serde_json::{Map, Value};
use time::OffsetDateTime;

/// A single query parameter value.
///
/// Serialization is dispatched by variant, not by runtime type inspection.
/// The `Object` variant holds a JSON object map, so the "plain object"
/// classification is enforced by construction.
#[derive(Clone, PartialEq, Debug)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Emitted as its UTC ISO-8601 form with millisecond precision,
    /// e.g. `2019-04-01T05:55:39.030Z`.
    Date(OffsetDateTime),
    /// Emitted as the JSON serialization of the map.
    Object(Map<String, Value>),
    /// Expanded to one `key[]=value` pair per element, in array order.
    /// An `Array` nested inside another `Array` is not expanded again; it
    /// falls back to plain string coercion.
    Array(Vec<ParamValue>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<OffsetDateTime> for ParamValue {
    fn from(value: OffsetDateTime) -> Self {
        ParamValue::Date(value)
    }
}

impl From<Map<String, Value>> for ParamValue {
    fn from(value: Map<String, Value>) -> Self {
        ParamValue::Object(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Array(values.into_iter().map(Into::into).collect())
    }
}

/// An ordered mapping of query parameter keys to values.
///
/// Iteration order is insertion order, and insertion order determines the
/// order of `key=value` pairs in the built URL. Re-inserting an existing key
/// replaces its value in place, keeping the original position. A key may be
/// mapped to null with [`Params::insert_null`]; null-valued keys are skipped
/// entirely when the URL is built.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Params {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `key` to `value`, appending it after all existing keys, or
    /// replacing the value in place when `key` is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entry(key.into(), Some(value.into()));
    }

    /// Maps `key` to null. The builder emits nothing for the key, not even a
    /// placeholder.
    pub fn insert_null(&mut self, key: impl Into<String>) {
        self.entry(key.into(), None);
    }

    fn entry(&mut self, key: String, value: Option<ParamValue>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_ref()))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
