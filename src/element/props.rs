//! Prop values and the insertion-ordered prop map
//!
//! Props are stored as an ordered list of key/value pairs rather than a
//! hash map so that diagnostic output preserves the order the renderer
//! supplied the props in.

use regex::Regex;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

use super::node::Element;

/// A single prop value. Tree-shaped: arrays and objects nest arbitrarily.
#[derive(Debug, Clone)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// A function-valued prop, identified by name. Empty when anonymous.
    Func(String),
    /// A pattern-valued prop. Compared by source text.
    Pattern(Regex),
    /// A nested element.
    Element(Box<Element>),
    Array(Vec<PropValue>),
    Object(Props),
    /// An opaque non-plain object, identified by its type name.
    Instance(String),
}

impl PropValue {
    /// Name a function-valued prop, falling back to the anonymous form.
    pub fn func(name: impl Into<String>) -> Self {
        PropValue::Func(name.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        if let PropValue::Str(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&Props> {
        if let PropValue::Object(props) = self {
            Some(props)
        } else {
            None
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Null, PropValue::Null) => true,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::Func(a), PropValue::Func(b)) => a == b,
            // Regex carries no equality of its own; source text is the
            // identity that matters for assertions.
            (PropValue::Pattern(a), PropValue::Pattern(b)) => a.as_str() == b.as_str(),
            (PropValue::Element(a), PropValue::Element(b)) => a == b,
            (PropValue::Array(a), PropValue::Array(b)) => a == b,
            (PropValue::Object(a), PropValue::Object(b)) => a == b,
            (PropValue::Instance(a), PropValue::Instance(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Null => serializer.serialize_unit(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Number(n) => serializer.serialize_f64(*n),
            PropValue::Str(s) => serializer.serialize_str(s),
            PropValue::Func(name) => {
                let name = if name.is_empty() { "fn" } else { name };
                serializer.serialize_str(&format!("[fn {name}]"))
            }
            PropValue::Pattern(re) => serializer.serialize_str(&format!("/{}/", re.as_str())),
            PropValue::Element(el) => el.serialize(serializer),
            PropValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            PropValue::Object(props) => props.serialize(serializer),
            PropValue::Instance(type_name) => {
                serializer.serialize_str(&format!("{type_name} {{...}}"))
            }
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<Regex> for PropValue {
    fn from(value: Regex) -> Self {
        PropValue::Pattern(value)
    }
}

impl From<Element> for PropValue {
    fn from(value: Element) -> Self {
        PropValue::Element(Box::new(value))
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        PropValue::Array(value)
    }
}

impl From<Props> for PropValue {
    fn from(value: Props) -> Self {
        PropValue::Object(value)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => PropValue::Null,
            serde_json::Value::Bool(b) => PropValue::Bool(b),
            serde_json::Value::Number(n) => PropValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => PropValue::Str(s),
            serde_json::Value::Array(items) => {
                PropValue::Array(items.into_iter().map(PropValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut props = Props::new();
                for (key, value) in map {
                    props.insert(key, PropValue::from(value));
                }
                PropValue::Object(props)
            }
        }
    }
}

/// Insertion-ordered map of prop names to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Props::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a prop, replacing any existing value in place so the
    /// original key order is preserved.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Build a prop map from a JSON object, for succinct fixtures:
    ///
    /// ```rust-example
    /// let props = Props::from_json(serde_json::json!({"id": "root", "count": 3}));
    /// ```
    ///
    /// Non-object values yield an empty map.
    pub fn from_json(value: serde_json::Value) -> Self {
        match PropValue::from(value) {
            PropValue::Object(props) => props,
            _ => Props::new(),
        }
    }
}

impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl FromIterator<(String, PropValue)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

impl fmt::Display for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Props[{}]", self.entries.len())
    }
}
