//! The value type stored inside documents.
//!
//! [`Value`] mirrors the JSON data model: null, booleans, numbers, text,
//! lists, and nested documents. Conversions from primitives are provided so
//! document methods can take `impl Into<Value>` and callers can pass plain
//! literals.

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::Document;
use super::errors::DocumentError;

/// A single value inside a [`Document`].
///
/// Values form a tree: scalars at the leaves, lists and nested documents as
/// branches. `Null` is a real stored value, distinct from an absent entry.
///
/// ```
/// use burrow::Value;
///
/// let value = Value::from("hello");
/// assert_eq!(value.as_text(), Some("hello"));
/// assert_eq!(value.type_name(), "text");
/// assert_eq!(value, "hello");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An explicitly declared null
    Null,
    /// A boolean
    Bool(bool),
    /// A number, preserving the integer/float distinction of the source JSON
    Number(serde_json::Number),
    /// A text string
    Text(String),
    /// An ordered list of values
    List(Vec<Value>),
    /// A nested document
    Doc(Document),
}

impl Value {
    /// Returns true if this value is a declared null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns a human-readable name for the variant, used in type mismatch
    /// errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Doc(_) => "doc",
        }
    }

    /// Extracts a boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts a boolean, or the provided default for any other variant.
    pub fn as_bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    /// Extracts a signed integer, if this is a number that fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Extracts a signed integer, or the provided default.
    pub fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    /// Extracts an unsigned integer, if this is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Extracts a float. Integers convert losslessly where possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the underlying number, if this is a number.
    pub fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Extracts the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the text, or `""` for any other variant.
    pub fn as_text_or_empty(&self) -> &str {
        self.as_text().unwrap_or("")
    }

    /// Returns a reference to the list, if this is a list.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a mutable reference to the list, if this is a list.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a reference to the nested document, if this is one.
    pub fn as_doc(&self) -> Option<&Document> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Returns a mutable reference to the nested document, if this is one.
    pub fn as_doc_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// === Conversions from primitives ===

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON representation and become `Null`.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::from(f64::from(n))
    }
}

impl From<serde_json::Number> for Value {
    fn from(n: serde_json::Number) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Doc(doc)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` converts to a declared null.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

// === Conversions to primitives ===

impl TryFrom<&Value> for bool {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| DocumentError::TypeMismatch {
            expected: "bool".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for i64 {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_i64().ok_or_else(|| DocumentError::TypeMismatch {
            expected: "number".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for u64 {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_u64().ok_or_else(|| DocumentError::TypeMismatch {
            expected: "number".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for f64 {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or_else(|| DocumentError::TypeMismatch {
            expected: "number".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| DocumentError::TypeMismatch {
                expected: "text".to_string(),
                actual: value.type_name().to_string(),
            })
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = DocumentError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| DocumentError::TypeMismatch {
            expected: "text".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for Vec<Value> {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_list()
            .cloned()
            .ok_or_else(|| DocumentError::TypeMismatch {
                expected: "list".to_string(),
                actual: value.type_name().to_string(),
            })
    }
}

impl TryFrom<&Value> for Document {
    type Error = DocumentError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_doc()
            .cloned()
            .ok_or_else(|| DocumentError::TypeMismatch {
                expected: "doc".to_string(),
                actual: value.type_name().to_string(),
            })
    }
}

// === Comparisons against primitives ===

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self.as_text() == Some(other.as_str())
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

// === JSON bridges ===

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Doc(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::Text(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Doc(doc) => serde_json::Value::Object(
                doc.into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Doc(doc) => doc.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Value::from(json))
    }
}

impl fmt::Display for Value {
    /// Renders the value as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
