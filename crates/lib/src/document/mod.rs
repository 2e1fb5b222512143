//! Structured documents with dot-notation access.
//!
//! A [`Document`] is an ordered mapping from string keys to [`Value`]s, the
//! in-memory form of one JSON object. Every operation that takes a key takes
//! a dot-separated [`Path`] and walks the nested tree, so `"user.name"`
//! reaches inside the `"user"` entry without the caller unpacking it.
//!
//! The API keeps two states apart that stringly-typed layers usually blur:
//! an entry that is absent, and an entry declared as null. Reads return
//! `Option<&Value>`, where `None` means absent and `Some(&Value::Null)` means
//! declared null. Nothing in this module performs I/O or logging.

mod access;
pub mod errors;
pub mod path;
pub mod value;

pub use errors::DocumentError;
pub use path::Path;
pub use value::Value;

use std::fmt;
use std::ops;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maximum nesting depth accepted by [`Document::from_json`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for decoding JSON text into a [`Document`].
///
/// ```
/// use burrow::{DecodeOptions, Document};
///
/// let options = DecodeOptions::new().max_depth(4);
/// let doc = Document::from_json_with(r#"{"a":{"b":1}}"#, options)?;
/// assert_eq!(doc.get("a.b"), Some(&1.into()));
/// # Ok::<(), burrow::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    max_depth: usize,
}

impl DecodeOptions {
    /// Creates options with the default depth limit.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum container nesting depth.
    ///
    /// Scalars have depth 0 and each list or mapping wrapper adds 1. Input
    /// nested strictly deeper than the limit is rejected.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered JSON object with dot-notation access to nested data.
///
/// Entries keep their insertion order, so a document round-trips through JSON
/// without reshuffling keys. Reads never allocate and never invent structure;
/// writes create intermediate mappings as needed.
///
/// ```
/// use burrow::Document;
///
/// let mut doc = Document::from_json(r#"{"user":{"name":"Alice","roles":["admin"]}}"#)?;
///
/// assert_eq!(doc.get("user.name"), Some(&"Alice".into()));
/// assert_eq!(doc.get("user.roles.0"), Some(&"admin".into()));
/// assert!(doc.missing("user.email"));
///
/// doc.set("user.email", "alice@example.com")
///     .fill("user.name", "ignored");
/// assert_eq!(doc.get("user.name"), Some(&"Alice".into()));
/// assert_eq!(doc["user.email"], "alice@example.com");
/// # Ok::<(), burrow::Error>(())
/// ```
///
/// Indexing with `doc[path]` returns `Value::Null` for paths that do not
/// resolve; use [`get`](Document::get) when absence matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Decodes a JSON string into a document with default options.
    ///
    /// The top level is coerced into a mapping: an object becomes the
    /// document as-is, an array becomes a document keyed `"0"`, `"1"`, ...,
    /// and a scalar or null becomes an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MalformedJson`] for syntactically invalid
    /// input and [`DocumentError::DepthExceeded`] when nesting passes the
    /// depth limit.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Self::from_json_with(text, DecodeOptions::default())
    }

    /// Decodes a JSON string with explicit [`DecodeOptions`].
    pub fn from_json_with(text: &str, options: DecodeOptions) -> crate::Result<Self> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| DocumentError::MalformedJson { source: e })?;
        let depth = json_depth(&json);
        if depth > options.max_depth {
            return Err(DocumentError::DepthExceeded {
                max_depth: options.max_depth,
            }
            .into());
        }
        Ok(Self::from_json_value(json))
    }

    /// Converts an already-parsed JSON value into a document, applying the
    /// same top-level coercion as [`from_json`](Document::from_json).
    pub fn from_json_value(json: serde_json::Value) -> Self {
        match Value::from(json) {
            Value::Doc(doc) => doc,
            Value::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect(),
            _ => Self::new(),
        }
    }

    /// Builds a document from any serializable value.
    ///
    /// The value is serialized to its JSON shape and absorbed like
    /// [`from_json_value`](Document::from_json_value). Useful for turning a
    /// typed struct into an editable bag.
    pub fn from_serialize<T: Serialize>(value: &T) -> crate::Result<Self> {
        let json =
            serde_json::to_value(value).map_err(|e| DocumentError::Serialize { source: e })?;
        Ok(Self::from_json_value(json))
    }

    // === Reads ===

    /// Returns the value at `path`, or `None` when the path does not resolve.
    ///
    /// A declared null resolves to `Some(&Value::Null)`:
    ///
    /// ```
    /// use burrow::{Document, Value};
    ///
    /// let doc = Document::from_json(r#"{"a":null}"#)?;
    /// assert_eq!(doc.get("a"), Some(&Value::Null));
    /// assert_eq!(doc.get("b"), None);
    /// # Ok::<(), burrow::Error>(())
    /// ```
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        access::resolve(&self.entries, path.as_ref())
    }

    /// Returns a mutable reference to the value at `path`. Never inserts.
    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        access::resolve_mut(&mut self.entries, path.as_ref())
    }

    /// Returns the value at `path`, or `default` when the path does not
    /// resolve. A declared null is a resolved value and is returned as-is.
    pub fn get_or(&self, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
        match self.get(path) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Like [`get_or`](Document::get_or), but the default is only computed
    /// when the path does not resolve.
    pub fn get_or_else<T, F>(&self, path: impl AsRef<Path>, default: F) -> Value
    where
        T: Into<Value>,
        F: FnOnce() -> T,
    {
        match self.get(path) {
            Some(value) => value.clone(),
            None => default().into(),
        }
    }

    /// Returns the value at `path` converted to `T`, or `None` when the path
    /// does not resolve or the value is of a different type.
    ///
    /// ```
    /// use burrow::Document;
    ///
    /// let doc = Document::from_json(r#"{"count":3,"name":"x"}"#)?;
    /// assert_eq!(doc.get_as::<i64>("count"), Some(3));
    /// assert_eq!(doc.get_as::<i64>("name"), None);
    /// # Ok::<(), burrow::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocumentError>,
    {
        let value = self.get(path)?;
        T::try_from(value).ok()
    }

    /// Resolves several paths at once.
    ///
    /// The result maps each requested path string to its value, in request
    /// order, with `Value::Null` standing in for paths that do not resolve.
    pub fn get_many<I, P>(&self, paths: I) -> IndexMap<String, Value>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.get_many_with(paths, || Value::Null)
    }

    /// Like [`get_many`](Document::get_many) with a shared default for paths
    /// that do not resolve.
    pub fn get_many_or<I, P>(&self, paths: I, default: impl Into<Value>) -> IndexMap<String, Value>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let default = default.into();
        self.get_many_with(paths, || default.clone())
    }

    /// Like [`get_many`](Document::get_many), computing the default once per
    /// path that does not resolve.
    pub fn get_many_with<I, P, T, F>(&self, paths: I, mut default: F) -> IndexMap<String, Value>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        T: Into<Value>,
        F: FnMut() -> T,
    {
        let mut out = IndexMap::new();
        for path in paths {
            let path = path.as_ref();
            let value = match self.get(path) {
                Some(value) => value.clone(),
                None => default().into(),
            };
            out.insert(path.as_str().to_string(), value);
        }
        out
    }

    // === Writes ===

    /// Sets `path` to `value`, overwriting whatever is there.
    ///
    /// Missing intermediate segments become empty mappings, and intermediates
    /// that cannot be descended (scalars, nulls, lists hit with a non-index
    /// segment) are replaced by empty mappings. A numeric segment descends an
    /// existing list in place when it is a valid in-range index.
    ///
    /// ```
    /// use burrow::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.set("a.b.c", 1).set("a.b.d", 2);
    /// assert_eq!(doc.to_json()?, r#"{"a":{"b":{"c":1,"d":2}}}"#);
    /// # Ok::<(), burrow::Error>(())
    /// ```
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> &mut Self {
        access::assign(&mut self.entries, path.as_ref(), value.into(), true);
        self
    }

    /// Sets several paths in iteration order. Later entries win on overlap.
    pub fn set_many<I, P, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<Path>,
        V: Into<Value>,
    {
        for (path, value) in entries {
            self.set(path, value);
        }
        self
    }

    /// Sets `path` to `value` only when the path is absent or declared null.
    ///
    /// Any other existing value is left untouched. Structure created for
    /// intermediate segments follows the same rules as
    /// [`set`](Document::set).
    pub fn fill(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> &mut Self {
        access::assign(&mut self.entries, path.as_ref(), value.into(), false);
        self
    }

    /// Applies [`fill`](Document::fill) to several paths in iteration order.
    pub fn fill_many<I, P, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<Path>,
        V: Into<Value>,
    {
        for (path, value) in entries {
            self.fill(path, value);
        }
        self
    }

    /// Builder-style [`set`](Document::set), consuming and returning the
    /// document.
    ///
    /// ```
    /// use burrow::Document;
    ///
    /// let doc = Document::new().with("name", "svc").with("retries.max", 3);
    /// assert_eq!(doc.get("retries.max"), Some(&3.into()));
    /// ```
    pub fn with(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    // === Presence ===

    /// Returns true if `path` resolves, including to a declared null.
    pub fn contains_key(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Returns true if every path resolves. An empty set of paths is false.
    pub fn has<I, P>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut any = false;
        for path in paths {
            if !self.contains_key(path) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Returns true if at least one path resolves.
    ///
    /// An empty set of paths asks whether the document has any entries at
    /// all, mirroring [`is_not_empty`](Document::is_not_empty).
    pub fn has_any<I, P>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut checked = false;
        for path in paths {
            if self.contains_key(path) {
                return true;
            }
            checked = true;
        }
        if checked { false } else { self.is_not_empty() }
    }

    /// Returns true if `path` does not resolve.
    pub fn missing(&self, path: impl AsRef<Path>) -> bool {
        !self.contains_key(path)
    }

    /// Returns true if `path` resolves to a non-null value.
    pub fn is_set(&self, path: impl AsRef<Path>) -> bool {
        matches!(self.get(path), Some(value) if !value.is_null())
    }

    /// Returns true if `path` is absent or declared null.
    pub fn is_not_set(&self, path: impl AsRef<Path>) -> bool {
        !self.is_set(path)
    }

    // === Removal ===

    /// Removes the value at `path`, if any, and returns the document for
    /// chaining. Removing a path that does not resolve is a no-op.
    ///
    /// ```
    /// use burrow::Document;
    ///
    /// let mut doc = Document::from_json(r#"{"a":{"b":1,"c":2}}"#)?;
    /// doc.forget("a.b").forget("a.b");
    /// assert_eq!(doc.to_json()?, r#"{"a":{"c":2}}"#);
    /// # Ok::<(), burrow::Error>(())
    /// ```
    pub fn forget(&mut self, path: impl AsRef<Path>) -> &mut Self {
        access::prune(&mut self.entries, path.as_ref());
        self
    }

    /// Removes and returns the value at `path`.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        access::prune(&mut self.entries, path.as_ref())
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // === Collection surface ===

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the document has at least one entry.
    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Iterates over top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over top-level values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates over top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the underlying ordered map.
    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Returns the underlying ordered map mutably.
    ///
    /// Keys are literal here; a key containing a dot is one entry, not a
    /// nested path.
    pub fn as_map_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.entries
    }

    /// Replaces all entries with the provided ones. Keys are literal, not
    /// dot-notation paths.
    pub fn replace<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    // === Projections ===

    /// Returns the top-level entries whose literal keys are in `keys`, in
    /// document order.
    pub fn only<I, K>(&self, keys: I) -> IndexMap<String, Value>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let wanted: Vec<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
        self.entries
            .iter()
            .filter(|(key, _)| wanted.iter().any(|w| w == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns the top-level entries whose literal keys are not in `keys`,
    /// in document order. Complement of [`only`](Document::only).
    pub fn except<I, K>(&self, keys: I) -> IndexMap<String, Value>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let excluded: Vec<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
        self.entries
            .iter()
            .filter(|(key, _)| !excluded.iter().any(|w| w == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Builds a new document containing only the requested paths, preserving
    /// their nested placement.
    ///
    /// Paths that do not resolve are declared null in the result, so the
    /// shape of the output depends only on the requested paths.
    ///
    /// ```
    /// use burrow::Document;
    ///
    /// let doc = Document::from_json(r#"{"a":{"b":1,"c":2},"d":3}"#)?;
    /// let picked = doc.segments(["a.b", "d", "e"]);
    /// assert_eq!(picked.to_json()?, r#"{"a":{"b":1},"d":3,"e":null}"#);
    /// # Ok::<(), burrow::Error>(())
    /// ```
    pub fn segments<I, P>(&self, paths: I) -> Document
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.segments_with(paths, || Value::Null)
    }

    /// Like [`segments`](Document::segments) with a shared default for paths
    /// that do not resolve.
    pub fn segments_or<I, P>(&self, paths: I, default: impl Into<Value>) -> Document
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let default = default.into();
        self.segments_with(paths, || default.clone())
    }

    /// Like [`segments`](Document::segments), computing the default once per
    /// path that does not resolve.
    pub fn segments_with<I, P, T, F>(&self, paths: I, mut default: F) -> Document
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        T: Into<Value>,
        F: FnMut() -> T,
    {
        let mut out = Document::new();
        for path in paths {
            let path = path.as_ref();
            let value = match self.get(path) {
                Some(value) => value.clone(),
                None => default().into(),
            };
            out.set(path, value);
        }
        out
    }

    /// Coerces the value at `path` into an ordered map.
    ///
    /// A nested document yields its entries, a list yields entries keyed
    /// `"0"`, `"1"`, ..., a scalar yields a single `"0"` entry, and a
    /// declared null or unresolved path yields an empty map.
    pub fn collect(&self, path: impl AsRef<Path>) -> IndexMap<String, Value> {
        match self.get(path) {
            None | Some(Value::Null) => IndexMap::new(),
            Some(Value::Doc(doc)) => doc.as_map().clone(),
            Some(Value::List(items)) => items
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value.clone()))
                .collect(),
            Some(scalar) => std::iter::once(("0".to_string(), scalar.clone())).collect(),
        }
    }

    // === Serialization ===

    /// Encodes the document as compact JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string(self).map_err(|e| DocumentError::Serialize { source: e }.into())
    }

    /// Encodes the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocumentError::Serialize { source: e }.into())
    }

    /// Converts the document into a plain JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), serde_json::Value::from(value.clone())))
                .collect(),
        )
    }
}

/// Container nesting depth: scalars are 0, each list or mapping adds 1.
fn json_depth(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Array(items) => 1 + items.iter().map(json_depth).max().unwrap_or(0),
        serde_json::Value::Object(map) => 1 + map.values().map(json_depth).max().unwrap_or(0),
        _ => 0,
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IndexMap<String, Value>> for Document {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    /// Collects literal top-level entries. Keys are not dot-notation paths.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Extend<(String, Value)> for Document {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<P: AsRef<Path> + ?Sized> ops::Index<&P> for Document {
    type Output = Value;

    /// Returns the value at the path, or `Value::Null` when it does not
    /// resolve. Indexing never panics.
    fn index(&self, path: &P) -> &Value {
        static NULL: Value = Value::Null;
        self.get(path).unwrap_or(&NULL)
    }
}

impl<P: AsRef<Path> + ?Sized> ops::IndexMut<&P> for Document {
    /// Returns a mutable slot at the path, declaring it null first when it
    /// does not resolve. Intermediate structure is created as in
    /// [`set`](Document::set).
    fn index_mut(&mut self, path: &P) -> &mut Value {
        let path = path.as_ref();
        if access::resolve(&self.entries, path).is_none() {
            access::assign(&mut self.entries, path, Value::Null, true);
        }
        access::resolve_mut(&mut self.entries, path).expect("path resolves after assignment")
    }
}

impl fmt::Display for Document {
    /// Renders the document as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
