//! Raw grammar value tree.
//!
//! Both parsers produce the same [`RawValue`] shape, so a consumer never needs
//! to know whether a grammar came from JSON or a property list:
//!
//! ```text
//! RawValue
//!   ├── Null / Bool / Integer / Real / String   (leaves)
//!   ├── Array(RawArray)   Vec<RawValue>                 + Option<SourceLocation>
//!   └── Dict(RawDict)     IndexMap<String, RawValue>    + Option<SourceLocation>
//! ```
//!
//! Source locations live in a typed field on each container instead of an
//! in-band key. [`RawValue::to_json`] re-creates the `$vscodeTextmateLocation`
//! key for consumers that expect the wire convention.

mod de;
mod grammar;
mod ser;

pub use grammar::RawGrammar;

use indexmap::IndexMap;

use crate::base::SourceLocation;

/// Reserved property name used for location metadata in the wire form.
pub const LOCATION_KEY: &str = "$vscodeTextmateLocation";

/// A node of a raw grammar document.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(RawArray),
    Dict(RawDict),
}

/// An ordered mapping with string keys. Insertion order is preserved and is
/// part of equality.
#[derive(Debug, Clone, Default)]
pub struct RawDict {
    entries: IndexMap<String, RawValue>,
    location: Option<SourceLocation>,
}

/// An ordered sequence of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArray {
    items: Vec<RawValue>,
    location: Option<SourceLocation>,
}

impl RawValue {
    /// Short name of the value's kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Dict(_) => "dictionary",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a float; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&RawArray> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&RawDict> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Look up a key when this value is a dictionary.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.as_dict().and_then(|d| d.get(key))
    }

    /// Location of this node, if it is a container that carries one.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Array(a) => a.location(),
            Self::Dict(d) => d.location(),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Dict(_))
    }

    /// Remove location annotations from this node and all its descendants.
    pub fn strip_locations(&mut self) {
        match self {
            Self::Array(a) => {
                a.location = None;
                a.items.iter_mut().for_each(RawValue::strip_locations);
            }
            Self::Dict(d) => {
                d.location = None;
                d.entries.values_mut().for_each(RawValue::strip_locations);
            }
            _ => {}
        }
    }

    /// Owned variant of [`strip_locations`](Self::strip_locations).
    pub fn without_locations(mut self) -> Self {
        self.strip_locations();
        self
    }

    /// Visit this node and every descendant in pre-order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a RawValue)) {
        f(self);
        match self {
            Self::Array(a) => a.iter().for_each(|v| v.walk(f)),
            Self::Dict(d) => d.values().for_each(|v| v.walk(f)),
            _ => {}
        }
    }
}

impl RawDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(location: SourceLocation) -> Self {
        Self {
            entries: IndexMap::new(),
            location: Some(location),
        }
    }

    /// Insert an entry. A duplicate key keeps its original position and takes
    /// the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) -> Option<RawValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &RawValue> {
        self.entries.values()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn set_location(&mut self, location: Option<SourceLocation>) {
        self.location = location;
    }
}

impl RawArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(location: SourceLocation) -> Self {
        Self {
            items: Vec::new(),
            location: Some(location),
        }
    }

    pub fn push(&mut self, value: RawValue) {
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Option<&RawValue> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawValue> {
        self.items.iter()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn set_location(&mut self, location: Option<SourceLocation>) {
        self.location = location;
    }
}

impl PartialEq for RawDict {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
            && self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for RawDict {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            location: None,
        }
    }
}

impl FromIterator<RawValue> for RawArray {
    fn from_iter<I: IntoIterator<Item = RawValue>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            location: None,
        }
    }
}

impl<'a> IntoIterator for &'a RawArray {
    type Item = &'a RawValue;
    type IntoIter = std::slice::Iter<'a, RawValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<RawDict> for RawValue {
    fn from(d: RawDict) -> Self {
        Self::Dict(d)
    }
}

impl From<RawArray> for RawValue {
    fn from(a: RawArray) -> Self {
        Self::Array(a)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        Self::Real(f)
    }
}

#[cfg(test)]
mod tests;
