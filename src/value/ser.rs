//! Serialization of the value tree.
//!
//! The `Serialize` impl writes plain primitive values only. Use
//! [`RawValue::to_json`] to get the wire form with location keys.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Number, Value, json};

use super::{LOCATION_KEY, RawArray, RawDict, RawValue};
use crate::base::SourceLocation;

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Real(r) => serializer.serialize_f64(*r),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(a) => a.serialize(serializer),
            Self::Dict(d) => d.serialize(serializer),
        }
    }
}

impl Serialize for RawArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for RawDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl RawValue {
    /// Convert to a `serde_json::Value`.
    ///
    /// With `with_locations`, every dictionary that carries a location gains a
    /// [`LOCATION_KEY`] entry of the form `{"filename", "line", "char"}`
    /// (line 1-based, char 0-based). Arrays have no key slot, so their
    /// locations are only available on the typed tree.
    ///
    /// Non-finite reals have no JSON representation and become `null`.
    pub fn to_json(&self, with_locations: bool) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(i) => Value::Number((*i).into()),
            Self::Real(r) => Number::from_f64(*r).map_or(Value::Null, Value::Number),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(a) => Value::Array(a.iter().map(|v| v.to_json(with_locations)).collect()),
            Self::Dict(d) => {
                let mut map = Map::with_capacity(d.len() + 1);
                for (key, value) in d.iter() {
                    map.insert(key.to_string(), value.to_json(with_locations));
                }
                if with_locations {
                    if let Some(location) = d.location() {
                        map.insert(LOCATION_KEY.to_string(), location_to_json(location));
                    }
                }
                Value::Object(map)
            }
        }
    }
}

fn location_to_json(location: &SourceLocation) -> Value {
    json!({
        "filename": &*location.file,
        "line": location.span.start.line + 1,
        "char": location.span.start.column,
    })
}
