#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::base::{Position, Span};
use serde_json::json;
use std::sync::Arc;
use text_size::TextSize;

fn location(line: usize, column: usize) -> SourceLocation {
    let pos = Position::new(TextSize::from(0), line, column);
    SourceLocation::new(Arc::from("grammar.json"), Span::new(pos, pos))
}

fn sample() -> RawValue {
    let mut patterns = RawArray::with_location(location(2, 14));
    let mut rule = RawDict::with_location(location(3, 4));
    rule.insert("match", "\\bfn\\b".into());
    rule.insert("name", "keyword.rust".into());
    patterns.push(rule.into());

    let mut root = RawDict::with_location(location(0, 0));
    root.insert("scopeName", "source.rust".into());
    root.insert("patterns", patterns.into());
    root.into()
}

#[test]
fn test_dict_preserves_insertion_order() {
    let dict: RawDict = [("z", RawValue::Null), ("a", RawValue::Null), ("m", RawValue::Null)]
        .into_iter()
        .collect();
    assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
}

#[test]
fn test_dict_equality_is_order_sensitive() {
    let ab: RawDict = [("a", RawValue::Integer(1)), ("b", RawValue::Integer(2))].into_iter().collect();
    let ba: RawDict = [("b", RawValue::Integer(2)), ("a", RawValue::Integer(1))].into_iter().collect();
    assert_ne!(ab, ba);
    assert_eq!(ab, ab.clone());

    let nested = |inner: RawDict| RawValue::Array(std::iter::once(RawValue::Dict(inner)).collect());
    assert_ne!(nested(ab.clone()), nested(ba));
    assert_eq!(nested(ab.clone()), nested(ab));
}

#[test]
fn test_dict_equality_includes_location() {
    let mut located = RawDict::with_location(location(0, 0));
    located.insert("a", RawValue::Null);
    let plain: RawDict = [("a", RawValue::Null)].into_iter().collect();
    assert_ne!(located, plain);
    assert_eq!(RawValue::Dict(located).without_locations(), RawValue::Dict(plain));
}

#[test]
fn test_duplicate_key_keeps_position_and_takes_last_value() {
    let mut dict = RawDict::new();
    dict.insert("name", 1i64.into());
    dict.insert("other", true.into());
    dict.insert("name", 2i64.into());

    assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["name", "other"]);
    assert_eq!(dict.get("name"), Some(&RawValue::Integer(2)));
}

#[test]
fn test_strip_locations_removes_every_annotation() {
    let stripped = sample().without_locations();
    let mut seen = 0;
    stripped.walk(&mut |v| {
        if v.is_container() {
            seen += 1;
            assert!(v.location().is_none());
        }
    });
    assert_eq!(seen, 3);
}

#[test]
fn test_strip_locations_keeps_values() {
    let stripped = sample().without_locations();
    assert_eq!(
        stripped.get("scopeName").and_then(RawValue::as_str),
        Some("source.rust")
    );
    let patterns = stripped.get("patterns").and_then(RawValue::as_array).unwrap();
    assert_eq!(patterns.len(), 1);
}

#[test]
fn test_to_json_without_locations() {
    assert_eq!(
        sample().to_json(false),
        json!({
            "scopeName": "source.rust",
            "patterns": [{ "match": "\\bfn\\b", "name": "keyword.rust" }]
        })
    );
}

#[test]
fn test_to_json_with_locations_adds_reserved_key_to_dicts() {
    let value = sample().to_json(true);
    assert_eq!(
        value[LOCATION_KEY],
        json!({ "filename": "grammar.json", "line": 1, "char": 0 })
    );
    assert_eq!(value["patterns"][0][LOCATION_KEY]["line"], json!(4));
    assert_eq!(value["patterns"][0][LOCATION_KEY]["char"], json!(4));
}

#[test]
fn test_serialize_never_writes_reserved_key() {
    let text = serde_json::to_string(&sample()).unwrap();
    assert!(!text.contains(LOCATION_KEY));
    assert!(text.starts_with(r#"{"scopeName":"source.rust""#));
}

#[test]
fn test_non_finite_real_serializes_as_null() {
    assert_eq!(RawValue::Real(f64::NAN).to_json(false), serde_json::Value::Null);
}

#[test]
fn test_deserialize_maps_large_unsigned_to_real() {
    let value: RawValue = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(value, RawValue::Real(18446744073709551615u64 as f64));
}

#[test]
fn test_deserialize_negative_zero_is_real() {
    let value: RawValue = serde_json::from_str("-0").unwrap();
    match value {
        RawValue::Real(r) => assert!(r == 0.0 && r.is_sign_negative()),
        other => panic!("expected real, got {other:?}"),
    }
}

#[test]
fn test_as_f64_widens_integers() {
    assert_eq!(RawValue::Integer(3).as_f64(), Some(3.0));
    assert_eq!(RawValue::String("3".into()).as_f64(), None);
}
