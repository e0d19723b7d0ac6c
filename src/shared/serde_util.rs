//! Helpers for records that pick typed fields out of a backend JSON object.
//!
//! A field is lifted into its typed slot only when it has the expected shape.
//! Anything else (wrong type, unparseable string) stays untouched in the
//! remaining map, so no backend value is ever rejected or lost.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Remove `key` and decode it as `T`. On mismatch the raw value is put back.
/// `null` and missing keys give `None`.
pub(crate) fn take<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    let raw = map.remove(key)?;
    if raw.is_null() {
        return None;
    }
    match T::deserialize(&raw) {
        Ok(value) => Some(value),
        Err(_) => {
            map.insert(key.to_string(), raw);
            None
        }
    }
}

/// Like [`take`] for numbers, also accepting numeric strings (`"131.50"`).
pub(crate) fn take_number(map: &mut Map<String, Value>, key: &str) -> Option<f64> {
    let parsed = match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    };
    match parsed {
        Some(n) => {
            map.remove(key);
            Some(n)
        }
        None => {
            if map.get(key).is_some_and(Value::is_null) {
                map.remove(key);
            }
            None
        }
    }
}

/// Write `value` under `key` when present.
pub(crate) fn put<T: Serialize>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(v) = value.and_then(|v| serde_json::to_value(v).ok()) {
        map.insert(key.to_string(), v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_take_mismatch_keeps_raw_value() {
        let mut map = object(json!({"name": 42, "symbol": "NVDA"}));
        assert_eq!(take::<String>(&mut map, "name"), None);
        assert_eq!(take::<String>(&mut map, "symbol").as_deref(), Some("NVDA"));
        assert_eq!(map, object(json!({"name": 42})));
    }

    #[test]
    fn test_take_null_is_none_and_removed() {
        let mut map = object(json!({"name": null}));
        assert_eq!(take::<String>(&mut map, "name"), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_take_number_accepts_numeric_strings() {
        let mut map = object(json!({"a": 1.5, "b": " 131.50 ", "c": "N/A", "d": null, "e": [1]}));
        assert_eq!(take_number(&mut map, "a"), Some(1.5));
        assert_eq!(take_number(&mut map, "b"), Some(131.5));
        assert_eq!(take_number(&mut map, "c"), None);
        assert_eq!(take_number(&mut map, "d"), None);
        assert_eq!(take_number(&mut map, "e"), None);
        assert_eq!(take_number(&mut map, "missing"), None);
        assert_eq!(map, object(json!({"c": "N/A", "e": [1]})));
    }

    #[test]
    fn test_put_skips_none() {
        let mut map = Map::new();
        put::<f64>(&mut map, "price", None);
        put(&mut map, "symbol", Some("NVDA"));
        assert_eq!(map, object(json!({"symbol": "NVDA"})));
    }
}
