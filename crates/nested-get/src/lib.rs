//! Getting values out of nested JSON objects.


pub use serde_json::{Map, Value};

/// Returns the first key and value in the map, in insertion order.
#[must_use]
pub fn first(map: &Map<String, Value>) -> Option<(&str, &Value)> {
  map.iter().next().map(|(k, v)| (k.as_str(), v))
}

/// Returns the value at the nested path of keys.
///
/// Returns `None` if a key is missing, or if something along the way is not an object. An empty
/// path returns `value` itself.
#[must_use]
pub fn get<'a, K>(value: &'a Value, path: &[K]) -> Option<&'a Value>
where
  K: AsRef<str>,
{
  path.iter().try_fold(value, |cur, key| cur.as_object()?.get(key.as_ref()))
}

/// Like [`get`], but returns `default` when there is nothing at the path.
#[must_use]
pub fn get_or<'a, K>(value: &'a Value, path: &[K], default: &'a Value) -> &'a Value
where
  K: AsRef<str>,
{
  get(value, path).unwrap_or(default)
}
