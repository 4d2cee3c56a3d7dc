use serde_json::Value;

/// Deep-merges two document trees, preferring `preferred`.
///
/// Where both sides hold an object the keys are merged recursively. Anywhere
/// else the `preferred` value wins, including arrays and explicit `null`s;
/// `fallback` only fills keys that `preferred` does not have. Keys keep the
/// order of `fallback`, and keys only present in `preferred` follow it.
#[must_use]
pub fn merge_deep_left(preferred: Value, fallback: Value) -> Value {
    match (preferred, fallback) {
        (Value::Object(mut preferred), Value::Object(fallback)) => {
            let mut merged = serde_json::Map::with_capacity(preferred.len() + fallback.len());
            for (key, fallback_value) in fallback {
                let value = match preferred.get_mut(&key) {
                    Some(p) => merge_deep_left(p.take(), fallback_value),
                    None => fallback_value,
                };
                merged.insert(key, value);
            }
            for (key, value) in preferred {
                if !merged.contains_key(&key) {
                    merged.insert(key, value);
                }
            }
            Value::Object(merged)
        }
        (preferred, _) => preferred,
    }
}
