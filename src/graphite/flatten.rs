// src/graphite/flatten.rs
//! Turns the parsed stat tree into graphite plaintext lines.

use serde_json::Value;

/// Function to generate a timestamp in epoch time.
pub fn get_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Function to flatten the parsed stat tree into graphite metric lines.
///
/// Every line reads `<prefix>.cassandra<namespace>.<key> <value> <timestamp>`
/// where the namespace accumulates the keyspace and column family path.
/// One timestamp is shared by the whole traversal.
pub fn to_graphite(values: &Value, prefix: &str) -> Vec<String> {
    flatten(values, prefix, "", get_timestamp())
}

fn flatten(values: &Value, prefix: &str, namespace: &str, now: u64) -> Vec<String> {
    let mut results = Vec::new();
    let Value::Object(map) = values else {
        return results;
    };

    for (key, value) in map {
        match value {
            Value::Object(_) => {
                let nested = format!("{namespace}.{key}");
                results.extend(flatten(value, prefix, &nested, now));
            }
            Value::String(v) => {
                // A leaf at the root lands right after "cassandra" with no
                // separating dot.
                if namespace.is_empty() {
                    results.push(format!("{prefix}.cassandra{key} {v} {now}"));
                } else {
                    results.push(format!("{prefix}.cassandra{namespace}.{key} {v} {now}"));
                }
            }
            _ => {}
        }
    }

    results
}
