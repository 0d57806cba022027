//! Pure helper functions for extracting typed settings from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a list of accepted key names, and a default.
//! The first key present wins. If no key is present or the value is not the
//! expected type, the default is returned. These never fail; strict checks
//! (table keys, ranges) happen in the config builders.

use serde_json::Value;

fn lookup<'a>(params: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| params.get(*name))
}

/// Extracts an `f64` from the first matching key, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, names: &[&str], default: f64) -> f64 {
    lookup(params, names)
        .and_then(Value::as_f64)
        .unwrap_or(default)
}

/// Extracts a `String` from the first matching key, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, names: &[&str], default: &str) -> String {
    param_opt_string(params, names).unwrap_or_else(|| default.to_owned())
}

/// Extracts a `String` from the first matching key, or `None` if missing or wrong type.
pub fn param_opt_string(params: &Value, names: &[&str]) -> Option<String> {
    lookup(params, names)
        .and_then(Value::as_str)
        .map(String::from)
}

/// Extracts an SVG length that may be written as a JSON string or number.
///
/// Numbers are formatted without a trailing `.0` so `64` and `"64"` agree.
pub fn param_length(params: &Value, names: &[&str], default: &str) -> String {
    match lookup(params, names) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => format!("{f}"),
            None => default.to_owned(),
        },
        _ => default.to_owned(),
    }
}
