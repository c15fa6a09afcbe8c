//! HTML escaping of free-text input.
//!
//! The escape set matches how a DOM text node serializes into markup:
//! `&`, `<`, `>` and the no-break space. Quotes are left as-is, so the
//! output is safe as element content but not inside attribute values.
//!
//! Only top-level string properties of a record are escaped. Nested arrays
//! and objects (agenda sessions, challenge steps, topic tags, social links)
//! pass through unchanged.

use serde_json::Value;

/// Escape a string for interpolation into HTML element content.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape every top-level string property of a JSON object in place.
///
/// Non-object values are left untouched.
pub fn sanitize_top_level(value: &mut Value) {
    if let Value::Object(map) = value {
        for field in map.values_mut() {
            if let Value::String(s) = field {
                *s = sanitize(s);
            }
        }
    }
}
