//! Token formatting for the Lucene/Solr query grammar.
//!
//! Two paths exist and must not be mixed:
//! - `value_token` escapes reserved characters and quotes multi-word text;
//! - `float_token` renders boost factors and geo numbers with a decimal point.

use crate::value::Value;

/// Characters escaped with a single leading backslash.
pub(crate) const RESERVED: [char; 17] = [
    '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '/', '\\',
];

/// Characters reserved only when doubled (`&&`, `||`).
pub(crate) const RESERVED_PAIRS: [char; 2] = ['&', '|'];

/// Range token matching any value; also stands in for an empty leaf.
pub const MATCH_ALL: &str = "[* TO *]";

/// Escape every reserved character of `raw` in a single left-to-right pass.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if RESERVED_PAIRS.contains(&c) && chars.peek() == Some(&c) {
            chars.next();
            out.push('\\');
            out.push(c);
            out.push(c);
        } else if RESERVED.contains(&c) {
            out.push('\\');
            out.push(c);
        } else {
            out.push(c);
        }
    }

    out
}

/// Wrap already-escaped text in double quotes when it contains a space.
///
/// Embedded quotes were escaped beforehand and are not revisited here, so
/// text holding both a space and a `"` comes out as `"a \" b"`.
fn quote_if_spaced(escaped: String) -> String {
    if escaped.contains(' ') {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

/// Format a value into one query token.
#[must_use]
pub fn value_token(value: &Value) -> String {
    match value {
        Value::Text(s) if s == Value::WILDCARD => Value::WILDCARD.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::List(items) => items
            .iter()
            .map(value_token)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null
        | Value::Int(_)
        | Value::Uint(_)
        | Value::Float(_)
        | Value::Text(_)
        | Value::Timestamp(_) => quote_if_spaced(escape(&value.raw_text())),
    }
}

/// Format a range bound; `Null` means "unbounded" and renders `*`.
#[must_use]
pub fn bound_token(value: &Value) -> String {
    if value.is_null() {
        Value::WILDCARD.to_string()
    } else {
        value_token(value)
    }
}

/// Render a float with at least one decimal digit (`5` → `5.0`).
#[must_use]
pub fn float_token(value: f64) -> String {
    let rendered = value.to_string();

    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

///
/// TESTS
///
