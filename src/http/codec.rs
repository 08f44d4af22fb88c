//! Codec for `key=value` pair sequences.
//!
//! Query strings (`a=b&c=d`), cookie headers (`a=b; c=d`) and individual
//! header lines (`Name: value`) all share the same shape: tokens split on a
//! separator, each token holding one key/value pair. Parsing is best-effort:
//! tokens that do not split cleanly are dropped and the rest of the input is
//! still decoded. These are pure functions with no side effects.

use std::collections::HashMap;

/// Parses a separator-joined sequence of `key=value` tokens into a map.
///
/// Keys and values are trimmed of surrounding whitespace. A token is kept
/// only when it splits on `=` into exactly two parts that are non-empty
/// after trimming; anything else (no `=`, several `=`, empty key or value)
/// is silently dropped. When the same key appears more than once, the last
/// occurrence wins. Empty input yields an empty map.
///
/// # Example
///
/// ```
/// use veranda::http::codec::parse_pairs;
///
/// let pairs = parse_pairs("userId=abc&password=123", "&");
/// assert_eq!(pairs.get("userId").map(String::as_str), Some("abc"));
/// assert_eq!(pairs.get("password").map(String::as_str), Some("123"));
/// assert!(parse_pairs("", "&").is_empty());
/// ```
pub fn parse_pairs(text: &str, separator: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();

    if text.is_empty() {
        return pairs;
    }

    for token in text.split(separator) {
        if let Some((key, value)) = split_key_value(token, "=") {
            pairs.insert(key, value);
        }
    }

    pairs
}

/// Parses a URL query string / form body of the form `field1=value1&field2=value2`.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    parse_pairs(query, "&")
}

/// Parses a `Cookie` header value of the form `name1=value1; name2=value2`.
pub fn parse_cookies(cookies: &str) -> HashMap<String, String> {
    parse_pairs(cookies, ";")
}

/// Parses a single `Name: value` header line.
///
/// The line must split on the literal `": "` into exactly two parts that
/// trim to non-empty strings; otherwise the line is malformed and `None` is
/// returned.
///
/// # Example
///
/// ```
/// use veranda::http::codec::parse_header;
///
/// let pair = parse_header("Content-Length: 59").unwrap();
/// assert_eq!(pair, ("Content-Length".to_string(), "59".to_string()));
/// assert_eq!(parse_header("NoColonHere"), None);
/// ```
pub fn parse_header(line: &str) -> Option<(String, String)> {
    split_key_value(line, ": ")
}

fn split_key_value(token: &str, separator: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = token.split(separator).collect();

    if parts.len() != 2 {
        return None;
    }

    let key = parts[0].trim();
    let value = parts[1].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key.to_string(), value.to_string()))
}
