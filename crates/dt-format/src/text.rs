//! HTML escaping and small string helpers.

use serde::Serialize;

/// Escape text for interpolation into HTML element content or attributes.
///
/// Covers `& < > " ' /`, which is enough for both contexts.
#[must_use]
pub fn to_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            other => out.push(other),
        }
    }
    out
}

/// Upper-case the first letter and lower-case the rest.
///
/// Strings of two characters or fewer are returned unchanged, so short
/// acronyms survive.
#[must_use]
pub fn capitalize(input: &str) -> String {
    if input.chars().count() <= 2 {
        return input.to_string();
    }
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// True for empty or whitespace-only strings.
#[must_use]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// `value` unless it is empty, in which case `default`.
#[must_use]
pub fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// A `{ "name": ... }` entry, the shape tag pickers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedEntry {
    pub name: String,
}

/// Split a comma-separated string into named entries.
#[must_use]
pub fn csv_to_names(csv: &str) -> Vec<NamedEntry> {
    if csv.is_empty() {
        return Vec::new();
    }
    csv.split(',')
        .map(|name| NamedEntry {
            name: name.to_string(),
        })
        .collect()
}

/// Ordered key/value pairs from the query string of `url`.
///
/// The fragment is dropped and keys without `=` map to an empty value.
/// Values are returned as they appear (no percent-decoding).
#[must_use]
pub fn query_params(url: &str) -> Vec<(String, String)> {
    let Some((_, query)) = url.split_once('?') else {
        return Vec::new();
    };
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}
