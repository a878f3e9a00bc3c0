//! Filter and Form Helpers
//!
//! Query-string building for the item list and tag normalization for new items.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// `application/x-www-form-urlencoded` set, as used by `URLSearchParams`.
/// Spaces are handled separately (encoded as `+`).
const FORM_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Current values of the list filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub query: String,
    pub tag: String,
}

impl ItemQuery {
    pub fn new(query: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            tag: tag.into(),
        }
    }

    /// Encoded `key=value` pairs; empty fields are left out entirely.
    pub fn to_query_string(&self) -> String {
        [("query", &self.query), ("tag", &self.tag)]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", form_encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full list URL; always carries the `?` even when no filter is set.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{endpoint}?{}", self.to_query_string())
    }
}

fn form_encode(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM_ENCODE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Split a comma-separated tag field into trimmed, non-empty tags.
/// Order is kept and duplicates are not removed.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
