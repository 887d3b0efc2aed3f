//! Resource path construction.
//!
//! Absent or blank path segments and query entries are dropped rather than
//! rejected; none of these functions fail.

use std::fmt::Display;

use url::form_urlencoded;

/// Ordered query parameters. Keys may repeat for multi-valued parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParameters {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter. `None` values are kept here and dropped on build.
    #[must_use]
    pub fn with<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends one entry per value under the same key.
    #[must_use]
    pub fn with_all<V: Display>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let key = key.into();
        for value in values {
            self.push(key.clone(), Some(value));
        }
        self
    }

    /// Appends a parameter in place.
    pub fn push<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.pairs
            .push((key.into(), value.map(|v| v.to_string())));
    }

    /// Whether no parameter will survive encoding.
    #[must_use]
    pub fn is_effectively_empty(&self) -> bool {
        self.retained().next().is_none()
    }

    fn retained(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().filter_map(|(key, value)| {
            let Some(value) = value.as_deref() else {
                tracing::trace!(key = %key, "dropping absent query parameter");
                return None;
            };
            if is_blank(key) || is_blank(value) {
                tracing::trace!(key = %key, "dropping blank query parameter");
                return None;
            }
            Some((key.as_str(), value))
        })
    }

    /// Encodes the retained pairs as `k=v&k=v` (no leading `?`).
    #[must_use]
    pub fn encode(&self) -> String {
        self.retained()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, Option<V>)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Percent-encodes a query component or path segment. Spaces become `%20`.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    // byte_serialize only emits `+` for spaces; a literal `+` becomes `%2B`.
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Appends one percent-encoded path segment.
///
/// `/`, `?` and `#` inside a segment are encoded, so a parameter can never
/// address another resource. Blank and dot-only segments (`.`, `..`) are
/// dropped, since URL parsing resolves dot segments even when encoded.
fn push_segment(out: &mut String, segment: &str) {
    if is_blank(segment) || segment.chars().all(|c| c == '.') {
        tracing::trace!(segment = %segment, "dropping blank or dot path segment");
        return;
    }
    if !out.ends_with('/') {
        out.push('/');
    }
    out.push_str(&encode_component(segment));
}

/// Appends each path parameter to `base`, separated by `/`.
#[must_use]
pub fn build<P: Display>(base: &str, path_params: &[P]) -> String {
    build_specific(base, None, path_params)
}

/// Appends `specific` and then each path parameter to `base`.
#[must_use]
pub fn build_specific<P: Display>(base: &str, specific: Option<&str>, path_params: &[P]) -> String {
    let mut out = String::from(base.trim_end_matches('/'));
    if let Some(specific) = specific {
        push_segment(&mut out, specific);
    }
    for param in path_params {
        push_segment(&mut out, &param.to_string());
    }
    out
}

/// Appends `specific` to `base`, then the encoded query string.
///
/// No `?` is emitted when every query entry was dropped.
#[must_use]
pub fn build_with_query(base: &str, specific: Option<&str>, query: &QueryParameters) -> String {
    let mut out = build_specific::<&str>(base, specific, &[]);
    let encoded = query.encode();
    if !encoded.is_empty() {
        out.push('?');
        out.push_str(&encoded);
    }
    out
}
