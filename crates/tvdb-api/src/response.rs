//! Response envelope and body mapping.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, TvdbError};

/// The `{data, status, links}` envelope wrapping v4 responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload. `None` for no-content responses.
    pub data: Option<T>,
    /// Status string reported by the server, usually `success`.
    #[serde(default)]
    pub status: String,
    /// Paging links for list endpoints.
    #[serde(default)]
    pub links: Option<Links>,
}

impl<T> ApiResponse<T> {
    /// Envelope for an empty body.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            status: String::new(),
            links: None,
        }
    }

    /// Consumes the envelope and returns the payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Whether the server reported `success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

/// Paging links of list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Previous page URL.
    #[serde(alias = "prev")]
    pub previous: Option<String>,
    /// This page URL.
    #[serde(rename = "self")]
    pub current: Option<String>,
    /// Next page URL.
    pub next: Option<String>,
    /// Total number of items.
    #[serde(alias = "totalItems")]
    pub total_items: Option<u64>,
    /// Items per page.
    #[serde(alias = "pageSize")]
    pub page_size: Option<u64>,
}

impl Links {
    /// Whether a next page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.trim().is_empty())
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.previous
            .as_deref()
            .is_some_and(|prev| !prev.trim().is_empty())
    }
}

/// Checks that `body` is valid JSON and returns the tree.
pub(crate) fn map_json(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| TvdbError::malformed(None, e.to_string()))
}

/// Deserializes `body` into an envelope carrying `T`.
///
/// An empty body maps to an empty envelope. Decoder failures carry the
/// JSON path of the offending field.
pub(crate) fn map_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiResponse<T>> {
    if body.trim().is_empty() {
        return Ok(ApiResponse::empty());
    }

    let mut deserializer = serde_json::Deserializer::from_str(body);
    let envelope = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        let path = (path != ".").then_some(path);
        TvdbError::malformed(path, e.into_inner().to_string())
    })?;
    deserializer
        .end()
        .map_err(|e| TvdbError::malformed(None, e.to_string()))?;
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::Award;

    #[test]
    fn test_map_envelope_typed_data() {
        // Arrange
        let body = r#"{"data":{"id":87,"name":"Foo"},"status":"success"}"#;

        // Act
        let envelope: ApiResponse<Award> = map_envelope(body).unwrap();

        // Assert
        assert!(envelope.is_success());
        let award = envelope.data.unwrap();
        assert_eq!(award.id, 87);
        assert_eq!(award.name.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_map_envelope_null_data_is_absent() {
        // Arrange
        let body = r#"{"data":null,"status":"success"}"#;

        // Act
        let envelope: ApiResponse<Award> = map_envelope(body).unwrap();

        // Assert
        assert!(envelope.data.is_none());
        assert_eq!(envelope.status, "success");
    }

    #[test]
    fn test_map_envelope_empty_body() {
        // Arrange & Act
        let envelope: ApiResponse<Award> = map_envelope("  ").unwrap();

        // Assert
        assert_eq!(envelope, ApiResponse::empty());
    }

    #[test]
    fn test_map_envelope_ignores_unknown_fields() {
        // Arrange
        let body = r#"{"data":{"id":1,"unknownField":[1,2,3]},"status":"success","extra":true}"#;

        // Act
        let envelope: ApiResponse<Award> = map_envelope(body).unwrap();

        // Assert
        let award = envelope.data.unwrap();
        assert_eq!(award.id, 1);
        assert!(award.name.is_none());
    }

    #[test]
    fn test_map_envelope_reports_field_path() {
        // Arrange
        let body = r#"{"data":{"id":"not-a-number"},"status":"success"}"#;

        // Act
        let result: Result<ApiResponse<Award>> = map_envelope(body);

        // Assert
        assert!(matches!(
            result,
            Err(TvdbError::MalformedResponse { path: Some(ref p), .. }) if p == "data.id"
        ));
    }

    #[test]
    fn test_map_envelope_invalid_json() {
        // Arrange & Act
        let result: Result<ApiResponse<Award>> = map_envelope(r#"{"data":"#);

        // Assert
        assert!(matches!(result, Err(TvdbError::MalformedResponse { .. })));
    }

    #[test]
    fn test_map_envelope_trailing_garbage() {
        // Arrange & Act
        let result: Result<ApiResponse<Award>> = map_envelope(r#"{"data":null} tail"#);

        // Assert
        assert!(matches!(result, Err(TvdbError::MalformedResponse { .. })));
    }

    #[test]
    fn test_map_envelope_links() {
        // Arrange
        let body = r#"{"data":[],"status":"success","links":{"prev":null,"self":"https://x/companies?page=0","next":"https://x/companies?page=1","total_items":1200,"page_size":500}}"#;

        // Act
        let envelope: ApiResponse<Vec<Award>> = map_envelope(body).unwrap();

        // Assert
        let links = envelope.links.unwrap();
        assert!(links.has_next());
        assert!(!links.has_previous());
        assert_eq!(links.total_items, Some(1200));
        assert_eq!(links.page_size, Some(500));
        assert_eq!(links.current.as_deref(), Some("https://x/companies?page=0"));
    }

    #[test]
    fn test_map_json_valid_and_invalid() {
        // Arrange & Act
        let valid = map_json(r#"{"data":{"id":1}}"#).unwrap();
        let invalid = map_json("not json");

        // Assert
        assert_eq!(valid["data"]["id"], 1);
        assert!(matches!(invalid, Err(TvdbError::MalformedResponse { .. })));
    }
}
