//! Error types returned by the TVDB client.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TvdbError>;

/// Errors surfaced by the TVDB client.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TvdbError {
    /// Invalid client or session configuration. Never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Login or token refresh returned no usable token, or a request was
    /// still rejected after re-authentication.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Non-2xx response from the remote service.
    #[error("TVDB API error (HTTP {status}): {payload}")]
    RemoteService {
        /// HTTP status code.
        status: u16,
        /// Error body, parsed as JSON when possible.
        payload: ErrorPayload,
    },

    /// Response body is not valid JSON or does not match the expected shape.
    #[error("malformed response{}: {message}", fmt_path(.path.as_deref()))]
    MalformedResponse {
        /// JSON path of the offending field, when known.
        path: Option<String>,
        /// Decoder message.
        message: String,
    },

    /// Network-level failure.
    #[error("request failed: {context}")]
    Transport {
        /// What was being attempted.
        context: String,
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The resource URL could not be formed.
    #[error("invalid resource URL: {0}")]
    Url(#[from] url::ParseError),
}

fn fmt_path(path: Option<&str>) -> String {
    path.map(|p| format!(" at `{p}`")).unwrap_or_default()
}

impl TvdbError {
    /// Returns the HTTP status code for `RemoteService` errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller-side retry may succeed (network failures only).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub(crate) fn transport(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: Option<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            path,
            message: message.into(),
        }
    }
}

/// Body of an error response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// Body parsed as JSON.
    Json(serde_json::Value),
    /// Body that was not valid JSON.
    Text(String),
}

impl ErrorPayload {
    /// Parses a raw error body, falling back to raw text.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).map_or_else(|_| Self::Text(String::from(body)), Self::Json)
    }

    /// Human-readable message: the JSON `message` field, or the raw text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value.get("message").and_then(serde_json::Value::as_str),
            Self::Text(text) if text.trim().is_empty() => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message(), self) {
            (Some(message), _) => f.write_str(message),
            (None, Self::Json(value)) => write!(f, "{value}"),
            (None, Self::Text(_)) => f.write_str("<empty body>"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_payload_json_message() {
        // Arrange
        let body = r#"{"status":"failure","message":"NotFoundException: not found","data":null}"#;

        // Act
        let payload = ErrorPayload::from_body(body);

        // Assert
        assert!(matches!(payload, ErrorPayload::Json(_)));
        assert_eq!(payload.message(), Some("NotFoundException: not found"));
        assert_eq!(payload.to_string(), "NotFoundException: not found");
    }

    #[test]
    fn test_error_payload_falls_back_to_text() {
        // Arrange & Act
        let payload = ErrorPayload::from_body("<html>Bad Gateway</html>");

        // Assert
        assert_eq!(payload, ErrorPayload::Text(String::from("<html>Bad Gateway</html>")));
        assert_eq!(payload.message(), Some("<html>Bad Gateway</html>"));
    }

    #[test]
    fn test_error_payload_empty_body() {
        // Arrange & Act
        let payload = ErrorPayload::from_body("");

        // Assert
        assert_eq!(payload.message(), None);
        assert_eq!(payload.to_string(), "<empty body>");
    }

    #[test]
    fn test_remote_service_display_and_status() {
        // Arrange
        let err = TvdbError::RemoteService {
            status: 404,
            payload: ErrorPayload::from_body(r#"{"message":"missing"}"#),
        };

        // Act & Assert
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "TVDB API error (HTTP 404): missing");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_malformed_response_display_with_path() {
        // Arrange
        let err = TvdbError::malformed(Some(String::from("data.id")), "invalid type");

        // Act & Assert
        assert_eq!(err.to_string(), "malformed response at `data.id`: invalid type");
    }

    #[test]
    fn test_malformed_response_display_without_path() {
        // Arrange
        let err = TvdbError::malformed(None, "expected value");

        // Act & Assert
        assert_eq!(err.to_string(), "malformed response: expected value");
    }
}
