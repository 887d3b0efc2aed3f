//! Remote endpoint target.

use url::Url;

use crate::error::{Result, TvdbError};

/// Default TVDB v4 host.
const DEFAULT_HOST: &str = "api4.thetvdb.com";

/// Default TVDB v4 base path.
const DEFAULT_BASE_PATH: &str = "/v4";

/// Protocol, host, port and base path of the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteApi {
    protocol: String,
    host: String,
    port: Option<u16>,
    base_path: String,
}

impl Default for RemoteApi {
    fn default() -> Self {
        Self {
            protocol: String::from("https"),
            host: String::from(DEFAULT_HOST),
            port: None,
            base_path: String::from(DEFAULT_BASE_PATH),
        }
    }
}

impl RemoteApi {
    /// Creates a remote target.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the protocol or host is blank.
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
        base_path: impl Into<String>,
    ) -> Result<Self> {
        let protocol = protocol.into();
        let host = host.into();
        if protocol.trim().is_empty() {
            return Err(TvdbError::Configuration(String::from(
                "remote protocol must not be blank",
            )));
        }
        if host.trim().is_empty() {
            return Err(TvdbError::Configuration(String::from(
                "remote host must not be blank",
            )));
        }
        Ok(Self {
            protocol,
            host,
            port,
            base_path: base_path.into(),
        })
    }

    /// Derives a remote target from a base URL such as `http://127.0.0.1:8080/v4`.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the URL has no host.
    pub fn from_url(url: &Url) -> Result<Self> {
        let host = url.host_str().ok_or_else(|| {
            TvdbError::Configuration(format!("base URL has no host: {url}"))
        })?;
        Self::new(url.scheme(), host, url.port(), url.path())
    }

    /// Protocol, e.g. `https`.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, if any.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Base path prefixed to every resource.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Full URL for a resource path (which may carry a query string).
    ///
    /// # Errors
    ///
    /// Returns `Url` if the result is not a valid URL.
    pub fn resource_url(&self, resource: &str) -> Result<Url> {
        let port = self.port.map(|p| format!(":{p}")).unwrap_or_default();
        let base = self.base_path.trim_matches('/');
        let resource = resource.trim_start_matches('/');
        let path = if base.is_empty() {
            format!("/{resource}")
        } else {
            format!("/{base}/{resource}")
        };
        Ok(Url::parse(&format!(
            "{}://{}{port}{path}",
            self.protocol, self.host
        ))?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_remote_points_at_v4() {
        // Arrange
        let remote = RemoteApi::default();

        // Act
        let url = remote.resource_url("/login").unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://api4.thetvdb.com/v4/login");
    }

    #[test]
    fn test_from_url_keeps_port_and_path() {
        // Arrange
        let base = Url::parse("http://127.0.0.1:8080/v4/").unwrap();

        // Act
        let remote = RemoteApi::from_url(&base).unwrap();
        let url = remote.resource_url("awards/87").unwrap();

        // Assert
        assert_eq!(remote.port(), Some(8080));
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v4/awards/87");
    }

    #[test]
    fn test_resource_url_keeps_query() {
        // Arrange
        let remote = RemoteApi::new("http", "localhost", None, "").unwrap();

        // Act
        let url = remote.resource_url("/search?query=a%20b").unwrap();

        // Assert
        assert_eq!(url.path(), "/search");
        assert_eq!(url.query(), Some("query=a%20b"));
    }

    #[test]
    fn test_new_rejects_blank_host() {
        // Arrange & Act
        let result = RemoteApi::new("https", " ", None, "/v4");

        // Assert
        assert!(matches!(result, Err(TvdbError::Configuration(_))));
    }
}
