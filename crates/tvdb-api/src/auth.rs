//! Login and token refresh.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::connection::Transport;
use crate::error::{ErrorPayload, Result, TvdbError};
use crate::session::{FundingModel, Session};

/// Login resource.
pub(crate) const LOGIN_PATH: &str = "/login";

/// Token refresh resource.
pub(crate) const REFRESH_PATH: &str = "/refresh_token";

/// Body of the login request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct LoginPayload<'a> {
    apikey: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pin: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    userkey: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
}

/// Builds the login payload for the session's funding model.
///
/// Subscription keys carry the PIN; free keys carry the legacy user
/// credentials when present.
pub(crate) fn login_payload(session: &Session) -> Result<LoginPayload<'_>> {
    let api_key = session.api_key();
    match api_key.funding_model() {
        FundingModel::Subscription => {
            let pin = api_key
                .pin()
                .filter(|p| !p.trim().is_empty())
                .ok_or_else(|| {
                    TvdbError::Configuration(String::from(
                        "subscription-funded API key requires a PIN",
                    ))
                })?;
            Ok(LoginPayload {
                apikey: api_key.key(),
                pin: Some(pin),
                userkey: None,
                username: None,
            })
        }
        FundingModel::Free => Ok(LoginPayload {
            apikey: api_key.key(),
            pin: None,
            userkey: session.user_key(),
            username: session.user_name(),
        }),
    }
}

/// Pulls the token out of a login / refresh response.
///
/// Accepts the v4 envelope (`data.token`) and the bare `{"token": ..}` shape.
pub(crate) fn extract_token(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        TvdbError::Authentication(format!("unparsable authentication response: {e}"))
    })?;
    value
        .get("data")
        .and_then(|data| data.get("token"))
        .or_else(|| value.get("token"))
        .and_then(Value::as_str)
        .filter(|token| !token.trim().is_empty())
        .map(String::from)
        .ok_or_else(|| {
            TvdbError::Authentication(String::from("no token in authentication response"))
        })
}

/// Logs in with the session's credentials and stores the token.
///
/// # Errors
///
/// - `Configuration` for a subscription key without PIN (nothing is sent).
/// - `Authentication` when the server rejects the credentials or returns no token.
/// - `Transport` / `RemoteService` for network or server failures.
#[instrument(skip_all)]
pub(crate) async fn login(transport: &Transport, session: &mut Session) -> Result<()> {
    let body = {
        let payload = login_payload(session)?;
        serde_json::to_vec(&payload).map_err(|e| {
            TvdbError::Configuration(format!("failed to encode login payload: {e}"))
        })?
    };
    authenticate(transport, session, Method::POST, LOGIN_PATH, Some(body), None).await?;
    tracing::info!("TVDB login succeeded");
    Ok(())
}

/// Exchanges the current token for a fresh one.
///
/// # Errors
///
/// - `Authentication` when no token is held, or the refresh is rejected.
/// - `Transport` / `RemoteService` for network or server failures.
#[instrument(skip_all)]
pub(crate) async fn refresh(transport: &Transport, session: &mut Session) -> Result<()> {
    let token = session.token().map(String::from).ok_or_else(|| {
        TvdbError::Authentication(String::from("no token to refresh; log in first"))
    })?;
    authenticate(transport, session, Method::GET, REFRESH_PATH, None, Some(token)).await?;
    tracing::info!("TVDB token refreshed");
    Ok(())
}

async fn authenticate(
    transport: &Transport,
    session: &mut Session,
    method: Method,
    resource: &str,
    body: Option<Vec<u8>>,
    bearer: Option<String>,
) -> Result<()> {
    let previous = session.status();
    session.begin_authorization();

    let result = transport
        .execute(
            method,
            resource,
            body.as_deref(),
            bearer.as_deref(),
            session.preferred_language(),
        )
        .await;
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            session.restore_status(previous);
            return Err(e);
        }
    };

    if response.status == StatusCode::UNAUTHORIZED {
        session.invalidate();
        let payload = ErrorPayload::from_body(&response.body);
        return Err(TvdbError::Authentication(format!(
            "{resource} rejected (HTTP 401): {payload}"
        )));
    }
    if !response.status.is_success() {
        session.restore_status(previous);
        return Err(TvdbError::RemoteService {
            status: response.status.as_u16(),
            payload: ErrorPayload::from_body(&response.body),
        });
    }

    match extract_token(&response.body) {
        Ok(token) => session.authorize(token),
        Err(e) => {
            session.invalidate();
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::session::ApiKey;

    #[test]
    fn test_free_payload_has_only_apikey() {
        // Arrange
        let session = Session::new(ApiKey::new("ABC123").unwrap());

        // Act
        let payload = login_payload(&session).unwrap();

        // Assert
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"apikey":"ABC123"}"#
        );
    }

    #[test]
    fn test_free_payload_with_user_credentials() {
        // Arrange
        let session = Session::with_user(
            ApiKey::new("ABC123").unwrap(),
            Some(String::from("UK")),
            Some(String::from("bob")),
        )
        .unwrap();

        // Act
        let payload = login_payload(&session).unwrap();

        // Assert
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"apikey":"ABC123","userkey":"UK","username":"bob"}"#
        );
    }

    #[test]
    fn test_subscription_payload_has_pin() {
        // Arrange
        let key =
            ApiKey::with_funding("ABC123", Some("4321"), FundingModel::Subscription).unwrap();
        let session = Session::new(key);

        // Act
        let payload = login_payload(&session).unwrap();

        // Assert
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"apikey":"ABC123","pin":"4321"}"#
        );
    }

    #[test]
    fn test_subscription_payload_without_pin_is_configuration_error() {
        // Arrange
        let key = ApiKey::with_funding("ABC123", Some(""), FundingModel::Subscription).unwrap();
        let session = Session::new(key);

        // Act
        let result = login_payload(&session);

        // Assert
        assert!(matches!(result, Err(TvdbError::Configuration(_))));
    }

    #[test]
    fn test_extract_token_from_envelope() {
        // Arrange
        let body = r#"{"data":{"token":"h.p.s"},"status":"success"}"#;

        // Act & Assert
        assert_eq!(extract_token(body).unwrap(), "h.p.s");
    }

    #[test]
    fn test_extract_token_from_bare_object() {
        // Arrange & Act & Assert
        assert_eq!(extract_token(r#"{"token":"h.p.s"}"#).unwrap(), "h.p.s");
    }

    #[test]
    fn test_extract_token_missing() {
        // Arrange & Act
        let result = extract_token(r#"{"data":{},"status":"success"}"#);

        // Assert
        assert!(matches!(result, Err(TvdbError::Authentication(_))));
    }

    #[test]
    fn test_extract_token_unparsable() {
        // Arrange & Act
        let result = extract_token("<html>");

        // Assert
        assert!(matches!(result, Err(TvdbError::Authentication(_))));
    }
}
