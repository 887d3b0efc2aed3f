//! `Connection` - authenticated request execution.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::auth;
use crate::error::{ErrorPayload, Result, TvdbError};
use crate::remote::RemoteApi;
use crate::response::{self, ApiResponse};
use crate::session::{Session, SessionStatus};

/// Status and body of a completed HTTP exchange.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends single HTTP requests to the remote API. Knows nothing of sessions.
#[derive(Debug)]
pub(crate) struct Transport {
    http_client: Client,
    remote: RemoteApi,
}

impl Transport {
    /// Sends one request and reads the whole body.
    #[instrument(skip_all)]
    pub(crate) async fn execute(
        &self,
        method: Method,
        resource: &str,
        body: Option<&[u8]>,
        bearer: Option<&str>,
        language: Option<&str>,
    ) -> Result<RawResponse> {
        let url = self.remote.resource_url(resource)?;

        let mut builder = self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(language) = language {
            let value = HeaderValue::from_str(language).map_err(|_| {
                TvdbError::Configuration(String::from(
                    "preferred language is not a valid header value",
                ))
            })?;
            builder = builder.header(ACCEPT_LANGUAGE, value);
        }
        if let Some(body) = body {
            builder = builder.body(body.to_vec());
        }
        let request = builder
            .build()
            .map_err(|e| TvdbError::transport(format!("failed to build request: {resource}"), e))?;

        tracing::debug!(method = %request.method(), url = %request.url(), "TVDB API request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| TvdbError::transport(format!("request failed: {resource}"), e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            TvdbError::transport(format!("failed to read response body: {resource}"), e)
        })?;

        tracing::debug!(%status, body_len = body.len(), "TVDB API response");
        Ok(RawResponse { status, body })
    }
}

/// Authenticated connection to the remote API.
///
/// Owns the session. Each call holds the session lock from the lazy login
/// through the optional re-authentication retry, so calls on one connection
/// run one at a time, in the order they acquire the lock.
#[derive(Debug)]
pub struct Connection {
    transport: Transport,
    session: Mutex<Session>,
}

impl Connection {
    /// Creates a connection from an HTTP client, remote target and session.
    ///
    /// The HTTP client should carry the `User-Agent` and timeout to use.
    #[must_use]
    pub fn new(http_client: Client, remote: RemoteApi, session: Session) -> Self {
        Self {
            transport: Transport {
                http_client,
                remote,
            },
            session: Mutex::new(session),
        }
    }

    /// Remote target of this connection.
    #[must_use]
    pub const fn remote(&self) -> &RemoteApi {
        &self.transport.remote
    }

    /// Logs in explicitly. Requests log in lazily when needed.
    ///
    /// # Errors
    ///
    /// See [`TvdbError`]: `Configuration`, `Authentication`, `Transport`, `RemoteService`.
    pub async fn login(&self) -> Result<()> {
        let mut session = self.session.lock().await;
        auth::login(&self.transport, &mut session).await
    }

    /// Refreshes the bearer token using the current one.
    ///
    /// # Errors
    ///
    /// `Authentication` when no token is held or the refresh is rejected;
    /// `Transport` / `RemoteService` otherwise.
    pub async fn refresh_token(&self) -> Result<()> {
        let mut session = self.session.lock().await;
        auth::refresh(&self.transport, &mut session).await
    }

    /// Whether the session holds a token.
    pub async fn is_authorized(&self) -> bool {
        self.session.lock().await.is_authorized()
    }

    /// Current bearer token.
    pub async fn token(&self) -> Option<String> {
        self.session.lock().await.token().map(String::from)
    }

    /// Current session status.
    pub async fn status(&self) -> SessionStatus {
        self.session.lock().await.status()
    }

    /// Sends a request and maps the body into a typed envelope.
    ///
    /// # Errors
    ///
    /// Any [`TvdbError`]; `MalformedResponse` when the body does not match `T`.
    #[instrument(skip_all, fields(method = %method, resource = %resource))]
    pub async fn send<T, B>(
        &self,
        method: Method,
        resource: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let payload = encode_body(body)?;
        let raw = self.send_raw(method, resource, payload).await?;
        response::map_envelope(&raw)
    }

    /// Sends a request and returns the body as a raw JSON tree.
    ///
    /// # Errors
    ///
    /// Any [`TvdbError`]; `MalformedResponse` when the body is not JSON.
    #[instrument(skip_all, fields(method = %method, resource = %resource))]
    pub async fn send_json<B>(
        &self,
        method: Method,
        resource: &str,
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + Sync + ?Sized,
    {
        let payload = encode_body(body)?;
        let raw = self.send_raw(method, resource, payload).await?;
        response::map_json(&raw)
    }

    /// GET shorthand for [`Connection::send`].
    ///
    /// # Errors
    ///
    /// Same as [`Connection::send`].
    pub async fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<ApiResponse<T>> {
        self.send::<T, ()>(Method::GET, resource, None).await
    }

    /// GET shorthand for [`Connection::send_json`].
    ///
    /// # Errors
    ///
    /// Same as [`Connection::send_json`].
    pub async fn get_json(&self, resource: &str) -> Result<Value> {
        self.send_json::<()>(Method::GET, resource, None).await
    }

    /// Runs the authenticated exchange and returns the 2xx body.
    async fn send_raw(
        &self,
        method: Method,
        resource: &str,
        payload: Option<Vec<u8>>,
    ) -> Result<String> {
        let mut session = self.session.lock().await;
        let mut reauthenticated = false;

        loop {
            if session.status() != SessionStatus::Authorized {
                auth::login(&self.transport, &mut session).await?;
            }

            let response = self
                .transport
                .execute(
                    method.clone(),
                    resource,
                    payload.as_deref(),
                    session.token(),
                    session.preferred_language(),
                )
                .await?;

            if response.status == StatusCode::UNAUTHORIZED {
                if reauthenticated {
                    session.invalidate();
                    return Err(TvdbError::Authentication(format!(
                        "{resource} still unauthorized after re-authentication: {}",
                        ErrorPayload::from_body(&response.body)
                    )));
                }
                tracing::warn!(%resource, "TVDB token rejected (401). Re-authenticating...");
                session.invalidate();
                reauthenticated = true;
                continue;
            }

            if !response.status.is_success() {
                return Err(TvdbError::RemoteService {
                    status: response.status.as_u16(),
                    payload: ErrorPayload::from_body(&response.body),
                });
            }

            return Ok(response.body);
        }
    }
}

fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<Vec<u8>>> {
    body.map(serde_json::to_vec)
        .transpose()
        .map_err(|e| TvdbError::Configuration(format!("failed to encode request body: {e}")))
}
