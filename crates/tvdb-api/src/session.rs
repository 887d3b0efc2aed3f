//! Session state: credentials, bearer token and authorization status.

use std::fmt;

use crate::error::{Result, TvdbError};

/// How the API key is funded. Determines the login payload shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FundingModel {
    /// Free or legacy key; user credentials may accompany it.
    #[default]
    Free,
    /// User-supported key; a subscriber PIN is required.
    Subscription,
}

/// API key with its funding model and optional subscriber PIN.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    key: String,
    pin: Option<String>,
    funding_model: FundingModel,
}

impl ApiKey {
    /// Creates a free-funded key.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `key` is blank.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Self::with_funding(key, None::<String>, FundingModel::Free)
    }

    /// Creates a key with an explicit funding model.
    ///
    /// A missing PIN on a subscription key is accepted here and rejected
    /// when logging in.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `key` is blank.
    pub fn with_funding(
        key: impl Into<String>,
        pin: Option<impl Into<String>>,
        funding_model: FundingModel,
    ) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(TvdbError::Configuration(String::from(
                "API key must not be blank",
            )));
        }
        Ok(Self {
            key,
            pin: pin.map(Into::into),
            funding_model,
        })
    }

    /// The raw key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Subscriber PIN, if set.
    #[must_use]
    pub fn pin(&self) -> Option<&str> {
        self.pin.as_deref()
    }

    /// Funding model.
    #[must_use]
    pub const fn funding_model(&self) -> FundingModel {
        self.funding_model
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("key", &"***")
            .field("pin", &self.pin.as_ref().map(|_| "***"))
            .field("funding_model", &self.funding_model)
            .finish()
    }
}

/// Authorization status of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No valid token.
    #[default]
    NotAuthorized,
    /// A login or refresh call is underway.
    AuthorizationInProgress,
    /// A token is held.
    Authorized,
}

/// Per-connection session.
///
/// `status() == Authorized` always comes with a non-blank token.
#[derive(Clone)]
pub struct Session {
    api_key: ApiKey,
    user_key: Option<String>,
    user_name: Option<String>,
    token: Option<String>,
    status: SessionStatus,
    language: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Session {
    /// Creates a session that authenticates with the API key only.
    #[must_use]
    pub const fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            user_key: None,
            user_name: None,
            token: None,
            status: SessionStatus::NotAuthorized,
            language: None,
        }
    }

    /// Creates a session with legacy user-key credentials.
    ///
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if only one of `user_key` / `user_name` is set.
    pub fn with_user(
        api_key: ApiKey,
        user_key: Option<String>,
        user_name: Option<String>,
    ) -> Result<Self> {
        let user_key = non_blank(user_key);
        let user_name = non_blank(user_name);
        if user_key.is_some() != user_name.is_some() {
            return Err(TvdbError::Configuration(String::from(
                "user key and user name must be provided together",
            )));
        }
        Ok(Self {
            user_key,
            user_name,
            ..Self::new(api_key)
        })
    }

    /// Sets the preferred response language (`Accept-Language`). A value
    /// that is not a valid header fails the next request with `Configuration`.
    #[must_use]
    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = non_blank(language);
        self
    }

    /// API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Legacy user key.
    #[must_use]
    pub fn user_key(&self) -> Option<&str> {
        self.user_key.as_deref()
    }

    /// Legacy user name.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Preferred response language.
    #[must_use]
    pub fn preferred_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether a token is held.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.status == SessionStatus::Authorized
    }

    pub(crate) const fn begin_authorization(&mut self) {
        self.status = SessionStatus::AuthorizationInProgress;
    }

    pub(crate) const fn restore_status(&mut self, status: SessionStatus) {
        self.status = if matches!(status, SessionStatus::Authorized) && self.token.is_none() {
            SessionStatus::NotAuthorized
        } else {
            status
        };
    }

    /// Stores a fresh token and marks the session authorized.
    pub(crate) fn authorize(&mut self, token: String) -> Result<()> {
        if token.trim().is_empty() {
            self.invalidate();
            return Err(TvdbError::Authentication(String::from(
                "server returned a blank token",
            )));
        }
        self.token = Some(token);
        self.status = SessionStatus::Authorized;
        Ok(())
    }

    /// Drops the token and marks the session unauthorized.
    pub(crate) fn invalidate(&mut self) {
        self.token = None;
        self.status = SessionStatus::NotAuthorized;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &self.api_key)
            .field("user_name", &self.user_name)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("status", &self.status)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
