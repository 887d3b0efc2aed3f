//! `TvdbClient` - TVDB v4 API client implementation.

use std::time::Duration;

use reqwest::header::HeaderValue;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::api::LocalTvdbApi;
use crate::connection::Connection;
use crate::endpoint;
use crate::error::{Result, TvdbError};
use crate::json::JsonApi;
use crate::params::{EpisodeQuery, SearchParams, SeasonType, UpdatesParams};
use crate::remote::RemoteApi;
use crate::response::ApiResponse;
use crate::session::{ApiKey, FundingModel, Session, SessionStatus};
use crate::types::{
    Artwork, Award, AwardCategory, AwardExtended, Character, Company, ContentRating, Country,
    EntityUpdate, Episode, EpisodeExtended, FavoriteRecord, Favorites, Genre, Language, Movie,
    MovieExtended, Person, SearchResult, Season, Series, SeriesEpisodes, SeriesExtended,
    Translation, UserInfo,
};

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("tvdb-api/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// TVDB v4 API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClient {
    /// Authenticated connection.
    connection: Connection,
}

/// Builder for `TvdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClientBuilder {
    api_key: Option<String>,
    pin: Option<String>,
    funding_model: FundingModel,
    user_key: Option<String>,
    user_name: Option<String>,
    language: Option<String>,
    remote: Option<RemoteApi>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TvdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            api_key: None,
            pin: None,
            funding_model: FundingModel::Free,
            user_key: None,
            user_name: None,
            language: None,
            remote: None,
            base_url: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the subscriber PIN and switches to subscription funding.
    ///
    /// A later `funding_model(FundingModel::Free)` makes `build()` fail
    /// rather than drop the PIN.
    #[must_use]
    pub fn pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
        self.funding_model = FundingModel::Subscription;
        self
    }

    /// Sets the funding model explicitly (default: free).
    #[must_use]
    pub const fn funding_model(mut self, funding_model: FundingModel) -> Self {
        self.funding_model = funding_model;
        self
    }

    /// Sets legacy user-key credentials. Both must be given together.
    #[must_use]
    pub fn user(mut self, user_key: impl Into<String>, user_name: impl Into<String>) -> Self {
        self.user_key = Some(user_key.into());
        self.user_name = Some(user_name.into());
        self
    }

    /// Sets the preferred response language (`Accept-Language`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the remote target (default: `https://api4.thetvdb.com/v4`).
    #[must_use]
    pub fn remote_api(mut self, remote: RemoteApi) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Overrides the base URL (for wiremock in tests). Wins over `remote_api`.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: `tvdb-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the request timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or blank.
    /// - A PIN is set on a free-funded key.
    /// - Only one of user key / user name is set.
    /// - `language` or `user_agent` is not a valid header value.
    /// - The base URL has no host.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TvdbClient> {
        let key = self
            .api_key
            .ok_or_else(|| TvdbError::Configuration(String::from("api_key is required")))?;
        if self.funding_model == FundingModel::Free
            && self.pin.as_deref().is_some_and(|pin| !pin.trim().is_empty())
        {
            return Err(TvdbError::Configuration(String::from(
                "a PIN requires subscription funding",
            )));
        }
        if let Some(language) = &self.language {
            validate_header("language", language)?;
        }
        let api_key = ApiKey::with_funding(key, self.pin, self.funding_model)?;
        let session = Session::with_user(api_key, self.user_key, self.user_name)?
            .language(self.language);

        let remote = match (self.base_url, self.remote) {
            (Some(url), _) => RemoteApi::from_url(&url)?,
            (None, Some(remote)) => remote,
            (None, None) => RemoteApi::default(),
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
        validate_header("user_agent", &user_agent)?;
        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| TvdbError::transport("failed to build HTTP client", e))?;

        Ok(TvdbClient {
            connection: Connection::new(http_client, remote, session),
        })
    }
}

fn validate_header(name: &str, value: &str) -> Result<()> {
    HeaderValue::from_str(value)
        .map(drop)
        .map_err(|_| TvdbError::Configuration(format!("{name} is not a valid header value")))
}

impl TvdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TvdbClientBuilder {
        TvdbClientBuilder::new()
    }

    /// Wraps an existing connection.
    #[must_use]
    pub const fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Underlying connection, for envelope-level access.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Raw JSON view of the read endpoints.
    #[must_use]
    pub const fn json(&self) -> JsonApi<'_> {
        JsonApi::new(&self.connection)
    }

    /// Logs in explicitly. Requests log in lazily when needed.
    ///
    /// # Errors
    ///
    /// See [`Connection::login`].
    pub async fn login(&self) -> Result<()> {
        self.connection.login().await
    }

    /// Refreshes the bearer token.
    ///
    /// # Errors
    ///
    /// See [`Connection::refresh_token`].
    pub async fn refresh_token(&self) -> Result<()> {
        self.connection.refresh_token().await
    }

    /// Whether a token is held.
    pub async fn is_authorized(&self) -> bool {
        self.connection.is_authorized().await
    }

    /// Current bearer token.
    pub async fn token(&self) -> Option<String> {
        self.connection.token().await
    }

    /// Current session status.
    pub async fn status(&self) -> SessionStatus {
        self.connection.status().await
    }

    /// Sends a request to any resource path and maps the typed envelope.
    ///
    /// # Errors
    ///
    /// See [`Connection::send`].
    pub async fn send<T, B>(
        &self,
        method: Method,
        resource: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: serde::Serialize + Sync + ?Sized,
    {
        self.connection.send(method, resource, body).await
    }

    /// Fetches one page of companies with its paging links.
    ///
    /// # Errors
    ///
    /// See [`Connection::send`].
    pub async fn companies_page(&self, page: Option<u32>) -> Result<ApiResponse<Vec<Company>>> {
        self.connection.get(&endpoint::companies(page)).await
    }

    /// Fetches one page of series episodes with its paging links.
    ///
    /// # Errors
    ///
    /// See [`Connection::send`].
    pub async fn series_episodes_page(
        &self,
        id: u64,
        season_type: SeasonType,
        query: &EpisodeQuery,
    ) -> Result<ApiResponse<SeriesEpisodes>> {
        self.connection
            .get(&endpoint::series_episodes(id, season_type, query))
            .await
    }

    /// GETs a record; `data: null` is an error.
    async fn record<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        self.connection.get(resource).await?.data.ok_or_else(|| {
            TvdbError::malformed(
                Some(String::from("data")),
                format!("no data in response: {resource}"),
            )
        })
    }

    /// GETs a list; `data: null` is an empty list.
    async fn list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let response: ApiResponse<Vec<T>> = self.connection.get(resource).await?;
        Ok(response.data.unwrap_or_default())
    }
}

impl LocalTvdbApi for TvdbClient {
    #[instrument(skip_all)]
    async fn awards(&self) -> Result<Vec<Award>> {
        self.list(endpoint::AWARDS).await
    }

    #[instrument(skip_all)]
    async fn award(&self, id: u64) -> Result<Award> {
        self.record(&endpoint::by_id(endpoint::AWARDS, id)).await
    }

    #[instrument(skip_all)]
    async fn award_extended(&self, id: u64) -> Result<AwardExtended> {
        self.record(&endpoint::extended(endpoint::AWARDS, id)).await
    }

    #[instrument(skip_all)]
    async fn award_category(&self, id: u64) -> Result<AwardCategory> {
        self.record(&endpoint::award_category(id)).await
    }

    #[instrument(skip_all)]
    async fn artwork(&self, id: u64) -> Result<Artwork> {
        self.record(&endpoint::by_id(endpoint::ARTWORK, id)).await
    }

    #[instrument(skip_all)]
    async fn character(&self, id: u64) -> Result<Character> {
        self.record(&endpoint::by_id(endpoint::CHARACTERS, id)).await
    }

    #[instrument(skip_all)]
    async fn companies(&self, page: Option<u32>) -> Result<Vec<Company>> {
        self.list(&endpoint::companies(page)).await
    }

    #[instrument(skip_all)]
    async fn content_ratings(&self) -> Result<Vec<ContentRating>> {
        self.list(endpoint::CONTENT_RATINGS).await
    }

    #[instrument(skip_all)]
    async fn countries(&self) -> Result<Vec<Country>> {
        self.list(endpoint::COUNTRIES).await
    }

    #[instrument(skip_all)]
    async fn episode(&self, id: u64) -> Result<Episode> {
        self.record(&endpoint::by_id(endpoint::EPISODES, id)).await
    }

    #[instrument(skip_all)]
    async fn episode_extended(&self, id: u64) -> Result<EpisodeExtended> {
        self.record(&endpoint::extended(endpoint::EPISODES, id)).await
    }

    #[instrument(skip_all)]
    async fn episode_translation(&self, id: u64, language: &str) -> Result<Translation> {
        self.record(&endpoint::translation(endpoint::EPISODES, id, language))
            .await
    }

    #[instrument(skip_all)]
    async fn genres(&self) -> Result<Vec<Genre>> {
        self.list(endpoint::GENRES).await
    }

    #[instrument(skip_all)]
    async fn languages(&self) -> Result<Vec<Language>> {
        self.list(endpoint::LANGUAGES).await
    }

    #[instrument(skip_all)]
    async fn movie(&self, id: u64) -> Result<Movie> {
        self.record(&endpoint::by_id(endpoint::MOVIES, id)).await
    }

    #[instrument(skip_all)]
    async fn movie_extended(&self, id: u64) -> Result<MovieExtended> {
        self.record(&endpoint::extended(endpoint::MOVIES, id)).await
    }

    #[instrument(skip_all)]
    async fn person(&self, id: u64) -> Result<Person> {
        self.record(&endpoint::by_id(endpoint::PEOPLE, id)).await
    }

    #[instrument(skip_all)]
    async fn search(&self, params: &SearchParams) -> Result<Vec<SearchResult>> {
        self.list(&endpoint::search(params)).await
    }

    #[instrument(skip_all)]
    async fn season(&self, id: u64) -> Result<Season> {
        self.record(&endpoint::by_id(endpoint::SEASONS, id)).await
    }

    #[instrument(skip_all)]
    async fn series(&self, id: u64) -> Result<Series> {
        self.record(&endpoint::by_id(endpoint::SERIES, id)).await
    }

    #[instrument(skip_all)]
    async fn series_extended(&self, id: u64) -> Result<SeriesExtended> {
        self.record(&endpoint::extended(endpoint::SERIES, id)).await
    }

    #[instrument(skip_all)]
    async fn series_episodes(
        &self,
        id: u64,
        season_type: SeasonType,
        query: &EpisodeQuery,
    ) -> Result<SeriesEpisodes> {
        self.record(&endpoint::series_episodes(id, season_type, query))
            .await
    }

    #[instrument(skip_all)]
    async fn series_translation(&self, id: u64, language: &str) -> Result<Translation> {
        self.record(&endpoint::translation(endpoint::SERIES, id, language))
            .await
    }

    #[instrument(skip_all)]
    async fn updates(&self, params: &UpdatesParams) -> Result<Vec<EntityUpdate>> {
        self.list(&endpoint::updates(params)).await
    }

    #[instrument(skip_all)]
    async fn user(&self) -> Result<UserInfo> {
        self.record(endpoint::USER).await
    }

    #[instrument(skip_all)]
    async fn favorites(&self) -> Result<Favorites> {
        let response: ApiResponse<Favorites> = self.connection.get(endpoint::FAVORITES).await?;
        Ok(response.data.unwrap_or_default())
    }

    #[instrument(skip_all)]
    async fn create_favorites(&self, record: &FavoriteRecord) -> Result<()> {
        let _: ApiResponse<serde_json::Value> = self
            .connection
            .send(Method::POST, endpoint::FAVORITES, Some(record))
            .await?;
        Ok(())
    }
}
