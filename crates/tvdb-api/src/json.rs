//! `JsonApi` - raw JSON view of the read endpoints.

use serde_json::Value;
use tracing::instrument;

use crate::connection::Connection;
use crate::endpoint;
use crate::error::Result;
use crate::params::{EpisodeQuery, SearchParams, SeasonType, UpdatesParams};

/// Read endpoints returning the whole response body as a JSON tree.
///
/// The body is only checked for JSON validity; nothing is unwrapped.
#[derive(Debug, Clone, Copy)]
pub struct JsonApi<'a> {
    connection: &'a Connection,
}

impl<'a> JsonApi<'a> {
    /// Creates a view over a connection.
    #[must_use]
    pub const fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// GETs any resource path.
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    pub async fn get(&self, resource: &str) -> Result<Value> {
        self.connection.get_json(resource).await
    }

    /// `/awards`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn awards(&self) -> Result<Value> {
        self.get(endpoint::AWARDS).await
    }

    /// `/awards/{id}`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn award(&self, id: u64) -> Result<Value> {
        self.get(&endpoint::by_id(endpoint::AWARDS, id)).await
    }

    /// `/episodes/{id}`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn episode(&self, id: u64) -> Result<Value> {
        self.get(&endpoint::by_id(endpoint::EPISODES, id)).await
    }

    /// `/movies/{id}`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn movie(&self, id: u64) -> Result<Value> {
        self.get(&endpoint::by_id(endpoint::MOVIES, id)).await
    }

    /// `/people/{id}`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn person(&self, id: u64) -> Result<Value> {
        self.get(&endpoint::by_id(endpoint::PEOPLE, id)).await
    }

    /// `/search`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn search(&self, params: &SearchParams) -> Result<Value> {
        self.get(&endpoint::search(params)).await
    }

    /// `/series/{id}`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn series(&self, id: u64) -> Result<Value> {
        self.get(&endpoint::by_id(endpoint::SERIES, id)).await
    }

    /// `/series/{id}/extended`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn series_extended(&self, id: u64) -> Result<Value> {
        self.get(&endpoint::extended(endpoint::SERIES, id)).await
    }

    /// `/series/{id}/episodes/{season-type}`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn series_episodes(
        &self,
        id: u64,
        season_type: SeasonType,
        query: &EpisodeQuery,
    ) -> Result<Value> {
        self.get(&endpoint::series_episodes(id, season_type, query))
            .await
    }

    /// `/updates`
    ///
    /// # Errors
    ///
    /// See [`Connection::send_json`].
    #[instrument(skip_all)]
    pub async fn updates(&self, params: &UpdatesParams) -> Result<Value> {
        self.get(&endpoint::updates(params)).await
    }
}
