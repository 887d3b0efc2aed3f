//! Request parameter types.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::path::QueryParameters;

/// Episode ordering used by `/series/{id}/episodes/{season-type}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeasonType {
    /// The series' default ordering.
    #[default]
    Default,
    /// Aired order.
    Official,
    /// DVD order.
    Dvd,
    /// Absolute order.
    Absolute,
    /// Alternate order.
    Alternate,
    /// Regional order.
    Regional,
}

impl SeasonType {
    /// Path segment for this ordering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Official => "official",
            Self::Dvd => "dvd",
            Self::Absolute => "absolute",
            Self::Alternate => "alternate",
            Self::Regional => "regional",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for `/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Restrict to a record type: `series`, `movie`, `person` or `company`.
    pub kind: Option<String>,
    /// Restrict to a year.
    pub year: Option<u32>,
    /// Restrict to a company.
    pub company: Option<String>,
    /// Restrict to a three-letter country code.
    pub country: Option<String>,
    /// Restrict to a director.
    pub director: Option<String>,
    /// Restrict to a three-letter language code.
    pub language: Option<String>,
    /// Restrict to a network.
    pub network: Option<String>,
    /// Search by external ID (IMDB, EIDR, ...).
    pub remote_id: Option<String>,
    /// Result offset.
    pub offset: Option<u32>,
    /// Result limit.
    pub limit: Option<u32>,
}

impl SearchParams {
    /// Creates search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Restricts the record type.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Restricts the year.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Restricts the language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restricts the country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Searches by external ID.
    #[must_use]
    pub fn remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = Some(remote_id.into());
        self
    }

    /// Sets offset and limit.
    #[must_use]
    pub const fn page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }

    /// Query string entries, in the order the API documents them.
    #[must_use]
    pub fn to_query(&self) -> QueryParameters {
        QueryParameters::new()
            .with("query", Some(&self.query))
            .with("type", self.kind.as_ref())
            .with("year", self.year)
            .with("company", self.company.as_ref())
            .with("country", self.country.as_ref())
            .with("director", self.director.as_ref())
            .with("language", self.language.as_ref())
            .with("network", self.network.as_ref())
            .with("remote_id", self.remote_id.as_ref())
            .with("offset", self.offset)
            .with("limit", self.limit)
    }
}

/// Filters for `/series/{id}/episodes/{season-type}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeQuery {
    /// Result page (0-based).
    pub page: Option<u32>,
    /// Season number.
    pub season: Option<u32>,
    /// Episode number (requires `season`).
    pub episode_number: Option<u32>,
    /// Air date, `YYYY-MM-DD`.
    pub air_date: Option<String>,
}

impl EpisodeQuery {
    /// Selects a result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Filters by season.
    #[must_use]
    pub const fn season(mut self, season: u32) -> Self {
        self.season = Some(season);
        self
    }

    /// Filters by episode number.
    #[must_use]
    pub const fn episode_number(mut self, number: u32) -> Self {
        self.episode_number = Some(number);
        self
    }

    /// Filters by air date.
    #[must_use]
    pub fn air_date(mut self, date: impl Into<String>) -> Self {
        self.air_date = Some(date.into());
        self
    }

    /// Query string entries.
    #[must_use]
    pub fn to_query(&self) -> QueryParameters {
        QueryParameters::new()
            .with("page", Some(self.page.unwrap_or(0)))
            .with("season", self.season)
            .with("episodeNumber", self.episode_number)
            .with("airDate", self.air_date.as_ref())
    }
}

/// Kind of change reported by `/updates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Record created.
    Create,
    /// Record updated.
    Update,
    /// Record deleted.
    Delete,
}

impl fmt::Display for UpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// Parameters for `/updates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatesParams {
    /// Changes since this instant (required).
    pub since: DateTime<Utc>,
    /// Restrict to an entity type, e.g. `series`.
    pub kind: Option<String>,
    /// Restrict to a change kind.
    pub action: Option<UpdateAction>,
    /// Result page.
    pub page: Option<u32>,
}

impl UpdatesParams {
    /// Creates params for changes since `since`.
    #[must_use]
    pub const fn new(since: DateTime<Utc>) -> Self {
        Self {
            since,
            kind: None,
            action: None,
            page: None,
        }
    }

    /// Restricts the entity type.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Restricts the change kind.
    #[must_use]
    pub const fn action(mut self, action: UpdateAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Selects a result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Query string entries; `since` is sent as epoch seconds.
    #[must_use]
    pub fn to_query(&self) -> QueryParameters {
        QueryParameters::new()
            .with("since", Some(self.since.timestamp()))
            .with("type", self.kind.as_ref())
            .with("action", self.action)
            .with("page", self.page)
    }
}
