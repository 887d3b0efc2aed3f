//! User records (`/user`, `/user/favorites`).

use serde::{Deserialize, Serialize};

use super::lenient::null_default;
use crate::error::{Result, TvdbError};

/// Authenticated user (`/user`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    /// User ID.
    pub id: u64,
    /// Preferred language.
    pub language: Option<String>,
    /// User name.
    pub name: Option<String>,
    /// Account type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Favorite record IDs of the user (`GET /user/favorites`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Favorites {
    /// Favorite series.
    #[serde(deserialize_with = "null_default")]
    pub series: Vec<u64>,
    /// Favorite movies.
    #[serde(deserialize_with = "null_default")]
    pub movies: Vec<u64>,
    /// Favorite episodes.
    #[serde(deserialize_with = "null_default")]
    pub episodes: Vec<u64>,
    /// Favorite artwork.
    #[serde(deserialize_with = "null_default")]
    pub artwork: Vec<u64>,
    /// Favorite people.
    #[serde(deserialize_with = "null_default")]
    pub people: Vec<u64>,
    /// Favorite lists.
    #[serde(deserialize_with = "null_default")]
    pub lists: Vec<u64>,
}

impl Favorites {
    /// Total number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            &self.series,
            &self.movies,
            &self.episodes,
            &self.artwork,
            &self.people,
            &self.lists,
        ]
        .iter()
        .map(|ids| ids.len())
        .sum()
    }

    /// Whether the user has no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Body of `POST /user/favorites`. At least one ID is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FavoriteRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    movie: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    episode: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artwork: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    people: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list: Option<u64>,
}

impl FavoriteRecord {
    /// Creates a record from optional IDs.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if every ID is `None`.
    pub fn new(
        series: Option<u64>,
        movie: Option<u64>,
        episode: Option<u64>,
        artwork: Option<u64>,
        people: Option<u64>,
        list: Option<u64>,
    ) -> Result<Self> {
        let record = Self {
            series,
            movie,
            episode,
            artwork,
            people,
            list,
        };
        if record == Self::default() {
            return Err(TvdbError::Configuration(String::from(
                "favorite record needs at least one ID",
            )));
        }
        Ok(record)
    }

    /// Record marking one series as favorite.
    #[must_use]
    pub fn series(id: u64) -> Self {
        Self {
            series: Some(id),
            ..Self::default()
        }
    }

    /// Record marking one movie as favorite.
    #[must_use]
    pub fn movie(id: u64) -> Self {
        Self {
            movie: Some(id),
            ..Self::default()
        }
    }
}
