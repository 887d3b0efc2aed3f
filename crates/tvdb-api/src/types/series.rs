//! Series records.

use serde::Deserialize;

use super::common::{Alias, Artwork, Company, Genre, RemoteId, Status, Trailer};
use super::episodes::{Episode, Season};
use super::lenient::null_default;
use super::people::Character;

/// Series (`/series/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    /// Series ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Poster URL.
    pub image: Option<String>,
    /// First air date.
    pub first_aired: Option<String>,
    /// Last air date.
    pub last_aired: Option<String>,
    /// Next air date.
    pub next_aired: Option<String>,
    /// Score.
    pub score: Option<f64>,
    /// Status.
    pub status: Option<Status>,
    /// Three-letter country code.
    pub original_country: Option<String>,
    /// Three-letter language code.
    pub original_language: Option<String>,
    /// Default season type ID.
    pub default_season_type: Option<u64>,
    /// Whether episode order is randomized.
    pub is_order_randomized: Option<bool>,
    /// Last update timestamp.
    pub last_updated: Option<String>,
    /// Average runtime in minutes.
    pub average_runtime: Option<u32>,
    /// Overview in the original language.
    pub overview: Option<String>,
    /// Year of first airing.
    pub year: Option<String>,
    /// Alternative names.
    #[serde(deserialize_with = "null_default")]
    pub aliases: Vec<Alias>,
    /// Languages with a translated name.
    #[serde(deserialize_with = "null_default")]
    pub name_translations: Vec<String>,
    /// Languages with a translated overview.
    #[serde(deserialize_with = "null_default")]
    pub overview_translations: Vec<String>,
}

impl Series {
    /// Whether a translated name exists for `language`.
    #[must_use]
    pub fn has_name_translation(&self, language: &str) -> bool {
        self.name_translations.iter().any(|l| l == language)
    }
}

/// Series with related records (`/series/{id}/extended`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesExtended {
    /// Base series.
    #[serde(flatten)]
    pub series: Series,
    /// Artworks.
    #[serde(deserialize_with = "null_default")]
    pub artworks: Vec<Artwork>,
    /// Genres.
    #[serde(deserialize_with = "null_default")]
    pub genres: Vec<Genre>,
    /// Seasons, across all season types.
    #[serde(deserialize_with = "null_default")]
    pub seasons: Vec<Season>,
    /// Cast and crew.
    #[serde(deserialize_with = "null_default")]
    pub characters: Vec<Character>,
    /// External identifiers.
    #[serde(deserialize_with = "null_default")]
    pub remote_ids: Vec<RemoteId>,
    /// Trailers.
    #[serde(deserialize_with = "null_default")]
    pub trailers: Vec<Trailer>,
    /// Original network.
    pub original_network: Option<Company>,
    /// Latest network.
    pub latest_network: Option<Company>,
    /// Episodes, when requested with `meta=episodes`.
    #[serde(deserialize_with = "null_default")]
    pub episodes: Vec<Episode>,
}

impl SeriesExtended {
    /// Seasons of one ordering type (e.g. `official`).
    #[must_use]
    pub fn seasons_of_type(&self, kind: &str) -> Vec<&Season> {
        self.seasons
            .iter()
            .filter(|s| s.kind.as_ref().and_then(|k| k.kind.as_deref()) == Some(kind))
            .collect()
    }

    /// First remote ID from the named source (e.g. `IMDB`).
    #[must_use]
    pub fn remote_id(&self, source_name: &str) -> Option<&str> {
        self.remote_ids
            .iter()
            .find(|r| r.source_name.as_deref() == Some(source_name))
            .and_then(|r| r.id.as_deref())
    }
}

/// Series with one page of episodes (`/series/{id}/episodes/{season-type}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesEpisodes {
    /// The series.
    pub series: Option<Series>,
    /// Episodes on this page.
    #[serde(deserialize_with = "null_default")]
    pub episodes: Vec<Episode>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_series_extended_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tvdb/series_extended_81189.json");

        // Act
        let envelope: crate::ApiResponse<SeriesExtended> = serde_json::from_str(json).unwrap();

        // Assert
        let series = envelope.data.unwrap();
        assert_eq!(series.series.id, 81_189);
        assert_eq!(series.series.name.as_deref(), Some("Breaking Bad"));
        assert!(series.series.has_name_translation("deu"));
        assert_eq!(series.seasons_of_type("official").len(), 2);
        assert_eq!(series.remote_id("IMDB"), Some("tt0903747"));
        assert_eq!(series.genres.len(), 2);
        assert!(series.trailers.is_empty());
    }
}
