//! Episode and season records.

use serde::Deserialize;

use super::common::{Company, RemoteId, Trailer};
use super::lenient::null_default;
use super::people::Character;

/// Episode (`/episodes/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Episode {
    /// Episode ID.
    pub id: u64,
    /// Parent series ID.
    pub series_id: Option<u64>,
    /// Episode name.
    pub name: Option<String>,
    /// First air date (`YYYY-MM-DD`).
    pub aired: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Overview.
    pub overview: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Episode number within its season.
    pub number: Option<u32>,
    /// Season number.
    pub season_number: Option<u32>,
    /// Absolute number across seasons.
    pub absolute_number: Option<u32>,
    /// Whether the episode is a movie.
    pub is_movie: Option<i64>,
    /// Languages with a translated name.
    #[serde(deserialize_with = "null_default")]
    pub name_translations: Vec<String>,
    /// Languages with a translated overview.
    #[serde(deserialize_with = "null_default")]
    pub overview_translations: Vec<String>,
    /// Last update timestamp.
    pub last_updated: Option<String>,
    /// Finale type, e.g. `season` or `series`.
    pub finale_type: Option<String>,
    /// Year of first airing.
    pub year: Option<String>,
}

impl Episode {
    /// `S01E02`-style label, if both numbers are known.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        Some(format!("S{:02}E{:02}", self.season_number?, self.number?))
    }
}

/// Episode with related records (`/episodes/{id}/extended`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeExtended {
    /// Base episode.
    #[serde(flatten)]
    pub episode: Episode,
    /// Characters appearing in the episode.
    #[serde(deserialize_with = "null_default")]
    pub characters: Vec<Character>,
    /// Production companies.
    #[serde(deserialize_with = "null_default")]
    pub companies: Vec<Company>,
    /// Networks.
    #[serde(deserialize_with = "null_default")]
    pub networks: Vec<Company>,
    /// Trailers.
    #[serde(deserialize_with = "null_default")]
    pub trailers: Vec<Trailer>,
    /// External identifiers.
    #[serde(deserialize_with = "null_default")]
    pub remote_ids: Vec<RemoteId>,
    /// Production code.
    pub production_code: Option<String>,
}

/// Season ordering type record (`aired`, `dvd`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeasonTypeRecord {
    /// Type ID.
    pub id: Option<u64>,
    /// Display name.
    pub name: Option<String>,
    /// Machine name, e.g. `official`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Alternate name.
    pub alternate_name: Option<String>,
}

/// Season (`/seasons/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Season {
    /// Season ID.
    pub id: u64,
    /// Parent series ID.
    pub series_id: Option<u64>,
    /// Ordering type.
    #[serde(rename = "type")]
    pub kind: Option<SeasonTypeRecord>,
    /// Season number.
    pub number: Option<u32>,
    /// Season name.
    pub name: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Year.
    pub year: Option<String>,
    /// Last update timestamp.
    pub last_updated: Option<String>,
}
