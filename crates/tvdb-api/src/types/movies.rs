//! Movie records.

use serde::Deserialize;

use super::common::{Alias, Artwork, Company, Genre, RemoteId, Status, Trailer};
use super::lenient::null_default;
use super::people::Character;

/// Movie (`/movies/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Movie {
    /// Movie ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Poster URL.
    pub image: Option<String>,
    /// Score.
    pub score: Option<f64>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Status.
    pub status: Option<Status>,
    /// Last update timestamp.
    pub last_updated: Option<String>,
    /// Release year.
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

/// Release date in one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Release {
    /// Three-letter country code.
    pub country: Option<String>,
    /// Release date.
    pub date: Option<String>,
    /// Release detail, e.g. `Premiere`.
    pub detail: Option<String>,
}

/// Movie with related records (`/movies/{id}/extended`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieExtended {
    /// Base movie.
    #[serde(flatten)]
    pub movie: Movie,
    /// Artworks.
    #[serde(deserialize_with = "null_default")]
    pub artworks: Vec<Artwork>,
    /// Genres.
    #[serde(deserialize_with = "null_default")]
    pub genres: Vec<Genre>,
    /// Cast and crew.
    #[serde(deserialize_with = "null_default")]
    pub characters: Vec<Character>,
    /// Release dates.
    #[serde(deserialize_with = "null_default")]
    pub releases: Vec<Release>,
    /// Trailers.
    #[serde(deserialize_with = "null_default")]
    pub trailers: Vec<Trailer>,
    /// External identifiers.
    #[serde(deserialize_with = "null_default")]
    pub remote_ids: Vec<RemoteId>,
    /// Studios.
    #[serde(deserialize_with = "null_default")]
    pub studios: Vec<Company>,
    /// Budget as reported.
    pub budget: Option<String>,
    /// Box office as reported.
    pub box_office: Option<String>,
    /// Three-letter country code.
    pub original_country: Option<String>,
    /// Three-letter language code.
    pub original_language: Option<String>,
}
