//! Small records shared by several endpoints.

use serde::Deserialize;

use super::lenient::null_default;

/// Alternative name of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Alias {
    /// Three-letter language code.
    pub language: Option<String>,
    /// Alias text.
    pub name: Option<String>,
}

/// Record status, e.g. "Continuing" or "Ended".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    /// Status ID.
    pub id: Option<u64>,
    /// Status name.
    pub name: Option<String>,
    /// Record type the status applies to.
    pub record_type: Option<String>,
    /// Whether records with this status keep receiving updates.
    pub keep_updated: Option<bool>,
}

/// Genre (`/genres`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Genre {
    /// Genre ID.
    pub id: u64,
    /// Genre name.
    pub name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
}

/// Language (`/languages`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    /// Three-letter code, e.g. `eng`.
    pub id: String,
    /// English name.
    pub name: Option<String>,
    /// Native name.
    pub native_name: Option<String>,
    /// Short code, e.g. `en`.
    pub short_code: Option<String>,
}

/// Country (`/countries`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Country {
    /// Three-letter code, e.g. `usa`.
    pub id: String,
    /// Country name.
    pub name: Option<String>,
    /// Two-letter code.
    pub short_code: Option<String>,
}

/// Content rating (`/content/ratings`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRating {
    /// Rating ID.
    pub id: u64,
    /// Short name, e.g. `TV-MA`.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Three-letter country code.
    pub country: Option<String>,
    /// Content type, e.g. `episode`.
    pub content_type: Option<String>,
    /// Sort order.
    pub order: Option<i64>,
    /// Full name.
    pub full_name: Option<String>,
}

/// Company type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyType {
    /// Type ID.
    pub company_type_id: Option<u64>,
    /// Type name, e.g. `Network`.
    pub company_type_name: Option<String>,
}

/// Company (`/companies`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Languages with a translated name.
    #[serde(deserialize_with = "null_default")]
    pub name_translations: Vec<String>,
    /// Languages with a translated overview.
    #[serde(deserialize_with = "null_default")]
    pub overview_translations: Vec<String>,
    /// Alternative names.
    #[serde(deserialize_with = "null_default")]
    pub aliases: Vec<Alias>,
    /// Three-letter country code.
    pub country: Option<String>,
    /// Primary company type ID.
    pub primary_company_type: Option<u64>,
    /// Date the company became active.
    pub active_date: Option<String>,
    /// Date the company became inactive.
    pub inactive_date: Option<String>,
    /// Company type.
    pub company_type: Option<CompanyType>,
}

/// Artwork (`/artwork/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Artwork {
    /// Artwork ID.
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
    /// Three-letter language code.
    pub language: Option<String>,
    /// Artwork type ID.
    #[serde(rename = "type")]
    pub kind: Option<u64>,
    /// Score.
    pub score: Option<f64>,
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Whether the image contains text.
    pub includes_text: Option<bool>,
}

/// External identifier (IMDB, TMDB, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteId {
    /// Identifier in the remote source.
    pub id: Option<String>,
    /// Source type ID.
    #[serde(rename = "type")]
    pub kind: Option<u64>,
    /// Source name, e.g. `IMDB`.
    pub source_name: Option<String>,
}

/// Trailer link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Trailer {
    /// Trailer ID.
    pub id: Option<u64>,
    /// Trailer name.
    pub name: Option<String>,
    /// Video URL.
    pub url: Option<String>,
    /// Three-letter language code.
    pub language: Option<String>,
    /// Runtime in seconds.
    pub runtime: Option<u32>,
}
