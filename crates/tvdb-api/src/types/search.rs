//! Search results (`/search`).

use serde::Deserialize;

use super::common::RemoteId;
use super::lenient::null_default;
use super::translation::Translations;

/// One search hit.
///
/// Search results come from a separate index, so most fields are strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Index object ID, e.g. `series-81189`.
    #[serde(rename = "objectID")]
    pub object_id: Option<String>,
    /// Record ID as a string.
    pub id: Option<String>,
    /// Name in the primary language.
    pub name: Option<String>,
    /// Record type, e.g. `series`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// TVDB ID.
    pub tvdb_id: Option<String>,
    /// Year.
    pub year: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Poster URL.
    pub image_url: Option<String>,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
    /// First air time.
    pub first_air_time: Option<String>,
    /// Network name.
    pub network: Option<String>,
    /// Three-letter country code.
    pub country: Option<String>,
    /// Primary language.
    pub primary_language: Option<String>,
    /// Overview in the primary language.
    pub overview: Option<String>,
    /// Status name.
    pub status: Option<String>,
    /// Alternative names.
    #[serde(deserialize_with = "null_default")]
    pub aliases: Vec<String>,
    /// Translated names.
    pub translations: Option<Translations>,
    /// Translated overviews.
    pub overviews: Option<Translations>,
    /// External identifiers.
    #[serde(deserialize_with = "null_default")]
    pub remote_ids: Vec<RemoteId>,
}

impl SearchResult {
    /// Name in `language`, falling back to the primary name.
    #[must_use]
    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.translations
            .as_ref()
            .and_then(|t| t.for_language(language))
            .or(self.name.as_deref())
    }

    /// Overview in `language`, falling back to the primary overview.
    #[must_use]
    pub fn overview_in(&self, language: &str) -> Option<&str> {
        self.overviews
            .as_ref()
            .and_then(|t| t.for_language(language))
            .or(self.overview.as_deref())
    }

    /// TVDB ID as a number.
    #[must_use]
    pub fn tvdb_id_number(&self) -> Option<u64> {
        self.tvdb_id.as_deref()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::ApiResponse;

    #[test]
    fn test_parse_search_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tvdb/search_breaking_bad.json");

        // Act
        let envelope: ApiResponse<Vec<SearchResult>> = serde_json::from_str(json).unwrap();

        // Assert
        let results = envelope.data.unwrap();
        assert_eq!(results.len(), 2);
        let first = &results[0];
        assert_eq!(first.tvdb_id_number(), Some(81_189));
        assert_eq!(first.name_in("deu"), Some("Breaking Bad (DE)"));
        assert_eq!(first.name_in("xxx"), Some("Breaking Bad"));
        assert_eq!(first.overview_in("eng"), Some("A chemistry teacher turns to crime."));
        assert!(envelope.links.unwrap().has_next());
    }

    #[test]
    fn test_translation_shapes_vary_per_hit() {
        // Arrange
        let json = include_str!("../../../../fixtures/tvdb/search_breaking_bad.json");

        // Act
        let envelope: ApiResponse<Vec<SearchResult>> = serde_json::from_str(json).unwrap();

        // Assert
        let second = &envelope.data.unwrap()[1];
        assert!(matches!(second.translations, Some(Translations::Text(_))));
        assert!(matches!(second.overviews, Some(Translations::List(_))));
        assert_eq!(second.name_in("eng"), Some("El Camino"));
    }
}
