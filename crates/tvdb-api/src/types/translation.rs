//! Translated names and overviews.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::lenient::null_default;

/// Translation fields whose JSON shape depends on the endpoint.
///
/// The API sends the same logical field as a language-keyed object, a
/// plain list, or a single string. Decoding tries those shapes in that
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Translations {
    /// `{"eng": "Breaking Bad", "fra": "..."}`
    ByLanguage(BTreeMap<String, String>),
    /// `["Breaking Bad", "..."]`
    List(Vec<String>),
    /// `"Breaking Bad"`
    Text(String),
}

impl Default for Translations {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Translations {
    /// Value for a three-letter language code. Only keyed translations
    /// carry language information.
    #[must_use]
    pub fn for_language(&self, language: &str) -> Option<&str> {
        match self {
            Self::ByLanguage(map) => map.get(language).map(String::as_str),
            Self::List(_) | Self::Text(_) => None,
        }
    }

    /// All values, in language order for keyed translations.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::ByLanguage(map) => map.values().map(String::as_str).collect(),
            Self::List(list) => list.iter().map(String::as_str).collect(),
            Self::Text(text) => vec![text.as_str()],
        }
    }

    /// Language codes present, empty for unkeyed shapes.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        match self {
            Self::ByLanguage(map) => map.keys().map(String::as_str).collect(),
            Self::List(_) | Self::Text(_) => Vec::new(),
        }
    }

    /// Whether no value is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::ByLanguage(map) => map.is_empty(),
            Self::List(list) => list.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }
}

/// One translation record (`/series/{id}/translations/{language}` etc.).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Translation {
    /// Translated name.
    pub name: Option<String>,
    /// Translated overview.
    pub overview: Option<String>,
    /// Three-letter language code.
    pub language: Option<String>,
    /// Alternative names in this language.
    #[serde(deserialize_with = "null_default")]
    pub aliases: Vec<String>,
    /// Whether this is the primary language of the record.
    pub is_primary: Option<bool>,
    /// Whether this translation is an alias.
    pub is_alias: Option<bool>,
    /// Tagline (movies).
    pub tagline: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_decodes_object_shape() {
        // Arrange & Act
        let t: Translations =
            serde_json::from_str(r#"{"eng":"Breaking Bad","deu":"Breaking Bad DE"}"#).unwrap();

        // Assert
        assert_eq!(t.for_language("deu"), Some("Breaking Bad DE"));
        assert_eq!(t.languages(), vec!["deu", "eng"]);
    }

    #[test]
    fn test_decodes_list_shape() {
        // Arrange & Act
        let t: Translations = serde_json::from_str(r#"["eng","fra"]"#).unwrap();

        // Assert
        assert_eq!(t, Translations::List(vec![String::from("eng"), String::from("fra")]));
        assert_eq!(t.for_language("eng"), None);
    }

    #[test]
    fn test_decodes_string_shape() {
        // Arrange & Act
        let t: Translations = serde_json::from_str(r#""Breaking Bad""#).unwrap();

        // Assert
        assert_eq!(t.values(), vec!["Breaking Bad"]);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_rejects_other_shapes() {
        // Arrange & Act
        let result = serde_json::from_str::<Translations>("42");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_translation_record_lenient() {
        // Arrange
        let json = r#"{"name":"Le Bureau","language":"fra","aliases":null,"unexpected":1}"#;

        // Act
        let t: Translation = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(t.name.as_deref(), Some("Le Bureau"));
        assert!(t.aliases.is_empty());
        assert!(t.overview.is_none());
    }
}
