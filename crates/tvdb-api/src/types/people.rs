//! People and character records.

use serde::Deserialize;

use super::common::Alias;
use super::lenient::null_default;

/// Person (`/people/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    /// Person ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Score.
    pub score: Option<f64>,
    /// Birth date.
    pub birth: Option<String>,
    /// Death date.
    pub death: Option<String>,
    /// Birth place.
    pub birth_place: Option<String>,
    /// Gender ID.
    pub gender: Option<i64>,
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

/// Character (`/characters/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    /// Character ID.
    pub id: u64,
    /// Character name.
    pub name: Option<String>,
    /// Person playing the character.
    pub people_id: Option<u64>,
    /// Series the character belongs to.
    pub series_id: Option<u64>,
    /// Movie the character belongs to.
    pub movie_id: Option<u64>,
    /// Episode the character belongs to.
    pub episode_id: Option<u64>,
    /// Role type ID.
    #[serde(rename = "type")]
    pub kind: Option<u64>,
    /// Role type name, e.g. `Actor`.
    pub people_type: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Sort order.
    pub sort: Option<i64>,
    /// Whether the character is featured.
    pub is_featured: Option<bool>,
    /// Name of the person.
    pub person_name: Option<String>,
    /// Image of the person.
    pub person_img_url: Option<String>,
}
