//! Award records (`/awards`).

use serde::Deserialize;

use super::lenient::null_default;

/// Award (`/awards`, `/awards/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Award {
    /// Award ID.
    pub id: u64,
    /// Award name.
    pub name: Option<String>,
}

/// Award category (`/awards/categories/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardCategory {
    /// Category ID.
    pub id: u64,
    /// Category name.
    pub name: Option<String>,
    /// Whether several nominees can share a nomination.
    pub allow_co_nominees: Option<bool>,
    /// Whether series can be nominated.
    pub for_series: Option<bool>,
    /// Whether movies can be nominated.
    pub for_movies: Option<bool>,
    /// Parent award.
    pub award: Option<Award>,
}

/// Nominee within an award category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AwardNominee {
    /// Nominee ID.
    pub id: Option<u64>,
    /// Nominated name.
    pub name: Option<String>,
    /// Year of the nomination.
    pub year: Option<String>,
    /// Category name.
    pub category: Option<String>,
    /// Additional details.
    pub details: Option<String>,
    /// Whether the nominee won.
    #[serde(rename = "isWinner")]
    pub is_winner: Option<bool>,
}

/// Award with its categories (`/awards/{id}/extended`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AwardExtended {
    /// Base award.
    #[serde(flatten)]
    pub award: Award,
    /// Categories of this award.
    #[serde(deserialize_with = "null_default")]
    pub categories: Vec<AwardCategory>,
    /// Score.
    pub score: Option<i64>,
}
