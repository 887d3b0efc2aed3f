//! Resource paths of the v4 endpoints.

use crate::params::{EpisodeQuery, SearchParams, SeasonType, UpdatesParams};
use crate::path::{QueryParameters, build, build_specific, build_with_query};

pub(crate) const AWARDS: &str = "/awards";
pub(crate) const ARTWORK: &str = "/artwork";
pub(crate) const CHARACTERS: &str = "/characters";
pub(crate) const COMPANIES: &str = "/companies";
pub(crate) const CONTENT_RATINGS: &str = "/content/ratings";
pub(crate) const COUNTRIES: &str = "/countries";
pub(crate) const EPISODES: &str = "/episodes";
pub(crate) const GENRES: &str = "/genres";
pub(crate) const LANGUAGES: &str = "/languages";
pub(crate) const MOVIES: &str = "/movies";
pub(crate) const PEOPLE: &str = "/people";
pub(crate) const SEARCH: &str = "/search";
pub(crate) const SEASONS: &str = "/seasons";
pub(crate) const SERIES: &str = "/series";
pub(crate) const UPDATES: &str = "/updates";
pub(crate) const USER: &str = "/user";
pub(crate) const FAVORITES: &str = "/user/favorites";

pub(crate) fn by_id(base: &str, id: u64) -> String {
    build(base, &[id])
}

pub(crate) fn extended(base: &str, id: u64) -> String {
    build(base, &[id.to_string().as_str(), "extended"])
}

pub(crate) fn translation(base: &str, id: u64, language: &str) -> String {
    build(base, &[id.to_string().as_str(), "translations", language])
}

pub(crate) fn award_category(id: u64) -> String {
    build_specific(AWARDS, Some("categories"), &[id])
}

pub(crate) fn companies(page: Option<u32>) -> String {
    build_with_query(COMPANIES, None, &QueryParameters::new().with("page", page))
}

pub(crate) fn search(params: &SearchParams) -> String {
    build_with_query(SEARCH, None, &params.to_query())
}

pub(crate) fn series_episodes(id: u64, season_type: SeasonType, query: &EpisodeQuery) -> String {
    let base = build(SERIES, &[id.to_string().as_str(), "episodes"]);
    build_with_query(&base, Some(season_type.as_str()), &query.to_query())
}

pub(crate) fn updates(params: &UpdatesParams) -> String {
    build_with_query(UPDATES, None, &params.to_query())
}
