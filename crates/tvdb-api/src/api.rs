//! `TvdbApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;
use crate::params::{EpisodeQuery, SearchParams, SeasonType, UpdatesParams};
use crate::types::{
    Artwork, Award, AwardCategory, AwardExtended, Character, Company, ContentRating, Country,
    EntityUpdate, Episode, EpisodeExtended, FavoriteRecord, Favorites, Genre, Language, Movie,
    MovieExtended, Person, SearchResult, Season, Series, SeriesEpisodes, SeriesExtended,
    Translation, UserInfo,
};

/// TVDB v4 API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every method authenticates lazily and returns the unwrapped `data` of
/// the response envelope. List endpoints map `data: null` to an empty list.
///
/// # Errors
///
/// Every method returns a [`crate::TvdbError`] when authentication, the HTTP
/// request, or decoding fails.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvdbApi: Send)]
pub trait LocalTvdbApi {
    /// All awards.
    async fn awards(&self) -> Result<Vec<Award>>;

    /// One award.
    async fn award(&self, id: u64) -> Result<Award>;

    /// One award with its categories.
    async fn award_extended(&self, id: u64) -> Result<AwardExtended>;

    /// One award category.
    async fn award_category(&self, id: u64) -> Result<AwardCategory>;

    /// One artwork.
    async fn artwork(&self, id: u64) -> Result<Artwork>;

    /// One character.
    async fn character(&self, id: u64) -> Result<Character>;

    /// One page of companies.
    async fn companies(&self, page: Option<u32>) -> Result<Vec<Company>>;

    /// All content ratings.
    async fn content_ratings(&self) -> Result<Vec<ContentRating>>;

    /// All countries.
    async fn countries(&self) -> Result<Vec<Country>>;

    /// One episode.
    async fn episode(&self, id: u64) -> Result<Episode>;

    /// One episode with related records.
    async fn episode_extended(&self, id: u64) -> Result<EpisodeExtended>;

    /// Translation of one episode.
    async fn episode_translation(&self, id: u64, language: &str) -> Result<Translation>;

    /// All genres.
    async fn genres(&self) -> Result<Vec<Genre>>;

    /// All languages.
    async fn languages(&self) -> Result<Vec<Language>>;

    /// One movie.
    async fn movie(&self, id: u64) -> Result<Movie>;

    /// One movie with related records.
    async fn movie_extended(&self, id: u64) -> Result<MovieExtended>;

    /// One person.
    async fn person(&self, id: u64) -> Result<Person>;

    /// Searches series, movies, people and companies.
    async fn search(&self, params: &SearchParams) -> Result<Vec<SearchResult>>;

    /// One season.
    async fn season(&self, id: u64) -> Result<Season>;

    /// One series.
    async fn series(&self, id: u64) -> Result<Series>;

    /// One series with related records.
    async fn series_extended(&self, id: u64) -> Result<SeriesExtended>;

    /// One page of a series' episodes in the given ordering.
    async fn series_episodes(
        &self,
        id: u64,
        season_type: SeasonType,
        query: &EpisodeQuery,
    ) -> Result<SeriesEpisodes>;

    /// Translation of one series.
    async fn series_translation(&self, id: u64, language: &str) -> Result<Translation>;

    /// Changes since a point in time.
    async fn updates(&self, params: &UpdatesParams) -> Result<Vec<EntityUpdate>>;

    /// The authenticated user.
    async fn user(&self) -> Result<UserInfo>;

    /// The user's favorites.
    async fn favorites(&self) -> Result<Favorites>;

    /// Adds favorites. The server answers without content.
    async fn create_favorites(&self, record: &FavoriteRecord) -> Result<()>;
}
