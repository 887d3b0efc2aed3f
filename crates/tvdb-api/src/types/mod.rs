//! Response records of the v4 API.
//!
//! All records decode leniently: unknown fields are ignored, and missing
//! or `null` fields fall back to their defaults.

mod awards;
mod common;
mod episodes;
mod lenient;
mod movies;
mod people;
mod search;
mod series;
mod translation;
mod updates;
mod user;

pub use awards::{Award, AwardCategory, AwardExtended, AwardNominee};
pub use common::{
    Alias, Artwork, Company, CompanyType, ContentRating, Country, Genre, Language, RemoteId,
    Status, Trailer,
};
pub use episodes::{Episode, EpisodeExtended, Season, SeasonTypeRecord};
pub use movies::{Movie, MovieExtended, Release};
pub use people::{Character, Person};
pub use search::SearchResult;
pub use series::{Series, SeriesEpisodes, SeriesExtended};
pub use translation::{Translation, Translations};
pub use updates::EntityUpdate;
pub use user::{FavoriteRecord, Favorites, UserInfo};
