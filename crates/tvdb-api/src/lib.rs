//! Typed async client for TheTVDB v4 REST API.
//!
//! The client authenticates lazily with an API key, attaches the bearer
//! token to every request, re-authenticates once when the token is
//! rejected, and maps the `{data, status, links}` envelope into typed
//! records.

mod api;
mod auth;
mod client;
mod connection;
mod endpoint;
mod error;
mod json;
mod params;
pub mod path;
mod remote;
mod response;
mod session;
pub mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTvdbApi, TvdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TvdbClient, TvdbClientBuilder};
pub use connection::Connection;
#[allow(clippy::module_name_repetitions)]
pub use error::{ErrorPayload, Result, TvdbError};
pub use json::JsonApi;
pub use params::{EpisodeQuery, SearchParams, SeasonType, UpdateAction, UpdatesParams};
pub use path::QueryParameters;
pub use remote::RemoteApi;
pub use reqwest::Method;
pub use response::{ApiResponse, Links};
pub use session::{ApiKey, FundingModel, Session, SessionStatus};
