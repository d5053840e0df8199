//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 endpoints used by the
//! browse page: popular/top-rated/trending lists, network-filtered
//! TV discovery, and movie/TV detail lookups.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieDb, MovieDb};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    TmdbErrorResponse, TmdbGenre, TmdbListItem, TmdbListResponse, TmdbMovieDetails, TmdbTvDetails,
};
