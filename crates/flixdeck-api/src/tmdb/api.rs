//! `MovieDb` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{TmdbListResponse, TmdbMovieDetails, TmdbTvDetails};

/// Movie database API trait.
///
/// Abstracts the upstream endpoints for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieDb: Send)]
pub trait LocalMovieDb {
    /// Fetches the popular movies list (`movie/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_movies(&self) -> Result<TmdbListResponse>;

    /// Fetches the top-rated movies list (`movie/top_rated`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn top_rated_movies(&self) -> Result<TmdbListResponse>;

    /// Fetches the popular TV series list (`tv/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_tv(&self) -> Result<TmdbListResponse>;

    /// Fetches the weekly trending TV list (`trending/tv/week`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn trending_tv(&self) -> Result<TmdbListResponse>;

    /// Fetches TV series filtered by network (`discover/tv?with_networks=N`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn discover_network_tv(&self, network_id: u32) -> Result<TmdbListResponse>;

    /// Fetches movie details (`movie/{movie_id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails>;

    /// Fetches TV series details (`tv/{series_id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64) -> Result<TmdbTvDetails>;
}
