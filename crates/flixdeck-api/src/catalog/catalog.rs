//! `Catalog` - the catalog client.
//!
//! Wraps a raw [`MovieDb`] implementation with normalization and the
//! fallback policy. Every operation resolves to [`Sourced`] data and
//! never returns an error: transport failures, non-success statuses,
//! and decode failures are logged and absorbed into substitute
//! payloads at this boundary.

use tracing::instrument;

use super::fallback::{fallback_featured, fallback_items};
use super::model::{CatalogItem, FeaturedItem, RowQuery, Sourced};
use super::normalize::{featured_from_list, normalize_list, normalize_movie, normalize_tv};
use crate::tmdb::MovieDb;

/// TMDB series ID of the default featured show (Stranger Things).
pub const FEATURED_TV_ID: u64 = 66_732;

/// TMDB network ID used to approximate Netflix Originals.
pub const NETFLIX_NETWORK_ID: u32 = 213;

/// The catalog client.
///
/// Constructed once per page load and handed to each renderer
/// explicitly. Holds no mutable state and caches nothing.
#[derive(Debug)]
pub struct Catalog<A> {
    /// Raw endpoint client.
    db: A,
}

impl<A: MovieDb> Catalog<A> {
    /// Creates a catalog over a raw endpoint client.
    pub const fn new(db: A) -> Self {
        Self { db }
    }

    /// Popular movies, normalized and capped at 20.
    #[instrument(skip_all)]
    pub async fn popular_movies(&self) -> Sourced<Vec<CatalogItem>> {
        Self::absorb_list(self.db.popular_movies().await, "movie/popular")
    }

    /// Weekly trending TV series.
    #[instrument(skip_all)]
    pub async fn trending_tv(&self) -> Sourced<Vec<CatalogItem>> {
        Self::absorb_list(self.db.trending_tv().await, "trending/tv/week")
    }

    /// Popular TV series.
    #[instrument(skip_all)]
    pub async fn popular_tv(&self) -> Sourced<Vec<CatalogItem>> {
        Self::absorb_list(self.db.popular_tv().await, "tv/popular")
    }

    /// Top-rated movies.
    #[instrument(skip_all)]
    pub async fn top_rated_movies(&self) -> Sourced<Vec<CatalogItem>> {
        Self::absorb_list(self.db.top_rated_movies().await, "movie/top_rated")
    }

    /// Netflix Originals, approximated by network-filtered discovery.
    #[instrument(skip_all)]
    pub async fn netflix_originals(&self) -> Sourced<Vec<CatalogItem>> {
        Self::absorb_list(
            self.db.discover_network_tv(NETFLIX_NETWORK_ID).await,
            "discover/tv",
        )
    }

    /// Runs the list query mapped to a carousel heading.
    pub async fn row(&self, query: RowQuery) -> Sourced<Vec<CatalogItem>> {
        match query {
            RowQuery::PopularMovies => self.popular_movies().await,
            RowQuery::TrendingTv => self.trending_tv().await,
            RowQuery::NetflixOriginals => self.netflix_originals().await,
            RowQuery::PopularTv => self.popular_tv().await,
            RowQuery::TopRatedMovies => self.top_rated_movies().await,
        }
    }

    /// Movie details for the hero section (detail threshold table).
    #[instrument(skip_all)]
    pub async fn movie_details(&self, movie_id: u64) -> Sourced<FeaturedItem> {
        match self.db.movie_details(movie_id).await {
            Ok(details) => Sourced::live(normalize_movie(details)),
            Err(err) => degrade_featured(&err, "movie details"),
        }
    }

    /// TV series details for the hero section (detail threshold table).
    #[instrument(skip_all)]
    pub async fn tv_details(&self, series_id: u64) -> Sourced<FeaturedItem> {
        match self.db.tv_details(series_id).await {
            Ok(details) => Sourced::live(normalize_tv(details)),
            Err(err) => degrade_featured(&err, "tv details"),
        }
    }

    /// Featured content for the hero section.
    ///
    /// Attempts the fixed well-known show first; on failure, degrades
    /// to the first live popular-movies result; on total failure,
    /// serves the hard-coded hero record.
    #[instrument(skip_all)]
    pub async fn featured_content(&self) -> Sourced<FeaturedItem> {
        let err = match self.db.tv_details(FEATURED_TV_ID).await {
            Ok(details) => return Sourced::live(normalize_tv(details)),
            Err(err) => err,
        };
        tracing::warn!(error = %err, "featured lookup failed, degrading to popular movies");

        let popular = self.popular_movies().await;
        if !popular.is_fallback()
            && let Some(first) = popular.data.into_iter().next()
        {
            return Sourced::degraded(featured_from_list(first), err.to_string());
        }

        tracing::warn!("popular movies also unavailable, serving hard-coded hero record");
        Sourced::degraded(fallback_featured(), err.to_string())
    }

    /// Converts a raw list result into sourced display data, absorbing
    /// any error into the fixed substitute payload.
    fn absorb_list(
        result: anyhow::Result<crate::tmdb::TmdbListResponse>,
        endpoint: &str,
    ) -> Sourced<Vec<CatalogItem>> {
        match result {
            Ok(response) => Sourced::live(normalize_list(response.results)),
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "list request failed, serving fallback data");
                Sourced::degraded(fallback_items(), err.to_string())
            }
        }
    }
}

/// Degraded single-item payload with the failure logged.
fn degrade_featured(err: &anyhow::Error, what: &str) -> Sourced<FeaturedItem> {
    tracing::warn!(error = %err, "{what} request failed, serving fallback record");
    Sourced::degraded(fallback_featured(), err.to_string())
}
