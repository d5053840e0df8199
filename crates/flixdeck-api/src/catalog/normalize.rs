//! Normalization rules: raw TMDB records to display models.

use chrono::Datelike;

use super::model::{CatalogItem, FeaturedItem, Rating};
use crate::tmdb::{TmdbListItem, TmdbMovieDetails, TmdbTvDetails};

/// Image-CDN prefix for poster-size assets.
pub(crate) const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Image-CDN prefix for backdrop-size assets.
pub(crate) const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w1280";

/// Placeholder for records without a poster.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/500x750/e50914/ffffff?text=No+Image";

/// Maximum number of items in a list view.
pub const LIST_LIMIT: usize = 20;

/// Maximum number of genre entries in a detail/hero view.
pub const DETAIL_GENRE_LIMIT: usize = 3;

/// Maps a vote average to a rating using the list threshold table.
#[must_use]
pub fn list_rating(vote_average: f64) -> Rating {
    if vote_average >= 8.0 {
        Rating::TvMa
    } else if vote_average >= 7.0 {
        Rating::Tv14
    } else if vote_average >= 6.0 {
        Rating::TvPg
    } else {
        Rating::TvG
    }
}

/// Maps a vote average to a rating using the stricter detail threshold
/// table (single-item detail/featured lookups only).
#[must_use]
pub fn detail_rating(vote_average: f64) -> Rating {
    if vote_average >= 8.5 {
        Rating::TvMa
    } else if vote_average >= 7.5 {
        Rating::Tv14
    } else if vote_average >= 6.5 {
        Rating::TvPg
    } else {
        Rating::TvG
    }
}

/// Extracts the four-digit year from an ISO `YYYY-MM-DD` date string.
/// Absent, empty, or malformed dates resolve to the current calendar
/// year.
#[must_use]
pub fn release_year(date: Option<&str>) -> i32 {
    date.filter(|s| !s.is_empty())
        .and_then(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .map_or_else(|| chrono::Local::now().year(), |d| d.year())
}

/// Builds an absolute poster URL, substituting the placeholder when the
/// upstream path is missing.
fn poster_url(path: Option<&str>) -> String {
    path.map_or_else(
        || String::from(PLACEHOLDER_IMAGE_URL),
        |p| format!("{POSTER_BASE_URL}{p}"),
    )
}

/// Builds an absolute backdrop URL, if the upstream record has one.
fn backdrop_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{BACKDROP_BASE_URL}{p}"))
}

/// Normalizes a list payload: cap at [`LIST_LIMIT`], upstream order
/// preserved, no client-side resort.
#[must_use]
pub(crate) fn normalize_list(results: Vec<TmdbListItem>) -> Vec<CatalogItem> {
    results
        .into_iter()
        .take(LIST_LIMIT)
        .map(normalize_list_item)
        .collect()
}

/// Normalizes a single list record.
fn normalize_list_item(item: TmdbListItem) -> CatalogItem {
    let title = first_non_empty(item.title, item.name);
    let date = item.release_date.as_deref().or(item.first_air_date.as_deref());
    CatalogItem {
        id: item.id,
        title,
        image: poster_url(item.poster_path.as_deref()),
        backdrop: backdrop_url(item.backdrop_path.as_deref()),
        rating: list_rating(item.vote_average),
        year: release_year(date),
        overview: item.overview.unwrap_or_default(),
        genre_ids: item.genre_ids,
    }
}

/// Normalizes a movie detail record for the hero section.
#[must_use]
pub(crate) fn normalize_movie(movie: TmdbMovieDetails) -> FeaturedItem {
    FeaturedItem {
        id: movie.id,
        title: movie.title,
        overview: movie.overview.unwrap_or_default(),
        backdrop: backdrop_url(movie.backdrop_path.as_deref()),
        rating: detail_rating(movie.vote_average),
        year: release_year(movie.release_date.as_deref()),
        duration: movie.runtime.map(|m| format!("{m}m")),
        genres: cap_genres(movie.genres.into_iter().map(|g| g.name)),
    }
}

/// Normalizes a TV detail record for the hero section.
#[must_use]
pub(crate) fn normalize_tv(show: TmdbTvDetails) -> FeaturedItem {
    FeaturedItem {
        id: show.id,
        title: show.name,
        overview: show.overview.unwrap_or_default(),
        backdrop: backdrop_url(show.backdrop_path.as_deref()),
        rating: detail_rating(show.vote_average),
        year: release_year(show.first_air_date.as_deref()),
        duration: show.episode_run_time.first().map(|m| format!("{m}m")),
        genres: cap_genres(show.genres.into_iter().map(|g| g.name)),
    }
}

/// Degrades a list record into a hero record. Duration and resolved
/// genre names are unavailable at list granularity.
#[must_use]
pub(crate) fn featured_from_list(item: CatalogItem) -> FeaturedItem {
    FeaturedItem {
        id: item.id,
        title: item.title,
        overview: item.overview,
        backdrop: item.backdrop,
        rating: item.rating,
        year: item.year,
        duration: None,
        genres: Vec::new(),
    }
}

/// First non-empty of two optional strings, or empty.
fn first_non_empty(a: Option<String>, b: Option<String>) -> String {
    a.filter(|s| !s.is_empty())
        .or_else(|| b.filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

/// Truncates resolved genre names to [`DETAIL_GENRE_LIMIT`].
fn cap_genres(names: impl Iterator<Item = String>) -> Vec<String> {
    names.take(DETAIL_GENRE_LIMIT).collect()
}
