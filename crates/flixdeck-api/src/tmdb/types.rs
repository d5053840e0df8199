//! TMDB API response types.

use serde::Deserialize;

// --- List endpoints ---

/// Response from list endpoints (`movie/popular`, `tv/popular`,
/// `movie/top_rated`, `trending/tv/week`, `discover/tv`).
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbListResponse {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Result records, in upstream order.
    pub results: Vec<TmdbListItem>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// A single list record. Movie and TV list payloads share this shape:
/// movies carry `title`/`release_date`, TV series carry
/// `name`/`first_air_date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbListItem {
    /// TMDB ID.
    pub id: u64,
    /// Movie title (absent for TV records).
    #[serde(default)]
    pub title: Option<String>,
    /// Series name (absent for movie records).
    #[serde(default)]
    pub name: Option<String>,
    /// Poster image path (e.g. "/abc.jpg").
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Vote average on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Release date (movies, YYYY-MM-DD or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// First air date (TV, YYYY-MM-DD or null).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

// --- Detail endpoints ---

/// Response from the `movie/{movie_id}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Vote average on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Release date (YYYY-MM-DD or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Resolved genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// Response from the `tv/{series_id}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Series name.
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Vote average on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// First air date (YYYY-MM-DD or null).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Typical episode runtimes in minutes (often a single entry).
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Resolved genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// Genre entry in detail responses.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u64,
    /// Genre name.
    pub name: String,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[allow(dead_code)]
    pub success: bool,
}
