//! Display model types for the browse page.

/// Netflix-style content rating, derived from the numeric vote average
/// via fixed thresholds. Never left raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    /// General audiences.
    TvG,
    /// Parental guidance suggested.
    TvPg,
    /// Unsuitable under 14.
    Tv14,
    /// Mature audiences.
    TvMa,
}

impl Rating {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TvG => "TV-G",
            Self::TvPg => "TV-PG",
            Self::Tv14 => "TV-14",
            Self::TvMa => "TV-MA",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized list-display record for carousel rows.
///
/// Created at fetch time, consumed synchronously by a renderer,
/// discarded after display. Never cached or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// TMDB ID.
    pub id: u64,
    /// Display title (movie title or series name, first non-empty).
    pub title: String,
    /// Absolute poster URL. Never empty: placeholder substituted when
    /// the upstream path is missing.
    pub image: String,
    /// Absolute backdrop URL, if the upstream record carries one.
    pub backdrop: Option<String>,
    /// Content rating (list threshold table).
    pub rating: Rating,
    /// Release year. Always populated: current calendar year when the
    /// upstream date is absent or unparseable.
    pub year: i32,
    /// Overview text (may be empty).
    pub overview: String,
    /// Raw genre IDs, upstream order preserved.
    pub genre_ids: Vec<u64>,
}

/// A normalized hero/detail-display record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedItem {
    /// TMDB ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Overview text (may be empty).
    pub overview: String,
    /// Absolute backdrop URL, if present.
    pub backdrop: Option<String>,
    /// Content rating (detail threshold table).
    pub rating: Rating,
    /// Release year.
    pub year: i32,
    /// Duration like "51m", if known.
    pub duration: Option<String>,
    /// Resolved genre names, capped at 3.
    pub genres: Vec<String>,
}

/// Closed mapping from a carousel heading to its catalog query.
///
/// Headings are matched case-insensitively; anything outside the known
/// set routes to the explicit default (`PopularMovies`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowQuery {
    /// "Popular on Netflix" → popular movies.
    PopularMovies,
    /// "Trending Now" → weekly trending TV.
    TrendingTv,
    /// "Netflix Originals" → network-filtered TV discovery.
    NetflixOriginals,
    /// "TV Shows" → popular TV.
    PopularTv,
    /// "Movies" → top-rated movies.
    TopRatedMovies,
}

impl RowQuery {
    /// Selects the query for a carousel heading.
    #[must_use]
    pub fn from_heading(heading: &str) -> Self {
        match heading.trim().to_lowercase().as_str() {
            "trending now" => Self::TrendingTv,
            "netflix originals" => Self::NetflixOriginals,
            "tv shows" => Self::PopularTv,
            "movies" => Self::TopRatedMovies,
            // "popular on netflix", unknown, or missing headings all
            // take the default query.
            _ => Self::PopularMovies,
        }
    }
}

/// Where a resolved payload came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    /// Real data from the upstream source.
    Live,
    /// Deterministic substitute data served after a failure.
    Fallback {
        /// What went wrong upstream.
        reason: String,
    },
}

/// A payload tagged with its origin.
///
/// Catalog operations resolve to this instead of erroring: callers and
/// tests can distinguish real data from substitute data without
/// inspecting the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    /// The resolved payload.
    pub data: T,
    /// Live or fallback.
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    /// Wraps live upstream data.
    #[must_use]
    pub const fn live(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Live,
        }
    }

    /// Wraps substitute data with the failure reason.
    #[must_use]
    pub const fn degraded(data: T, reason: String) -> Self {
        Self {
            data,
            origin: DataOrigin::Fallback { reason },
        }
    }

    /// Returns true when the payload is substitute data.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.origin, DataOrigin::Fallback { .. })
    }
}
