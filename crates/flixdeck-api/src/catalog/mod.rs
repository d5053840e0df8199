//! Catalog layer.
//!
//! Normalizes heterogeneous TMDB records (movies vs. TV series,
//! missing fields) into a single display model and absorbs upstream
//! failures into deterministic substitute data. Renderers built on
//! this module never see an error path.

#[allow(clippy::module_inception)]
mod catalog;
mod fallback;
mod model;
mod normalize;

#[allow(clippy::module_name_repetitions)]
pub use catalog::{Catalog, FEATURED_TV_ID, NETFLIX_NETWORK_ID};
pub use fallback::{fallback_featured, fallback_items};
pub use model::{CatalogItem, DataOrigin, FeaturedItem, Rating, RowQuery, Sourced};
pub use normalize::{
    DETAIL_GENRE_LIMIT, LIST_LIMIT, PLACEHOLDER_IMAGE_URL, detail_rating, list_rating,
    release_year,
};
