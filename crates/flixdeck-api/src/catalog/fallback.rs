//! Deterministic substitute payloads served when the upstream source
//! is unreachable. The browse page never shows a blocking error state:
//! every failed request resolves to this fixed content instead.

use super::model::{CatalogItem, FeaturedItem, Rating};
use super::normalize::normalize_list;
use crate::tmdb::TmdbListItem;

/// Backdrop placeholder for the hard-coded hero record.
const FALLBACK_HERO_BACKDROP: &str =
    "https://via.placeholder.com/1280x720/141414/ffffff?text=Stranger+Things";

/// The fixed raw records substituted for any failed list request.
fn fallback_results() -> Vec<TmdbListItem> {
    vec![
        TmdbListItem {
            id: 1,
            title: Some(String::from("Stranger Things")),
            name: Some(String::from("Stranger Things")),
            vote_average: 8.7,
            release_date: Some(String::from("2016-07-15")),
            first_air_date: Some(String::from("2016-07-15")),
            overview: Some(String::from(
                "When a young boy vanishes, a small town uncovers a mystery involving \
                 secret experiments, terrifying supernatural forces, and one strange \
                 little girl.",
            )),
            ..TmdbListItem::default()
        },
        TmdbListItem {
            id: 2,
            title: Some(String::from("The Crown")),
            name: Some(String::from("The Crown")),
            vote_average: 8.5,
            release_date: Some(String::from("2016-11-04")),
            first_air_date: Some(String::from("2016-11-04")),
            overview: Some(String::from(
                "Follows the political rivalries and romance of Queen Elizabeth II's \
                 reign and the events that shaped the second half of the twentieth \
                 century.",
            )),
            ..TmdbListItem::default()
        },
        TmdbListItem {
            id: 3,
            title: Some(String::from("Wednesday")),
            name: Some(String::from("Wednesday")),
            vote_average: 8.3,
            release_date: Some(String::from("2022-11-23")),
            first_air_date: Some(String::from("2022-11-23")),
            overview: Some(String::from(
                "Smart, sarcastic and a little dead inside, Wednesday Addams \
                 investigates a murder spree while making new friends and foes at \
                 Nevermore Academy.",
            )),
            ..TmdbListItem::default()
        },
    ]
}

/// The substitute list payload, run through the same normalization path
/// as live data.
#[must_use]
pub fn fallback_items() -> Vec<CatalogItem> {
    normalize_list(fallback_results())
}

/// The hard-coded hero record served when every fetch stage fails.
#[must_use]
pub fn fallback_featured() -> FeaturedItem {
    FeaturedItem {
        id: 66_732,
        title: String::from("Stranger Things"),
        overview: String::from(
            "When a young boy vanishes, a small town uncovers a mystery involving \
             secret experiments, terrifying supernatural forces, and one strange \
             little girl.",
        ),
        backdrop: Some(String::from(FALLBACK_HERO_BACKDROP)),
        rating: Rating::Tv14,
        year: 2016,
        duration: Some(String::from("51m")),
        genres: vec![
            String::from("Drama"),
            String::from("Fantasy"),
            String::from("Horror"),
        ],
    }
}
