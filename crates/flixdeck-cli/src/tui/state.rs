//! Browse page state management.
//!
//! All scroll and visibility arithmetic lives here, in abstract
//! horizontal units, so the carousel contract stays exact regardless
//! of terminal geometry.

use flixdeck_api::catalog::{CatalogItem, DataOrigin, FeaturedItem, RowQuery, Sourced};

/// Horizontal units one navigation step moves the strip.
pub const SCROLL_STEP: u32 = 400;

/// Horizontal units one card occupies in the strip.
pub const CARD_SPAN: u32 = 200;

/// Default viewport width in units, before the first draw reports the
/// real terminal geometry.
const DEFAULT_VIEWPORT: u32 = 800;

/// Content of a carousel row region.
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    /// Fetch in flight; the row shows a textual placeholder.
    Loading,
    /// Items ready for display.
    Ready(Vec<CatalogItem>),
}

/// State for one carousel row.
#[derive(Debug)]
pub struct RowState {
    /// Authored heading text (re-rendered above the strip).
    pub heading: String,
    /// Catalog query selected by the heading.
    pub query: RowQuery,
    /// Current content.
    pub content: RowContent,
    /// Origin of the delivered payload, once it arrived.
    pub origin: Option<DataOrigin>,
    /// Scroll position of the strip, in units from the start.
    scroll: u32,
    /// Visible strip width, in units.
    viewport: u32,
}

impl RowState {
    /// Creates a loading row for an authored heading.
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        let heading = heading.into();
        let query = RowQuery::from_heading(&heading);
        Self {
            heading,
            query,
            content: RowContent::Loading,
            origin: None,
            scroll: 0,
            viewport: DEFAULT_VIEWPORT,
        }
    }

    /// Replaces the loading placeholder with delivered items.
    pub fn set_items(&mut self, result: Sourced<Vec<CatalogItem>>) {
        self.content = RowContent::Ready(result.data);
        self.origin = Some(result.origin);
        self.clamp_scroll();
    }

    /// Records the viewport width reported by the last draw.
    pub fn set_viewport(&mut self, units: u32) {
        self.viewport = units.max(CARD_SPAN);
        self.clamp_scroll();
    }

    /// Items currently held by the row (empty while loading).
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        match &self.content {
            RowContent::Loading => &[],
            RowContent::Ready(items) => items,
        }
    }

    /// Total strip width in units.
    fn strip_width(&self) -> u32 {
        let count = u32::try_from(self.items().len()).unwrap_or(u32::MAX);
        count.saturating_mul(CARD_SPAN)
    }

    /// Maximum scroll position.
    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.strip_width().saturating_sub(self.viewport)
    }

    /// Current scroll position in units.
    #[must_use]
    pub const fn scroll(&self) -> u32 {
        self.scroll
    }

    /// Moves the strip one step towards the end, clamped at the end.
    pub fn scroll_next(&mut self) {
        self.scroll = self.scroll.saturating_add(SCROLL_STEP).min(self.max_scroll());
    }

    /// Moves the strip one step towards the start, clamped at the start.
    pub fn scroll_prev(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }

    /// Whether the previous-control is visible. Fades out at the start.
    #[must_use]
    pub const fn prev_visible(&self) -> bool {
        self.scroll > 0
    }

    /// Whether the next-control is visible. Fades out at the end.
    #[must_use]
    pub fn next_visible(&self) -> bool {
        self.scroll < self.max_scroll()
    }

    /// Index of the first card in view.
    #[must_use]
    pub fn first_visible(&self) -> usize {
        usize::try_from(self.scroll / CARD_SPAN).unwrap_or(usize::MAX)
    }

    /// Number of card slots the viewport can show.
    #[must_use]
    pub fn visible_slots(&self) -> usize {
        usize::try_from(self.viewport / CARD_SPAN).unwrap_or(usize::MAX).max(1)
    }

    /// The card the cursor rests on (first card in view).
    #[must_use]
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.items().get(self.first_visible())
    }

    /// Card click handler. Extension point: identifies the clicked
    /// item; no navigation is implemented.
    pub fn activate(&self) {
        if let Some(item) = self.selected_item() {
            tracing::info!(id = item.id, title = %item.title, "card clicked");
        }
    }

    /// Keeps the scroll position valid after content or geometry changes.
    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

/// Content of the hero region.
#[derive(Debug, Clone, PartialEq)]
pub enum HeroContent {
    /// Fetch in flight; the pane shows a textual placeholder.
    Loading,
    /// Featured item ready for display.
    Ready(FeaturedItem),
    /// The pane's own hard-coded fallback, used when even the degraded
    /// fetch path failed to deliver.
    Fallback,
}

/// One ordered piece of the hero pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroSegment {
    /// Background image, always first when present.
    Backdrop(String),
    /// Title line.
    Title(String),
    /// Overview text.
    Overview(String),
    /// Rating / year / duration line.
    Metadata {
        /// Content rating label.
        rating: String,
        /// Release year.
        year: String,
        /// Duration label.
        duration: String,
    },
    /// Genre tags.
    Genres(Vec<String>),
    /// Play / More Info action buttons.
    Buttons,
}

/// State for the hero region.
#[derive(Debug)]
pub struct HeroState {
    /// Current content.
    pub content: HeroContent,
    /// Origin of the delivered payload, once it arrived.
    pub origin: Option<DataOrigin>,
}

impl HeroState {
    /// Creates a loading hero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: HeroContent::Loading,
            origin: None,
        }
    }

    /// Replaces the loading placeholder with the featured item.
    pub fn set_featured(&mut self, result: Sourced<FeaturedItem>) {
        self.content = HeroContent::Ready(result.data);
        self.origin = Some(result.origin);
    }

    /// Switches to the pane's own static fallback. Runs when the fetch
    /// path failed to deliver anything at all.
    pub fn fail(&mut self) {
        self.content = HeroContent::Fallback;
        self.origin = None;
    }

    /// Ordered render segments for the pane. The backdrop, when
    /// present, comes before everything else.
    #[must_use]
    pub fn segments(&self) -> Vec<HeroSegment> {
        match &self.content {
            HeroContent::Loading => Vec::new(),
            HeroContent::Ready(item) => Self::item_segments(item),
            HeroContent::Fallback => Self::fallback_segments(),
        }
    }

    /// Segments for a delivered featured item, with literal defaults
    /// for absent metadata.
    fn item_segments(item: &FeaturedItem) -> Vec<HeroSegment> {
        let mut segments = Vec::with_capacity(6);
        if let Some(backdrop) = &item.backdrop {
            segments.push(HeroSegment::Backdrop(backdrop.clone()));
        }
        segments.push(HeroSegment::Title(item.title.clone()));
        segments.push(HeroSegment::Overview(item.overview.clone()));
        segments.push(HeroSegment::Metadata {
            rating: item.rating.to_string(),
            year: item.year.to_string(),
            duration: item
                .duration
                .clone()
                .unwrap_or_else(|| String::from("51m")),
        });
        if !item.genres.is_empty() {
            segments.push(HeroSegment::Genres(item.genres.clone()));
        }
        segments.push(HeroSegment::Buttons);
        segments
    }

    /// The fully hard-coded fallback markup. No backdrop: this path
    /// renders text content only.
    fn fallback_segments() -> Vec<HeroSegment> {
        vec![
            HeroSegment::Title(String::from("Stranger Things")),
            HeroSegment::Overview(String::from(
                "When a young boy vanishes, a small town uncovers a mystery involving \
                 secret experiments, terrifying supernatural forces, and one strange \
                 little girl.",
            )),
            HeroSegment::Metadata {
                rating: String::from("TV-14"),
                year: String::from("2016"),
                duration: String::from("51m"),
            },
            HeroSegment::Genres(vec![
                String::from("Drama"),
                String::from("Fantasy"),
                String::from("Horror"),
            ]),
            HeroSegment::Buttons,
        ]
    }

    /// Play button handler. Extension point: logs only.
    pub fn play(&self) {
        tracing::info!(title = %self.title(), "Play button clicked");
    }

    /// More Info button handler. Extension point: logs only.
    pub fn more_info(&self) {
        tracing::info!(title = %self.title(), "More Info button clicked");
    }

    /// Title of the displayed content.
    fn title(&self) -> &str {
        match &self.content {
            HeroContent::Loading => "(loading)",
            HeroContent::Ready(item) => &item.title,
            HeroContent::Fallback => "Stranger Things",
        }
    }
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which region has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The hero pane.
    Hero,
    /// A carousel row, by index.
    Row(usize),
}

/// A fetch result delivered to the page.
#[derive(Debug)]
pub enum RegionUpdate {
    /// Featured content for the hero region.
    Hero(Sourced<FeaturedItem>),
    /// Items for a carousel row.
    Row {
        /// Row index in page order.
        index: usize,
        /// Delivered payload.
        result: Sourced<Vec<CatalogItem>>,
    },
}

/// State for the whole browse page.
#[derive(Debug)]
pub struct BrowseState {
    /// Hero region.
    pub hero: HeroState,
    /// Carousel rows in page order.
    pub rows: Vec<RowState>,
    /// Focused region.
    pub focus: Focus,
}

impl BrowseState {
    /// Creates a page with a loading hero and one loading row per
    /// authored heading.
    #[must_use]
    pub fn new(headings: Vec<String>) -> Self {
        Self {
            hero: HeroState::new(),
            rows: headings.into_iter().map(RowState::new).collect(),
            focus: Focus::Hero,
        }
    }

    /// Applies a delivered fetch result to its region.
    pub fn apply_update(&mut self, update: RegionUpdate) {
        match update {
            RegionUpdate::Hero(result) => self.hero.set_featured(result),
            RegionUpdate::Row { index, result } => {
                if let Some(row) = self.rows.get_mut(index) {
                    row.set_items(result);
                }
            }
        }
    }

    /// Marks fetching finished. Any region still loading at this point
    /// got nothing from its task; the hero swaps to its own static
    /// fallback rather than sit on a placeholder forever.
    pub fn finish_loading(&mut self) {
        if self.hero.content == HeroContent::Loading {
            self.hero.fail();
        }
    }

    /// Moves focus to the next region (hero, then rows in order).
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Hero if self.rows.is_empty() => Focus::Hero,
            Focus::Hero => Focus::Row(0),
            Focus::Row(i) if i.saturating_add(1) < self.rows.len() => {
                Focus::Row(i.saturating_add(1))
            }
            Focus::Row(i) => Focus::Row(i),
        };
    }

    /// Moves focus to the previous region.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Hero | Focus::Row(0) => Focus::Hero,
            Focus::Row(i) => Focus::Row(i.saturating_sub(1)),
        };
    }

    /// The focused row, if a row has focus.
    pub fn focused_row(&mut self) -> Option<&mut RowState> {
        match self.focus {
            Focus::Hero => None,
            Focus::Row(i) => self.rows.get_mut(i),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use flixdeck_api::catalog::Rating;

    use super::*;

    fn item(id: u64, title: &str) -> CatalogItem {
        CatalogItem {
            id,
            title: String::from(title),
            image: String::from("https://image.tmdb.org/t/p/w500/p.jpg"),
            backdrop: None,
            rating: Rating::Tv14,
            year: 2020,
            overview: String::new(),
            genre_ids: Vec::new(),
        }
    }

    fn ready_row(count: usize) -> RowState {
        let items: Vec<CatalogItem> = (0..count)
            .map(|i| item(u64::try_from(i).unwrap(), &format!("Item {i}")))
            .collect();
        let mut row = RowState::new("Trending Now");
        row.set_items(Sourced::live(items));
        row
    }

    fn featured(backdrop: Option<&str>) -> FeaturedItem {
        FeaturedItem {
            id: 66_732,
            title: String::from("Stranger Things"),
            overview: String::from("Overview."),
            backdrop: backdrop.map(String::from),
            rating: Rating::TvMa,
            year: 2016,
            duration: Some(String::from("51m")),
            genres: vec![String::from("Drama")],
        }
    }

    #[test]
    fn test_heading_selects_query() {
        // Arrange & Act & Assert
        assert_eq!(RowState::new("Trending Now").query, RowQuery::TrendingTv);
        assert_eq!(RowState::new("TRENDING NOW").query, RowQuery::TrendingTv);
        assert_eq!(
            RowState::new("Something Else").query,
            RowQuery::PopularMovies
        );
    }

    #[test]
    fn test_row_starts_loading() {
        // Arrange & Act
        let row = RowState::new("Movies");

        // Assert
        assert_eq!(row.content, RowContent::Loading);
        assert!(row.items().is_empty());
        assert!(row.origin.is_none());
    }

    #[test]
    fn test_scroll_next_moves_exactly_one_step() {
        // Arrange - 10 cards (2000 units) in an 800-unit viewport
        let mut row = ready_row(10);

        // Act
        row.scroll_next();

        // Assert
        assert_eq!(row.scroll(), SCROLL_STEP);

        // Act
        row.scroll_next();

        // Assert
        assert_eq!(row.scroll(), SCROLL_STEP * 2);
    }

    #[test]
    fn test_scroll_prev_moves_exactly_one_step() {
        // Arrange
        let mut row = ready_row(10);
        row.scroll_next();
        row.scroll_next();

        // Act
        row.scroll_prev();

        // Assert
        assert_eq!(row.scroll(), SCROLL_STEP);
    }

    #[test]
    fn test_scroll_clamps_at_extremes() {
        // Arrange - 10 cards: max_scroll = 2000 - 800 = 1200
        let mut row = ready_row(10);

        // Act - overscroll in both directions
        for _ in 0..10 {
            row.scroll_next();
        }
        let at_end = row.scroll();
        for _ in 0..10 {
            row.scroll_prev();
        }
        let at_start = row.scroll();

        // Assert
        assert_eq!(at_end, row.max_scroll());
        assert_eq!(at_start, 0);
    }

    #[test]
    fn test_nav_controls_fade_at_extremes() {
        // Arrange
        let mut row = ready_row(10);

        // Assert - at the start only next is visible
        assert!(!row.prev_visible());
        assert!(row.next_visible());

        // Act - scroll to the end
        for _ in 0..10 {
            row.scroll_next();
        }

        // Assert - at the end only prev is visible
        assert!(row.prev_visible());
        assert!(!row.next_visible());
    }

    #[test]
    fn test_nav_controls_hidden_when_strip_fits_viewport() {
        // Arrange - 3 cards (600 units) fit the 800-unit viewport
        let row = ready_row(3);

        // Assert
        assert!(!row.prev_visible());
        assert!(!row.next_visible());
    }

    #[test]
    fn test_viewport_change_reclamps_scroll() {
        // Arrange
        let mut row = ready_row(10);
        for _ in 0..10 {
            row.scroll_next();
        }
        assert_eq!(row.scroll(), 1200);

        // Act - widen the viewport so less scrolling is possible
        row.set_viewport(1800);

        // Assert
        assert_eq!(row.scroll(), row.max_scroll());
        assert_eq!(row.max_scroll(), 200);
    }

    #[test]
    fn test_selected_item_follows_scroll() {
        // Arrange
        let mut row = ready_row(10);

        // Assert
        assert_eq!(row.selected_item().unwrap().title, "Item 0");

        // Act - one step is two card spans
        row.scroll_next();

        // Assert
        assert_eq!(row.selected_item().unwrap().title, "Item 2");
    }

    #[test]
    fn test_hero_segments_backdrop_comes_first() {
        // Arrange
        let mut hero = HeroState::new();
        hero.set_featured(Sourced::live(featured(Some(
            "https://image.tmdb.org/t/p/w1280/b.jpg",
        ))));

        // Act
        let segments = hero.segments();

        // Assert
        assert_eq!(
            segments[0],
            HeroSegment::Backdrop(String::from("https://image.tmdb.org/t/p/w1280/b.jpg"))
        );
        assert_eq!(
            segments[1],
            HeroSegment::Title(String::from("Stranger Things"))
        );
    }

    #[test]
    fn test_hero_segments_no_backdrop_inserts_none() {
        // Arrange
        let mut hero = HeroState::new();
        hero.set_featured(Sourced::live(featured(None)));

        // Act
        let segments = hero.segments();

        // Assert
        assert!(
            !segments
                .iter()
                .any(|s| matches!(s, HeroSegment::Backdrop(_)))
        );
        assert_eq!(
            segments[0],
            HeroSegment::Title(String::from("Stranger Things"))
        );
    }

    #[test]
    fn test_hero_metadata_defaults_missing_duration() {
        // Arrange
        let mut no_duration = featured(None);
        no_duration.duration = None;
        let mut hero = HeroState::new();
        hero.set_featured(Sourced::live(no_duration));

        // Act
        let segments = hero.segments();

        // Assert
        assert!(segments.contains(&HeroSegment::Metadata {
            rating: String::from("TV-MA"),
            year: String::from("2016"),
            duration: String::from("51m"),
        }));
    }

    #[test]
    fn test_hero_fallback_segments_are_hard_coded() {
        // Arrange
        let mut hero = HeroState::new();

        // Act
        hero.fail();
        let segments = hero.segments();

        // Assert
        assert_eq!(
            segments[0],
            HeroSegment::Title(String::from("Stranger Things"))
        );
        assert!(segments.contains(&HeroSegment::Buttons));
        assert!(
            !segments
                .iter()
                .any(|s| matches!(s, HeroSegment::Backdrop(_)))
        );
    }

    #[test]
    fn test_apply_update_routes_to_regions() {
        // Arrange
        let mut state = BrowseState::new(vec![
            String::from("Popular on Netflix"),
            String::from("Trending Now"),
        ]);

        // Act
        state.apply_update(RegionUpdate::Row {
            index: 1,
            result: Sourced::live(vec![item(1, "Delivered")]),
        });
        state.apply_update(RegionUpdate::Hero(Sourced::live(featured(None))));

        // Assert
        assert_eq!(state.rows[0].content, RowContent::Loading);
        assert_eq!(state.rows[1].items().len(), 1);
        assert!(matches!(state.hero.content, HeroContent::Ready(_)));
    }

    #[test]
    fn test_finish_loading_fails_stuck_hero_only() {
        // Arrange
        let mut state = BrowseState::new(vec![String::from("Movies")]);
        state.apply_update(RegionUpdate::Hero(Sourced::live(featured(None))));

        // Act
        state.finish_loading();

        // Assert - a delivered hero is left alone
        assert!(matches!(state.hero.content, HeroContent::Ready(_)));

        // Arrange - a hero that never got an update
        let mut stuck = BrowseState::new(vec![String::from("Movies")]);

        // Act
        stuck.finish_loading();

        // Assert
        assert_eq!(stuck.hero.content, HeroContent::Fallback);
    }

    #[test]
    fn test_focus_cycle() {
        // Arrange
        let mut state = BrowseState::new(vec![String::from("A"), String::from("B")]);

        // Act & Assert
        assert_eq!(state.focus, Focus::Hero);
        state.focus_next();
        assert_eq!(state.focus, Focus::Row(0));
        state.focus_next();
        assert_eq!(state.focus, Focus::Row(1));
        state.focus_next(); // stays on the last row
        assert_eq!(state.focus, Focus::Row(1));
        state.focus_prev();
        assert_eq!(state.focus, Focus::Row(0));
        state.focus_prev();
        assert_eq!(state.focus, Focus::Hero);
        state.focus_prev(); // stays on the hero
        assert_eq!(state.focus, Focus::Hero);
    }
}
