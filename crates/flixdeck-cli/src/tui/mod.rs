//! TUI module for the browse page.
//!
//! Uses `ratatui` + `crossterm` for rendering. The page is a hero pane
//! on top of one carousel row per configured heading; each region
//! fetches independently and swaps its loading placeholder for content
//! as results arrive.

mod browse;
/// Browse page state types.
pub mod state;
mod ui;

pub use browse::run_browse;
