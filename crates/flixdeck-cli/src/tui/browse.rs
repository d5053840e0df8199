//! Browse page TUI main loop.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use flixdeck_api::catalog::Catalog;
use flixdeck_api::tmdb::TmdbClient;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use super::state::{BrowseState, Focus, RegionUpdate};
use super::ui;

/// Runs the browse page TUI until the user quits.
///
/// Each page region fetches concurrently; results stream into the
/// event loop and replace the loading placeholders as they land.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub async fn run_browse(catalog: Arc<Catalog<TmdbClient>>, headings: Vec<String>) -> Result<()> {
    let state = BrowseState::new(headings);
    let rx = spawn_fetches(&catalog, &state);

    tokio::task::spawn_blocking(move || run_terminal(state, rx))
        .await
        .context("browse TUI task panicked")?
}

/// Spawns one fetch task per page region and returns the receiving end
/// of the update channel. The channel closes once every task is done.
fn spawn_fetches(
    catalog: &Arc<Catalog<TmdbClient>>,
    state: &BrowseState,
) -> mpsc::UnboundedReceiver<RegionUpdate> {
    let (tx, rx) = mpsc::unbounded_channel();

    let hero_catalog = Arc::clone(catalog);
    let hero_tx = tx.clone();
    tokio::spawn(async move {
        let result = hero_catalog.featured_content().await;
        let _ = hero_tx.send(RegionUpdate::Hero(result));
    });

    for (index, row) in state.rows.iter().enumerate() {
        let row_catalog = Arc::clone(catalog);
        let row_tx = tx.clone();
        let query = row.query;
        tokio::spawn(async move {
            let result = row_catalog.row(query).await;
            let _ = row_tx.send(RegionUpdate::Row { index, result });
        });
    }

    rx
}

/// Sets up the terminal, runs the event loop, and restores the
/// terminal state.
fn run_terminal(mut state: BrowseState, rx: mpsc::UnboundedReceiver<RegionUpdate>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut state, rx);

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result
}

/// Main event loop.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut BrowseState,
    mut rx: mpsc::UnboundedReceiver<RegionUpdate>,
) -> Result<()> {
    loop {
        drain_updates(state, &mut rx);

        terminal
            .draw(|frame| ui::draw(frame, state))
            .context("failed to draw TUI")?;

        if event::poll(std::time::Duration::from_millis(100)).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
            && handle_input(state, key.code, key.modifiers)
        {
            return Ok(());
        }
    }
}

/// Applies every fetch result that arrived since the last tick. Once
/// all fetch tasks are gone, regions still loading get their terminal
/// fallback treatment.
fn drain_updates(state: &mut BrowseState, rx: &mut mpsc::UnboundedReceiver<RegionUpdate>) {
    loop {
        match rx.try_recv() {
            Ok(update) => state.apply_update(update),
            Err(mpsc::error::TryRecvError::Empty) => return,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                state.finish_loading();
                return;
            }
        }
    }
}

/// Handles key input. Returns `true` to exit the loop.
fn handle_input(state: &mut BrowseState, key: KeyCode, modifiers: KeyModifiers) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => state.focus_prev(),
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(row) = state.focused_row() {
                row.scroll_prev();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(row) = state.focused_row() {
                row.scroll_next();
            }
        }
        KeyCode::Enter => match state.focus {
            Focus::Hero => state.hero.play(),
            Focus::Row(_) => {
                if let Some(row) = state.focused_row() {
                    row.activate();
                }
            }
        },
        KeyCode::Char('p') if state.focus == Focus::Hero => state.hero.play(),
        KeyCode::Char('i') if state.focus == Focus::Hero => state.hero.more_info(),
        _ => {}
    }
    false
}
