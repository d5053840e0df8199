//! TUI rendering logic for the browse page.

use flixdeck_api::catalog::DataOrigin;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::state::{BrowseState, Focus, HeroContent, HeroSegment, RowContent, RowState};

/// Terminal columns one card occupies.
const CARD_COLS: u16 = 20;

/// Horizontal units per terminal column, used to map the drawn width
/// back into strip units.
const UNITS_PER_COL: u32 = 10;

/// Draws the browse page.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &mut BrowseState) {
    let mut constraints = vec![Constraint::Length(12)]; // hero
    constraints.extend(state.rows.iter().map(|_| Constraint::Length(7)));
    constraints.push(Constraint::Length(3)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    draw_hero(frame, chunks[0], state);
    let focus = state.focus;
    for (i, (row, area)) in state.rows.iter_mut().zip(chunks.iter().skip(1)).enumerate() {
        draw_row(frame, *area, row, focus == Focus::Row(i));
    }
    if let Some(footer_area) = chunks.last() {
        draw_footer(frame, *footer_area);
    }
}

/// Draws the hero pane from its ordered segments.
fn draw_hero(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let focused = state.focus == Focus::Hero;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Featured ");

    if state.hero.content == HeroContent::Loading {
        let loading = Paragraph::new("Loading featured content...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for segment in state.hero.segments() {
        match segment {
            HeroSegment::Backdrop(url) => {
                lines.push(Line::from(Span::styled(
                    url,
                    Style::default().fg(Color::DarkGray),
                )));
            }
            HeroSegment::Title(title) => {
                lines.push(Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            HeroSegment::Overview(overview) => {
                lines.push(Line::from(overview));
            }
            HeroSegment::Metadata {
                rating,
                year,
                duration,
            } => {
                lines.push(Line::from(Span::styled(
                    format!("{rating}  {year}  {duration}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
            HeroSegment::Genres(genres) => {
                lines.push(Line::from(Span::styled(
                    genres.join(" \u{b7} "),
                    Style::default().fg(Color::Gray),
                )));
            }
            HeroSegment::Buttons => {
                lines.push(Line::from(vec![
                    Span::styled(
                        " \u{25b6} Play ",
                        Style::default().fg(Color::Black).bg(Color::White),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        " \u{24d8} More Info ",
                        Style::default().fg(Color::White).bg(Color::DarkGray),
                    ),
                ]));
            }
        }
    }

    let hero = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(hero, area);
}

/// Draws one carousel row: heading, card strip, and nav controls.
#[allow(clippy::indexing_slicing)]
fn draw_row(frame: &mut Frame, area: Rect, row: &mut RowState, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut title = format!(" {} ", row.heading);
    if matches!(row.origin, Some(DataOrigin::Fallback { .. })) {
        title.push_str("(offline) ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if row.content == RowContent::Loading {
        let loading = Paragraph::new("Loading content...").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(loading, inner);
        return;
    }

    // Nav controls on either side of the strip, blank when faded out.
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CARD_COLS),
            Constraint::Length(3),
        ])
        .split(inner);

    row.set_viewport(u32::from(chunks[1].width).saturating_mul(UNITS_PER_COL));

    let prev = if row.prev_visible() { "\u{2039}" } else { " " };
    let next = if row.next_visible() { "\u{203a}" } else { " " };
    frame.render_widget(Paragraph::new(prev).centered(), chunks[0]);
    frame.render_widget(Paragraph::new(next).centered(), chunks[2]);

    draw_cards(frame, chunks[1], row, focused);
}

/// Draws the visible slice of a row's card strip.
fn draw_cards(frame: &mut Frame, area: Rect, row: &RowState, focused: bool) {
    let first = row.first_visible();
    let slots = row.visible_slots();

    let strip_end = area.x.saturating_add(area.width);
    let mut x = area.x;
    for (i, item) in row.items().iter().enumerate().skip(first).take(slots) {
        if x.saturating_add(CARD_COLS) > strip_end {
            break;
        }
        let card_area = Rect::new(x, area.y, CARD_COLS, area.height);

        let selected = focused && i == first;
        let style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let lines = vec![
            Line::from(Span::styled(item.title.clone(), style)),
            Line::from(Span::styled(
                format!("{} \u{b7} {}", item.rating, item.year),
                Style::default().fg(Color::Gray),
            )),
        ];
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
        frame.render_widget(card, card_area);
        x = x.saturating_add(CARD_COLS);
    }
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect) {
    let help_text = "Tab/\u{2191}\u{2193}: region  \u{2190}\u{2192}/h/l: scroll  Enter: open  p: play  i: more info  q: quit";
    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
