//! Page 1 — Home: hero, primary links, headline stats, feature cards.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{button_row, text, HitMap, HitTarget};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let home = &app.catalog.home;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    text::render_hero(f, chunks[0], &home.hero);

    let buttons = home
        .primary_links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let style = if i == 0 { theme::selected() } else { theme::accent() };
            (
                Span::styled(format!(" {} → ", link.label), style),
                HitTarget::NavLink(link.page),
            )
        })
        .collect();
    button_row(f, chunks[1], buttons, hits);

    let mut lines: Vec<Line<'static>> = vec![text::stats_line(&home.stats)];
    text::section(&mut lines, &home.features);
    text::call_to_action(&mut lines, &home.cta);

    text::render_body(f, chunks[2], lines, app.scroll_offset(), hits);
}
