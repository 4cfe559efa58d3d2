//! Top-level UI layout — navigation bar, page frame, status bar, overlays.

pub mod architecture;
pub mod cicd;
pub mod hits;
pub mod home;
pub mod implementation;
pub mod monitoring;
pub mod nav_bar;
pub mod overlays;
pub mod security;
pub mod status_bar;
pub mod text;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use cortex_core::Page;

use crate::app::{AppState, Overlay};
use crate::theme;

pub use hits::{HitMap, HitTarget};

/// Draw the entire UI and return the clickable regions of this frame.
pub fn draw(f: &mut Frame, app: &AppState) -> HitMap {
    let mut hits = HitMap::default();

    // Split: 1-line nav bar + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let nav_area = chunks[0];
    let main_area = chunks[1];
    let status_area = chunks[2];

    nav_bar::render(f, nav_area, app, &mut hits);
    draw_page(f, main_area, app, &mut hits);
    status_bar::render(f, status_area, app);

    // The drawer covers the page, so its regions go on top.
    if app.drawer_active() {
        nav_bar::render_drawer(f, main_area, app, &mut hits);
    }

    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area, app),
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::None => {}
    }

    hits
}

/// Draw the current page inside its border.
fn draw_page(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let page = app.current_page();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", page.label(), page.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match page {
        Page::Home => home::render(f, inner, app, hits),
        Page::Architecture => architecture::render(f, inner, app, hits),
        Page::Security => security::render(f, inner, app, hits),
        Page::CiCd => cicd::render(f, inner, app, hits),
        Page::Monitoring => monitoring::render(f, inner, app, hits),
        Page::Implementation => implementation::render(f, inner, app, hits),
    }
}

/// Lay out `buttons` left to right on one row, two cells apart, registering
/// each as a hit region. Buttons that do not fit are dropped.
pub(crate) fn button_row(
    f: &mut Frame,
    area: Rect,
    buttons: Vec<(Span<'static>, HitTarget)>,
    hits: &mut HitMap,
) {
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);
    for (span, target) in buttons {
        let width = span.width() as u16;
        if x.saturating_add(width) > right {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);
        f.render_widget(Paragraph::new(Line::from(span)), rect);
        hits.push(rect, target);
        x = x.saturating_add(width + 2);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
