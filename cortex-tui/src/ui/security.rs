//! Page 3 — Security: defense layers, controls, compliance status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{text, HitMap};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let security = &app.catalog.security;
    let palette = theme::palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    text::render_hero(f, chunks[0], &security.hero);

    let mut lines: Vec<Line<'static>> = vec![text::stats_line(&security.stats)];
    text::section(&mut lines, &security.layers);
    text::section(&mut lines, &security.controls);

    text::heading(
        &mut lines,
        security.compliance_title,
        security.compliance_subtitle,
    );
    for framework in &security.compliance {
        let status_style =
            ratatui::style::Style::default().fg(palette.compliance_color(framework.status));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", framework.name), theme::heading()),
            Span::styled(format!("{:<13}", framework.status.label()), status_style),
            Span::styled(framework.description, theme::muted()),
        ]));
    }

    text::render_body(f, chunks[1], lines, app.scroll_offset(), hits);
}
