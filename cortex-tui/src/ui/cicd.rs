//! Page 4 — CI/CD: pipeline stage list with one expandable stage.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{text, HitMap, HitTarget};

/// Rows used by an expanded stage's detail panel.
const DETAIL_ROWS: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let cicd = &app.catalog.cicd;
    let expanded_rows = if app.stages.expanded().is_some() { DETAIL_ROWS } else { 0 };
    let pipeline_height = app.stages.len() as u16 + expanded_rows + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(pipeline_height),
            Constraint::Min(0),
        ])
        .split(area);

    text::render_hero(f, chunks[0], &cicd.hero);
    f.render_widget(Paragraph::new(text::stats_line(&cicd.stats)), chunks[1]);
    render_pipeline(f, chunks[2], app, hits);

    let mut lines: Vec<Line<'static>> = Vec::new();
    text::section(&mut lines, &cicd.strategies);
    text::heading(&mut lines, cicd.gitops_title, cicd.gitops_subtitle);
    for step in &cicd.gitops_steps {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", step.step), theme::accent_bold()),
            Span::styled(format!("{} ", theme::icon(step.icon)), theme::neutral()),
            Span::styled(step.title, theme::heading()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("       "),
            Span::styled(step.description, theme::muted()),
        ]));
    }
    text::heading(&mut lines, "Pipeline Configuration", "");
    text::settings(&mut lines, &cicd.pipeline_settings);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Quality Gates", theme::heading())));
    for gate in &cicd.quality_gates {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", theme::positive()),
            Span::styled(*gate, theme::text()),
        ]));
    }
    text::render_body(f, chunks[3], lines, app.scroll_offset(), hits);
}

fn render_pipeline(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let cicd = &app.catalog.cicd;
    let palette = theme::palette();
    let overall = app.stages.overall_status();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", cicd.pipeline_title))
        .title_style(theme::heading())
        .title_bottom(Line::from(vec![
            Span::styled(" pipeline: ", theme::muted()),
            Span::styled(
                overall.label(),
                Style::default().fg(palette.stage_color(overall)),
            ),
            Span::styled(format!(" · {} ", cicd.pipeline_subtitle), theme::muted()),
        ]));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    for (i, stage) in app.stages.stages().iter().enumerate() {
        if y >= bottom {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let status_style = Style::default().fg(palette.stage_color(stage.status));
        let cursor = if i == app.stage_cursor { "▶ " } else { "  " };
        let marker = if app.stages.is_expanded(i) { "▾" } else { "▸" };
        let name_style = if app.stages.is_expanded(i) {
            theme::accent_bold()
        } else {
            theme::text()
        };
        let line = Line::from(vec![
            Span::styled(cursor, theme::accent()),
            Span::styled(format!("{} ", theme::icon(stage.icon)), status_style),
            Span::styled(format!("{:<20}", stage.name), name_style),
            Span::styled(format!("{:<11}", stage.status.label()), status_style),
            Span::styled(format!("{:>6} ", stage.duration), theme::muted()),
            Span::styled(marker, theme::muted()),
        ]);
        f.render_widget(Paragraph::new(line), row);
        hits.push(row, HitTarget::Stage(i));
        y += 1;

        if app.stages.is_expanded(i) {
            let height = DETAIL_ROWS.min(bottom.saturating_sub(y));
            let detail = Rect::new(inner.x + 4, y, inner.width.saturating_sub(4), height);
            let lines = vec![
                Line::from(Span::styled(stage.description, theme::text())),
                Line::from(vec![
                    Span::styled("Status: ", theme::muted()),
                    Span::styled(stage.status.label(), status_style.add_modifier(Modifier::BOLD)),
                    Span::styled("   Duration: ", theme::muted()),
                    Span::styled(stage.duration, theme::text()),
                ]),
            ];
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), detail);
            y += height;
        }
    }
}
