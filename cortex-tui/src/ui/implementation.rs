//! Page 6 — Implementation: tabbed code examples with copy-to-clipboard.

use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::{button_row, text, HitMap, HitTarget};

const COPY_LABEL: &str = " ⧉ Copy ";
const COPIED_LABEL: &str = " ✓ Copied! ";

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let implementation = &app.catalog.implementation;
    let footer_rows = implementation.features.cards.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(footer_rows),
        ])
        .split(area);

    text::render_hero(f, chunks[0], &implementation.hero);

    let tabs = app
        .examples
        .entries()
        .map(|(key, example)| {
            let style = if app.examples.is_active(key) {
                theme::selected()
            } else {
                theme::muted()
            };
            (
                Span::styled(
                    format!(" {} {} ", theme::icon(example.icon), example.title),
                    style,
                ),
                HitTarget::ExampleTab(key),
            )
        })
        .collect();
    button_row(f, chunks[1], tabs, hits);

    render_header(f, chunks[2], app, hits);
    render_code(f, chunks[3], app, hits);

    let mut lines: Vec<Line<'static>> = vec![Line::from(Span::styled(
        implementation.features.title,
        theme::heading(),
    ))];
    for card in &implementation.features.cards {
        let icon = card.icon.map(theme::icon).unwrap_or("•");
        lines.push(Line::from(vec![
            Span::styled(format!("  {icon} "), theme::accent()),
            Span::styled(card.title, theme::text()),
            Span::styled(format!(": {}", card.description), theme::muted()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", implementation.download.title), theme::heading()),
        Span::styled(
            format!("[ {} ]", implementation.download_label),
            theme::accent(),
        ),
    ]));
    f.render_widget(Paragraph::new(lines), chunks[4]);
}

/// Example title and description, with the copy button on the right.
fn render_header(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let example = app.examples.active_content();
    let copied = app.copy.is_copied(Instant::now());
    let (label, style) = if copied {
        (COPIED_LABEL, theme::positive())
    } else {
        (COPY_LABEL, theme::selected())
    };
    let button_width = Span::raw(label).width() as u16;

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(button_width + 1)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(example.title, theme::heading())),
        Line::from(Span::styled(example.description, theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), split[0]);

    let button = Rect::new(split[1].x + 1, split[1].y, button_width, 1).intersection(split[1]);
    button_row(f, button, vec![(Span::styled(label, style), HitTarget::CopyButton)], hits);
}

fn render_code(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let example = app.examples.active_content();
    let gutter = example.code.lines().count().to_string().len();
    let lines: Vec<Line> = example
        .code
        .lines()
        .enumerate()
        .map(|(i, line)| {
            Line::from(vec![
                Span::styled(format!("{:>gutter$} │ ", i + 1), theme::muted()),
                Span::styled(line, code_style(line)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", example.language))
        .title_style(theme::accent());
    let limit = text::scroll_limit(lines.len(), area.height.saturating_sub(2));
    hits.set_scroll_limit(limit);
    let para = Paragraph::new(lines)
        .block(block)
        .scroll((app.scroll_offset().min(limit), 0));
    f.render_widget(para, area);
}

/// Comments dim, keys bright, everything else plain.
fn code_style(line: &str) -> ratatui::style::Style {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        theme::muted()
    } else if trimmed.trim_start_matches("- ").contains(':') {
        theme::accent()
    } else {
        theme::text()
    }
}
