//! Page 5 — Monitoring: metric dashboard, alerts, SLA table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use cortex_core::catalog::{MetricCategory, MetricCategoryKey, Trend};

use crate::app::AppState;
use crate::theme;
use crate::ui::{text, HitMap, HitTarget};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let monitoring = &app.catalog.monitoring;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(dashboard_height(app)),
            Constraint::Min(0),
        ])
        .split(area);

    text::render_hero(f, chunks[0], &monitoring.hero);
    f.render_widget(Paragraph::new(text::stats_line(&monitoring.stats)), chunks[1]);
    render_dashboard(f, chunks[2], app, hits);

    let mut lines: Vec<Line<'static>> = Vec::new();
    text::section(&mut lines, &monitoring.components);

    text::heading(&mut lines, "Alert Management", "");
    for alert in &monitoring.alerts {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", alert.level), theme::tag(alert.color)),
            Span::styled(format!("{:>3}  ", alert.count), theme::heading()),
            Span::styled(alert.description, theme::muted()),
        ]));
    }

    text::heading(&mut lines, "SLA Monitoring", "");
    lines.push(Line::from(Span::styled(
        format!("  {:<26}{:<10}{:<10}Status", "Metric", "Target", "Current"),
        theme::muted(),
    )));
    for sla in &monitoring.sla {
        let (status, style) = if sla.healthy {
            ("✓ Healthy", theme::positive())
        } else {
            ("✗ Breach", theme::negative())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<26}", sla.metric), theme::text()),
            Span::styled(format!("{:<10}", sla.target), theme::muted()),
            Span::styled(format!("{:<10}", sla.current), theme::accent()),
            Span::styled(status, style),
        ]));
    }

    text::render_body(f, chunks[3], lines, app.scroll_offset(), hits);
}

/// Rows for the dashboard: categories side by side, or stacked when compact.
fn dashboard_height(app: &AppState) -> u16 {
    let sizes = app.metrics.entries().map(|(_, c)| c.metrics.len() as u16 + 2);
    let body = if app.compact {
        sizes.sum::<u16>()
    } else {
        sizes.max().unwrap_or(0)
    };
    body + 2
}

/// Every category gets its own panel. The focused one is highlighted and
/// each panel is a click target that moves the focus.
fn render_dashboard(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let monitoring = &app.catalog.monitoring;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", monitoring.dashboard_title))
        .title_style(theme::heading())
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", monitoring.dashboard_subtitle),
            theme::muted(),
        )));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let categories: Vec<(MetricCategoryKey, &MetricCategory)> = app.metrics.entries().collect();
    let (direction, constraints): (Direction, Vec<Constraint>) = if app.compact {
        (
            Direction::Vertical,
            categories
                .iter()
                .map(|(_, c)| Constraint::Length(c.metrics.len() as u16 + 2))
                .collect(),
        )
    } else {
        (
            Direction::Horizontal,
            categories
                .iter()
                .map(|_| Constraint::Ratio(1, categories.len() as u32))
                .collect(),
        )
    };
    let panels = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(inner);

    for ((key, category), panel) in categories.into_iter().zip(panels.iter()) {
        render_category(f, *panel, category, app.metrics.is_active(key));
        hits.push(*panel, HitTarget::MetricTab(key));
    }
}

fn render_category(f: &mut Frame, area: Rect, category: &MetricCategory, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(Span::styled(
            format!(" {} {} ", theme::icon(category.icon), category.category),
            theme::panel_title(focused),
        ));
    let width = block.inner(area).width as usize;

    let palette = theme::palette();
    let rows: Vec<Line> = category
        .metrics
        .iter()
        .map(|m| {
            let value = format!("{} {}", m.value, trend_arrow(m.trend));
            let name_width = width.saturating_sub(value.chars().count() + 2);
            Line::from(vec![
                Span::styled(format!(" {} ", fit(m.name, name_width)), theme::text()),
                Span::styled(m.value, theme::tag(m.color)),
                Span::raw(" "),
                Span::styled(
                    trend_arrow(m.trend),
                    Style::default().fg(palette.trend_color(m.trend)),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(rows).block(block), area);
}

/// Pad or cut `name` to exactly `width` columns.
fn fit(name: &str, width: usize) -> String {
    let count = name.chars().count();
    if count <= width {
        format!("{name:<width$}")
    } else if width == 0 {
        String::new()
    } else {
        let cut: String = name.chars().take(width - 1).collect();
        format!("{cut}…")
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}
