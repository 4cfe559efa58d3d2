//! Line builders shared by the page renderers.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use cortex_core::catalog::{CallToAction, Card, Hero, Section, Setting, Stat};

use crate::theme;
use crate::ui::HitMap;

/// Page title and lead paragraph.
pub fn render_hero(f: &mut Frame, area: Rect, hero: &Hero) {
    let lines = vec![
        Line::from(Span::styled(hero.title, theme::accent_bold())),
        Line::from(Span::styled(hero.subtitle, theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// Scrollable page body. The offset is capped so the last line stays on
/// screen.
pub fn render_body(
    f: &mut Frame,
    area: Rect,
    lines: Vec<Line<'static>>,
    scroll: u16,
    hits: &mut HitMap,
) {
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    let rows = para.line_count(area.width);
    let limit = scroll_limit(rows, area.height);
    hits.set_scroll_limit(limit);
    f.render_widget(para.scroll((scroll.min(limit), 0)), area);
}

/// Offset that brings the last of `rows` to the bottom of a `height`-row view.
pub fn scroll_limit(rows: usize, height: u16) -> u16 {
    let limit = rows.saturating_sub(height as usize);
    u16::try_from(limit).unwrap_or(u16::MAX)
}

pub fn stats_line(stats: &[Stat]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   │   ", theme::muted()));
        }
        spans.push(Span::styled(format!("{} ", theme::icon(stat.icon)), theme::neutral()));
        spans.push(Span::styled(stat.value, theme::accent_bold()));
        spans.push(Span::styled(format!(" {}", stat.name), theme::muted()));
    }
    Line::from(spans)
}

pub fn heading(lines: &mut Vec<Line<'static>>, title: &'static str, subtitle: &'static str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(title, theme::heading())));
    if !subtitle.is_empty() {
        lines.push(Line::from(Span::styled(subtitle, theme::muted())));
    }
    lines.push(Line::from(""));
}

pub fn card(lines: &mut Vec<Line<'static>>, card: &Card) {
    let style = card.color.map(theme::tag).unwrap_or_else(theme::accent);
    let mut title = Vec::new();
    if let Some(icon) = card.icon {
        title.push(Span::styled(format!("{} ", theme::icon(icon)), style));
    }
    title.push(Span::styled(card.title, style.add_modifier(ratatui::style::Modifier::BOLD)));
    lines.push(Line::from(title));
    if !card.description.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(card.description, theme::text()),
        ]));
    }
    for item in &card.items {
        lines.push(Line::from(vec![
            Span::styled("    • ", style),
            Span::styled(*item, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
}

pub fn section(lines: &mut Vec<Line<'static>>, section: &Section) {
    heading(lines, section.title, section.subtitle);
    for c in &section.cards {
        card(lines, c);
    }
}

pub fn settings(lines: &mut Vec<Line<'static>>, rows: &[Setting]) {
    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", row.label), theme::muted()),
            Span::styled(row.value, theme::tag(row.color)),
        ]));
    }
}

/// Closing banner. Links show the key that opens them.
pub fn call_to_action(lines: &mut Vec<Line<'static>>, cta: &CallToAction) {
    heading(lines, cta.title, cta.subtitle);
    for link in &cta.links {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", link.page.index() + 1), theme::accent()),
            Span::styled(link.label, theme::accent_bold()),
            Span::styled(format!("  {}", link.description), theme::muted()),
        ]));
    }
}
