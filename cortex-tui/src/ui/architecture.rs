//! Page 2 — Architecture: interactive component diagram with details panel.
//!
//! Nodes are placed on the canvas by their percentage coordinates. Hovering
//! shows a tooltip while nothing is selected; the details panel follows the
//! selection first, then the hover.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use cortex_core::catalog::{DiagramNode, Position};

use crate::app::AppState;
use crate::theme;
use crate::ui::{text, HitMap, HitTarget};

const MAX_NODE_WIDTH: u16 = 24;
const TOOLTIP_WIDTH: u16 = 34;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let arch = &app.catalog.architecture;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(65),
            Constraint::Min(0),
        ])
        .split(area);

    text::render_hero(f, chunks[0], &arch.hero);

    // Compact layout stacks the details under the canvas.
    let split = if app.compact {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(7)])
            .split(chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1])
    };

    render_canvas(f, split[0], app, hits);
    render_details(f, split[1], app);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut legend = vec![Span::styled("Legend: ", theme::muted())];
    for entry in &arch.legend {
        legend.push(Span::styled("■ ", theme::tag(entry.color)));
        legend.push(Span::styled(format!("{}   ", entry.label), theme::text()));
    }
    lines.push(Line::from(legend));
    text::section(&mut lines, &arch.layers);
    lines.push(Line::from(Span::styled("Explore", theme::heading())));
    for link in &arch.explore {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", link.page.index() + 1), theme::accent()),
            Span::styled(link.label, theme::accent_bold()),
            Span::styled(format!("  {}", link.description), theme::muted()),
        ]));
    }
    text::render_body(f, chunks[2], lines, app.scroll_offset(), hits);
}

/// Cell rect for a node box of `width` x `height` inside `canvas`.
pub fn node_rect(canvas: Rect, position: Position, width: u16, height: u16) -> Rect {
    let span_x = canvas.width.saturating_sub(width) as u32;
    let span_y = canvas.height.saturating_sub(height) as u32;
    let x = canvas.x + (span_x * position.x.min(100) as u32 / 100) as u16;
    let y = canvas.y + (span_y * position.y.min(100) as u32 / 100) as u16;
    Rect::new(x, y, width.min(canvas.width), height.min(canvas.height))
}

fn render_canvas(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let arch = &app.catalog.architecture;
    let badges = arch.badges.join(" · ");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", arch.diagram_title))
        .title_style(theme::heading())
        .title_bottom(Line::from(Span::styled(format!(" {badges} "), theme::muted())));
    let canvas = block.inner(area);
    f.render_widget(block, area);

    if canvas.width < 4 || canvas.height < 1 {
        return;
    }

    let width = (canvas.width * 2 / 5).clamp(4, MAX_NODE_WIDTH);
    let height = if canvas.height >= 12 { 3 } else { 1 };

    for (i, node) in app.diagram.nodes().iter().enumerate() {
        let rect = node_rect(canvas, node.position, width, height);
        render_node(f, rect, app, node);
        hits.push(rect, HitTarget::DiagramNode(i));
    }

    if let Some(node) = app.diagram.tooltip() {
        let anchor = node_rect(canvas, node.position, width, height);
        render_tooltip(f, canvas, anchor, node);
    }
}

fn render_node(f: &mut Frame, rect: Rect, app: &AppState, node: &DiagramNode) {
    let color = theme::palette().tag_color(node.color);
    let style = if app.diagram.is_selected(node.id) {
        theme::selected()
    } else if app.diagram.is_hovered(node.id) {
        Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(color)
    };
    let label = Line::from(format!("{} {}", theme::icon(node.icon), node.short_title()));

    if rect.height >= 3 {
        let block = Block::default().borders(Borders::ALL).border_style(style);
        let para = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, rect);
    } else {
        let para = Paragraph::new(label).style(style).alignment(Alignment::Center);
        f.render_widget(para, rect);
    }
}

/// Description popup under the hovered node, or above it near the bottom edge.
fn render_tooltip(f: &mut Frame, canvas: Rect, anchor: Rect, node: &DiagramNode) {
    let width = TOOLTIP_WIDTH.min(canvas.width);
    let height = 4.min(canvas.height);
    let bottom = canvas.y + canvas.height;
    let y = if anchor.y + anchor.height + height <= bottom {
        anchor.y + anchor.height
    } else {
        anchor.y.saturating_sub(height).max(canvas.y)
    };
    let x = anchor.x.min(canvas.x + canvas.width - width);
    let popup = Rect::new(x, y, width, height);

    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::tag(node.color))
        .title(Span::styled(format!(" {} ", node.title), theme::heading()));
    let para = Paragraph::new(Span::styled(node.description, theme::text()))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn render_details(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Component Details ")
        .title_style(theme::heading());

    let lines = match app.diagram.active_detail() {
        Some(node) => {
            let state = if app.diagram.is_selected(node.id) {
                Span::styled("selected · Enter to release", theme::accent())
            } else {
                Span::styled("preview · Enter to pin", theme::muted())
            };
            vec![
                Line::from(vec![
                    Span::styled(format!("{} ", theme::icon(node.icon)), theme::tag(node.color)),
                    Span::styled(node.title, theme::tag(node.color).add_modifier(Modifier::BOLD)),
                ]),
                Line::from(state),
                Line::from(""),
                Line::from(Span::styled(node.description, theme::text())),
                Line::from(""),
                Line::from(Span::styled("Details", theme::heading())),
                Line::from(Span::styled(node.details, theme::muted())),
            ]
        }
        None => vec![
            Line::from(Span::styled(
                "Select a component to see its details.",
                theme::muted(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "j/k or the mouse to move, Enter or click to select.",
                theme::muted(),
            )),
        ],
    };

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_rect_scales_percentages() {
        let canvas = Rect::new(10, 5, 110, 43);
        let r = node_rect(canvas, Position { x: 0, y: 0 }, 10, 3);
        assert_eq!((r.x, r.y), (10, 5));
        let r = node_rect(canvas, Position { x: 100, y: 100 }, 10, 3);
        assert_eq!((r.x + r.width, r.y + r.height), (120, 48));
        let r = node_rect(canvas, Position { x: 50, y: 50 }, 10, 3);
        assert_eq!((r.x, r.y), (60, 25));
    }

    #[test]
    fn node_rect_stays_inside_tiny_canvas() {
        let canvas = Rect::new(0, 0, 6, 1);
        let r = node_rect(canvas, Position { x: 55, y: 85 }, 24, 3);
        assert!(r.x + r.width <= 6);
        assert!(r.y + r.height <= 1);
    }
}
