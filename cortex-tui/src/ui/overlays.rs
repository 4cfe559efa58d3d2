//! Overlay widgets — welcome and keyboard help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" Welcome to {} ", app.catalog.brand))
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(app.catalog.home.hero.subtitle, theme::text())),
        Line::from(""),
        Line::from(Span::styled("Getting around:", theme::accent_bold())),
        Line::from(Span::styled("  1-6 or Tab    switch pages", theme::muted())),
        Line::from(Span::styled("  mouse         hover and click components", theme::muted())),
        Line::from(Span::styled("  m             menu in narrow terminals", theme::muted())),
        Line::from(Span::styled("  ?             all shortcuts", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Keyboard reference.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard Shortcuts [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "1-6", "Go to page by number");
    key(&mut lines, "Tab / Shift+Tab", "Next / previous page");
    key(&mut lines, "PgUp / PgDn / Home", "Scroll the page");
    key(&mut lines, "m", "Open or close the menu (narrow terminals)");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Architecture");
    key(&mut lines, "j / k", "Move between components");
    key(&mut lines, "Enter / click", "Select or release a component");
    key(&mut lines, "Esc", "Clear selection");
    lines.push(Line::from(""));

    section(&mut lines, "CI/CD");
    key(&mut lines, "j / k", "Move between stages");
    key(&mut lines, "Enter / click", "Expand or collapse a stage");
    lines.push(Line::from(""));

    section(&mut lines, "Monitoring");
    key(&mut lines, "h / l", "Focus previous / next metric panel");
    lines.push(Line::from(""));

    section(&mut lines, "Implementation");
    key(&mut lines, "h / l", "Previous / next code example");
    key(&mut lines, "c / y", "Copy the example to the clipboard");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
