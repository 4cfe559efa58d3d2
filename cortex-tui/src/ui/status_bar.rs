//! Bottom status bar — page hints, last status message, copy indicator.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cortex_core::Page;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(format!(" {}", hints(app)), theme::muted()));
    spans.push(Span::raw(" | "));

    if app.copy.is_copied(Instant::now()) {
        spans.push(Span::styled("✓ Copied ", theme::positive()));
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(app: &AppState) -> &'static str {
    if app.drawer_active() {
        return "j/k:Move Enter:Go Esc:Close";
    }
    match app.current_page() {
        Page::Architecture => "1-6:Pages j/k:Move Enter:Select Esc:Clear ?:Help q:Quit",
        Page::CiCd => "1-6:Pages j/k:Move Enter:Expand ?:Help q:Quit",
        Page::Monitoring => "1-6:Pages h/l:Focus j/k:Scroll ?:Help q:Quit",
        Page::Implementation => "1-6:Pages h/l:Tab c:Copy j/k:Scroll ?:Help q:Quit",
        Page::Home | Page::Security => "1-6:Pages Tab:Next j/k:Scroll ?:Help q:Quit",
    }
}
