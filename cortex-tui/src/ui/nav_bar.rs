//! Top navigation bar and the compact-layout drawer.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use cortex_core::Page;

use crate::app::AppState;
use crate::theme;
use crate::ui::{button_row, HitMap, HitTarget};

const DRAWER_WIDTH: u16 = 30;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    let brand = Span::styled(format!(" ◆ {} ", app.catalog.brand), theme::accent_bold());
    let brand_width = brand.width() as u16;
    f.render_widget(Paragraph::new(Line::from(brand)), area);

    let rest = Rect::new(
        area.x + brand_width.min(area.width),
        area.y,
        area.width.saturating_sub(brand_width),
        area.height,
    );

    if app.compact {
        let label = if app.nav.drawer().is_open() { " ✕ Close " } else { " ☰ Menu " };
        let width = Span::raw(label).width() as u16;
        let x = (rest.x + rest.width).saturating_sub(width).max(rest.x);
        let button = Rect::new(x, rest.y, width.min(rest.width), 1);
        let buttons = vec![(Span::styled(label, theme::accent()), HitTarget::MenuButton)];
        button_row(f, button, buttons, hits);
        return;
    }

    let current = app.current_page();
    let links = Page::ALL
        .iter()
        .map(|&page| {
            let style = if page == current {
                theme::selected()
            } else {
                theme::muted()
            };
            (
                Span::styled(format!(" {} {} ", theme::icon(page.icon()), page.label()), style),
                HitTarget::NavLink(page),
            )
        })
        .collect();
    button_row(f, rest, links, hits);
}

/// Slide-over drawer on the right of `area`. Clicking anywhere else dismisses it.
pub fn render_drawer(f: &mut Frame, area: Rect, app: &AppState, hits: &mut HitMap) {
    hits.push(area, HitTarget::Backdrop);

    let width = DRAWER_WIDTH.min(area.width);
    let panel = Rect::new(area.x + area.width - width, area.y, width, area.height);
    f.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Navigation ")
        .title_style(theme::accent_bold());
    let inner = block.inner(panel);
    f.render_widget(block, panel);
    // Panel body swallows clicks between links.
    hits.push(panel, HitTarget::DrawerPanel);

    let close =
        Rect::new(panel.x + panel.width.saturating_sub(4), panel.y, 3, 1).intersection(panel);
    f.render_widget(Paragraph::new(Span::styled("[✕]", theme::negative())), close);
    hits.push(close, HitTarget::DrawerClose);

    let current = app.current_page();
    for (i, page) in Page::ALL.iter().copied().enumerate() {
        let y = inner.y + (i as u16) * 2;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let style = if i == app.drawer_cursor {
            theme::selected()
        } else if page == current {
            theme::accent_bold()
        } else {
            theme::text()
        };
        let marker = if page == current { "●" } else { " " };
        let pad = inner.width.saturating_sub(5) as usize;
        let line = Line::from(vec![
            Span::styled(format!(" {marker} {} ", theme::icon(page.icon())), style),
            Span::styled(format!("{:<pad$}", page.label()), style),
        ]);
        f.render_widget(Paragraph::new(line), row);
        hits.push(row, HitTarget::DrawerLink(page));
    }
}
