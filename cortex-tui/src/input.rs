//! Input dispatch — overlays → drawer → global keys → page-specific handlers.
//!
//! Mouse events are resolved against the hit map recorded by the last frame:
//! pointer movement drives diagram hover, a left click selects or activates.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use cortex_core::Page;

use crate::app::{AppState, Overlay};
use crate::ui::HitTarget;

const PAGE_SCROLL: i32 = 10;
const WHEEL_SCROLL: i32 = 3;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. An open drawer is modal.
    if app.drawer_active() {
        handle_drawer_key(app, key);
        return;
    }

    // 3. Global keys (always available).
    if let Some(page) = page_for_digit(key.code) {
        app.navigate(page);
        return;
    }
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_page();
            } else {
                app.next_page();
            }
            return;
        }
        KeyCode::BackTab => {
            app.prev_page();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('m') => {
            if app.compact {
                app.toggle_drawer();
            } else {
                app.set_status("All pages are in the top bar; the menu appears in narrow terminals");
            }
            return;
        }
        KeyCode::PageDown => {
            app.scroll_by(PAGE_SCROLL);
            return;
        }
        KeyCode::PageUp => {
            app.scroll_by(-PAGE_SCROLL);
            return;
        }
        KeyCode::Home => {
            app.scroll_to_top();
            return;
        }
        _ => {}
    }

    // 4. Page-specific keys.
    match app.current_page() {
        Page::Architecture => handle_architecture_key(app, key),
        Page::CiCd => handle_cicd_key(app, key),
        Page::Monitoring => handle_monitoring_key(app, key),
        Page::Implementation => handle_implementation_key(app, key),
        Page::Home | Page::Security => handle_scroll_key(app, key),
    }
}

fn page_for_digit(code: KeyCode) -> Option<Page> {
    match code {
        KeyCode::Char(c @ '1'..='6') => Page::from_index(c as usize - '1' as usize),
        _ => None,
    }
}

fn handle_drawer_key(app: &mut AppState, key: KeyEvent) {
    if let Some(page) = page_for_digit(key.code) {
        app.navigate(page);
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => app.nav.drawer_mut().close(),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('j') | KeyCode::Down => app.move_drawer_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_drawer_cursor(-1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(page) = Page::from_index(app.drawer_cursor) {
                app.navigate(page);
            }
        }
        _ => {}
    }
}

fn handle_scroll_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-1),
        _ => {}
    }
}

fn handle_architecture_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
            app.move_node_cursor(1)
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
            app.move_node_cursor(-1)
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.select_node_at_cursor(),
        KeyCode::Esc => {
            app.diagram.clear();
            app.pointer_node = None;
        }
        _ => {}
    }
}

fn handle_cicd_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_stage_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_stage_cursor(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_stage_at_cursor(),
        KeyCode::Esc => app.stages.collapse(),
        _ => {}
    }
}

fn handle_monitoring_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.metrics.next(),
        KeyCode::Char('h') | KeyCode::Left => app.metrics.prev(),
        _ => handle_scroll_key(app, key),
    }
}

fn handle_implementation_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => {
            app.examples.next();
            app.scroll_to_top();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.examples.prev();
            app.scroll_to_top();
        }
        KeyCode::Char('c') | KeyCode::Char('y') => app.copy_active_example(Instant::now()),
        _ => handle_scroll_key(app, key),
    }
}

/// Handle a mouse event against the last frame's hit map.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    if app.overlay != Overlay::None {
        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            app.overlay = Overlay::None;
        }
        return;
    }

    let target = app.hit_map.target_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => pointer_moved(app, target),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = target {
                click(app, target);
            }
        }
        MouseEventKind::ScrollDown if !app.drawer_active() => app.scroll_by(WHEEL_SCROLL),
        MouseEventKind::ScrollUp if !app.drawer_active() => app.scroll_by(-WHEEL_SCROLL),
        _ => {}
    }
}

/// Translate pointer position into enter/leave events for diagram nodes.
fn pointer_moved(app: &mut AppState, target: Option<HitTarget>) {
    let under = match target {
        Some(HitTarget::DiagramNode(i)) => app.diagram.nodes().get(i).map(|n| n.id),
        _ => None,
    };
    if under == app.pointer_node {
        return;
    }
    if let Some(left) = app.pointer_node {
        app.diagram.unhover(left);
    }
    if let Some(entered) = under {
        app.diagram.hover(entered);
    }
    app.pointer_node = under;
}

fn click(app: &mut AppState, target: HitTarget) {
    match target {
        HitTarget::NavLink(page) | HitTarget::DrawerLink(page) => app.navigate(page),
        HitTarget::MenuButton => app.toggle_drawer(),
        HitTarget::DrawerClose => app.nav.drawer_mut().close(),
        HitTarget::Backdrop => app.nav.drawer_mut().dismiss_backdrop(),
        HitTarget::DrawerPanel => {}
        HitTarget::DiagramNode(i) => {
            if let Some(id) = app.diagram.nodes().get(i).map(|n| n.id) {
                app.node_cursor = i;
                app.diagram.select(id);
            }
        }
        HitTarget::Stage(i) => {
            app.stage_cursor = i;
            app.stages.toggle(i);
        }
        HitTarget::ExampleTab(key) => {
            if !app.examples.is_active(key) {
                app.scroll_to_top();
            }
            app.examples.set_active_tab(key);
        }
        HitTarget::CopyButton => app.copy_active_example(Instant::now()),
        HitTarget::MetricTab(key) => app.metrics.set_active_tab(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_core::{Catalog, SiteConfig};
    use crossterm::event::KeyEventState;

    fn app() -> AppState {
        let mut config = SiteConfig::default();
        config.ui.welcome = false;
        AppState::new(Catalog::builtin(), &config).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn digits_navigate() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.current_page(), Page::CiCd);
        handle_key(&mut app, press(KeyCode::Char('7')));
        assert_eq!(app.current_page(), Page::CiCd);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn welcome_swallows_first_key() {
        let mut app = app();
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn help_toggles() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.current_page(), Page::Home);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn menu_key_ignored_in_wide_layout() {
        let mut app = app();
        app.set_terminal_width(200);
        handle_key(&mut app, press(KeyCode::Char('m')));
        assert!(!app.nav.drawer().is_open());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn drawer_enter_navigates_and_closes() {
        let mut app = app();
        app.set_terminal_width(60);
        handle_key(&mut app, press(KeyCode::Char('m')));
        assert!(app.drawer_active());
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.current_page(), Page::Security);
        assert!(!app.nav.drawer().is_open());
    }
}
