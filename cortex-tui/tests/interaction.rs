//! Drives AppState with synthetic key and mouse events against real frames
//! rendered on a test backend.

use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use cortex_core::catalog::{ExampleKey, MetricCategoryKey};
use cortex_core::{Catalog, Page, SiteConfig};
use cortex_tui::app::{AppState, Overlay};
use cortex_tui::ui::{self, HitMap, HitTarget};
use cortex_tui::{handle_key, handle_mouse};

fn app() -> AppState {
    let mut config = SiteConfig::default();
    config.ui.welcome = false;
    AppState::new(Catalog::builtin(), &config).unwrap()
}

/// Render one frame at `width` x `height` and store its hit map.
fn frame(app: &mut AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    app.set_terminal_width(width);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut hits = HitMap::default();
    terminal.draw(|f| hits = ui::draw(f, app)).unwrap();
    app.hit_map = hits;
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(
        app,
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        },
    );
}

fn mouse(app: &mut AppState, kind: MouseEventKind, column: u16, row: u16) {
    handle_mouse(
        app,
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

fn click_target(app: &mut AppState, target: HitTarget) {
    let area = app
        .hit_map
        .area_of(target)
        .unwrap_or_else(|| panic!("{target:?} not on screen"));
    mouse(app, MouseEventKind::Down(MouseButton::Left), area.x, area.y);
}

#[test]
fn every_page_renders() {
    let mut app = app();
    for page in Page::ALL {
        app.navigate(page);
        let terminal = frame(&mut app, 140, 50);
        let text = screen_text(&terminal);
        assert!(text.contains(page.label()), "{page:?} frame lacks its title");
    }
}

#[test]
fn wide_layout_nav_links_navigate() {
    let mut app = app();
    frame(&mut app, 160, 50);
    assert!(app.hit_map.area_of(HitTarget::MenuButton).is_none());
    click_target(&mut app, HitTarget::NavLink(Page::Monitoring));
    assert_eq!(app.current_page(), Page::Monitoring);
}

#[test]
fn diagram_hover_and_click() {
    let mut app = app();
    app.navigate(Page::Architecture);
    frame(&mut app, 160, 50);

    let ingress = app.hit_map.area_of(HitTarget::DiagramNode(0)).unwrap();
    let storage = app.hit_map.area_of(HitTarget::DiagramNode(7)).unwrap();

    mouse(&mut app, MouseEventKind::Moved, ingress.x, ingress.y);
    assert_eq!(app.diagram.active_detail().map(|n| n.id), Some("ingress"));
    assert_eq!(app.diagram.tooltip().map(|n| n.id), Some("ingress"));

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), storage.x, storage.y);
    assert_eq!(app.diagram.active_detail().map(|n| n.id), Some("storage"));

    // Pointer now rests on storage, so hover follows it.
    mouse(&mut app, MouseEventKind::Moved, storage.x, storage.y);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), storage.x, storage.y);
    assert!(app.diagram.selected().is_none());
    assert_eq!(app.diagram.active_detail().map(|n| n.id), Some("storage"));

    // Leaving every node clears the hover.
    mouse(&mut app, MouseEventKind::Moved, 0, 49);
    assert!(app.diagram.active_detail().is_none());
}

#[test]
fn details_panel_shows_selected_node() {
    let mut app = app();
    app.navigate(Page::Architecture);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let selected = app.diagram.selected().unwrap().title;
    let terminal = frame(&mut app, 160, 50);
    assert!(screen_text(&terminal).contains(selected));
}

#[test]
fn stage_click_toggles_expansion() {
    let mut app = app();
    app.navigate(Page::CiCd);
    frame(&mut app, 140, 50);

    click_target(&mut app, HitTarget::Stage(3));
    assert_eq!(app.stages.expanded().map(|s| s.name), Some("Deploy Staging"));

    frame(&mut app, 140, 50);
    click_target(&mut app, HitTarget::Stage(0));
    assert_eq!(app.stages.expanded_index(), Some(0));

    frame(&mut app, 140, 50);
    click_target(&mut app, HitTarget::Stage(0));
    assert!(app.stages.expanded().is_none());
}

#[test]
fn example_tabs_and_copy() {
    let mut app = app();
    app.navigate(Page::Implementation);
    frame(&mut app, 160, 50);

    click_target(&mut app, HitTarget::ExampleTab(ExampleKey::Security));
    assert_eq!(app.examples.active_key(), ExampleKey::Security);

    frame(&mut app, 160, 50);
    click_target(&mut app, HitTarget::CopyButton);
    let copied = app.pending_copy.take().unwrap();
    assert_eq!(copied, app.examples.active_content().code);

    let terminal = frame(&mut app, 160, 50);
    assert!(screen_text(&terminal).contains("Copied!"));

    press(&mut app, KeyCode::Right);
    assert_eq!(app.examples.active_key(), ExampleKey::Monitoring);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.examples.active_key(), ExampleKey::Deployment);
}

#[test]
fn metric_category_selection() {
    let mut app = app();
    app.navigate(Page::Monitoring);
    frame(&mut app, 160, 50);
    click_target(&mut app, HitTarget::MetricTab(MetricCategoryKey::GpuResources));
    assert_eq!(app.metrics.active_key(), MetricCategoryKey::GpuResources);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.metrics.active_key(), MetricCategoryKey::Applications);
}

#[test]
fn monitoring_shows_every_category_at_once() {
    let mut app = app();
    app.navigate(Page::Monitoring);
    for (width, height) in [(160, 50), (80, 50)] {
        let terminal = frame(&mut app, width, height);
        let text = screen_text(&terminal);
        for (_, category) in app.metrics.entries() {
            assert!(
                text.contains(category.category),
                "{} missing at {width}x{height}",
                category.category
            );
        }
    }
}

#[test]
fn copied_feedback_clears_after_window() {
    let mut app = app();
    app.navigate(Page::Implementation);
    let now = Instant::now();
    let copied_at = now.checked_sub(Duration::from_secs(5)).unwrap();
    app.copy_active_example(copied_at);
    app.tick(now);

    let terminal = frame(&mut app, 160, 50);
    assert!(!screen_text(&terminal).contains("Copied"));
}

#[test]
fn escape_then_pointer_rests_on_node_hovers_again() {
    let mut app = app();
    app.navigate(Page::Architecture);
    frame(&mut app, 160, 50);

    let ingress = app.hit_map.area_of(HitTarget::DiagramNode(0)).unwrap();
    mouse(&mut app, MouseEventKind::Moved, ingress.x, ingress.y);
    assert_eq!(app.diagram.hovered().map(|n| n.id), Some("ingress"));

    press(&mut app, KeyCode::Esc);
    assert!(app.diagram.active_detail().is_none());

    mouse(&mut app, MouseEventKind::Moved, ingress.x + 1, ingress.y);
    assert_eq!(app.diagram.hovered().map(|n| n.id), Some("ingress"));
}

#[test]
fn page_down_stops_at_end_of_body() {
    let mut app = app();
    app.navigate(Page::Security);
    frame(&mut app, 160, 50);
    let limit = app.hit_map.scroll_limit().unwrap();

    for _ in 0..100 {
        press(&mut app, KeyCode::PageDown);
    }
    assert_eq!(app.scroll_offset(), limit);

    frame(&mut app, 160, 50);
    assert_eq!(app.hit_map.scroll_limit(), Some(limit));
}

#[test]
fn compact_drawer_flow() {
    let mut app = app();
    frame(&mut app, 80, 40);
    assert!(app.compact);

    click_target(&mut app, HitTarget::MenuButton);
    assert!(app.drawer_active());

    // Backdrop click closes.
    frame(&mut app, 80, 40);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 2, 10);
    assert!(!app.nav.drawer().is_open());

    // Close button closes.
    click_target(&mut app, HitTarget::MenuButton);
    frame(&mut app, 80, 40);
    click_target(&mut app, HitTarget::DrawerClose);
    assert!(!app.nav.drawer().is_open());

    // Following a link navigates and closes.
    click_target(&mut app, HitTarget::MenuButton);
    frame(&mut app, 80, 40);
    click_target(&mut app, HitTarget::DrawerLink(Page::CiCd));
    assert_eq!(app.current_page(), Page::CiCd);
    assert!(!app.nav.drawer().is_open());
}

#[test]
fn drawer_open_flag_survives_resize() {
    let mut app = app();
    frame(&mut app, 80, 40);
    click_target(&mut app, HitTarget::MenuButton);

    frame(&mut app, 160, 40);
    assert!(app.nav.drawer().is_open());
    assert!(!app.drawer_active());
    assert!(app.hit_map.area_of(HitTarget::Backdrop).is_none());

    frame(&mut app, 80, 40);
    assert!(app.drawer_active());
}

#[test]
fn overlays_block_input() {
    let mut config = SiteConfig::default();
    config.ui.welcome = true;
    let mut app = AppState::new(Catalog::builtin(), &config).unwrap();
    frame(&mut app, 140, 40);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 1, 1);
    assert_eq!(app.overlay, Overlay::None);
    assert_eq!(app.current_page(), Page::Home);
}

#[test]
fn mouse_disabled_by_config() {
    let mut config = SiteConfig::default();
    config.ui.welcome = false;
    config.ui.mouse = false;
    let mut app = AppState::new(Catalog::builtin(), &config).unwrap();
    frame(&mut app, 160, 40);
    click_target(&mut app, HitTarget::NavLink(Page::Security));
    assert_eq!(app.current_page(), Page::Home);
}
