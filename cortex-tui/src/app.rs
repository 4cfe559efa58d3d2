//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here: the content catalog, one state object per
//! interactive widget, and cross-cutting bits like the overlay and status line.

use std::time::Instant;

use cortex_core::catalog::{CodeExample, ExampleKey, MetricCategory, MetricCategoryKey};
use cortex_core::state::{CopyFeedback, InteractiveDiagram, Navigation, StageList, TabbedViewer};
use cortex_core::{Catalog, CatalogError, Page, SiteConfig};

use crate::ui::HitMap;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub catalog: Catalog,

    // Navigation
    pub nav: Navigation,
    pub running: bool,

    // Widget states
    pub diagram: InteractiveDiagram,
    pub stages: StageList,
    pub examples: TabbedViewer<ExampleKey, CodeExample>,
    pub metrics: TabbedViewer<MetricCategoryKey, MetricCategory>,
    pub copy: CopyFeedback,

    // Keyboard cursors
    pub node_cursor: usize,
    pub stage_cursor: usize,
    pub drawer_cursor: usize,
    /// Vertical scroll offset of each page body, indexed by `Page::index`.
    pub scroll: [u16; 6],

    // Layout
    pub compact: bool,
    pub compact_width: u16,
    pub mouse_enabled: bool,
    /// Regions from the last frame, for mouse hit testing.
    pub hit_map: HitMap,
    /// Diagram node currently under the pointer.
    pub pointer_node: Option<&'static str>,

    // Cross-cutting
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    /// Text waiting to be written to the clipboard by the main loop.
    pub pending_copy: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &SiteConfig) -> Result<Self, CatalogError> {
        let examples = TabbedViewer::new(
            catalog
                .implementation
                .examples
                .iter()
                .map(|e| (e.key, e.clone()))
                .collect(),
            config.start.tab,
        )?;
        let metrics = TabbedViewer::new(
            catalog
                .monitoring
                .categories
                .iter()
                .map(|c| (c.key, c.clone()))
                .collect(),
            MetricCategoryKey::default(),
        )?;
        let diagram = InteractiveDiagram::new(catalog.architecture.nodes.clone());
        let stages = StageList::new(catalog.cicd.stages.clone());
        let start = config.start.page;

        Ok(Self {
            catalog,
            nav: Navigation::new(start),
            running: true,
            diagram,
            stages,
            examples,
            metrics,
            copy: CopyFeedback::new(config.copy_feedback()),
            node_cursor: 0,
            stage_cursor: 0,
            drawer_cursor: start.index(),
            scroll: [0; 6],
            compact: false,
            compact_width: config.ui.compact_width,
            mouse_enabled: config.ui.mouse,
            hit_map: HitMap::default(),
            pointer_node: None,
            overlay: if config.ui.welcome {
                Overlay::Welcome
            } else {
                Overlay::None
            },
            status_message: None,
            pending_copy: None,
        })
    }

    pub fn current_page(&self) -> Page {
        self.nav.current()
    }

    /// Switch pages. Widget selection on the page being left is reset.
    pub fn navigate(&mut self, page: Page) {
        let from = self.nav.current();
        if from != page {
            match from {
                Page::Architecture => {
                    self.diagram.clear();
                    self.pointer_node = None;
                }
                Page::CiCd => self.stages.collapse(),
                _ => {}
            }
            self.hit_map.clear_scroll_limit();
        }
        self.nav.navigate(page);
        self.drawer_cursor = page.index();
    }

    pub fn next_page(&mut self) {
        self.navigate(self.nav.current().next());
    }

    pub fn prev_page(&mut self) {
        self.navigate(self.nav.current().prev());
    }

    /// Recompute the layout mode for a terminal `width` columns wide.
    pub fn set_terminal_width(&mut self, width: u16) {
        let compact = width < self.compact_width;
        if compact != self.compact {
            tracing::debug!(width, compact, "layout changed");
        }
        self.compact = compact;
    }

    /// The drawer is only visible, and only takes input, in the compact layout.
    pub fn drawer_active(&self) -> bool {
        self.compact && self.nav.drawer().is_open()
    }

    pub fn open_drawer(&mut self) {
        self.drawer_cursor = self.nav.current().index();
        self.nav.drawer_mut().open();
    }

    pub fn toggle_drawer(&mut self) {
        if self.nav.drawer().is_open() {
            self.nav.drawer_mut().close();
        } else {
            self.open_drawer();
        }
    }

    pub fn move_drawer_cursor(&mut self, delta: isize) {
        self.drawer_cursor = wrap(self.drawer_cursor, delta, Page::ALL.len());
    }

    /// Move the diagram cursor; the node under it gets hover focus.
    pub fn move_node_cursor(&mut self, delta: isize) {
        let len = self.diagram.nodes().len();
        if len == 0 {
            return;
        }
        self.node_cursor = wrap(self.node_cursor, delta, len);
        let id = self.diagram.nodes()[self.node_cursor].id;
        self.diagram.hover(id);
    }

    pub fn select_node_at_cursor(&mut self) {
        if let Some(node) = self.diagram.nodes().get(self.node_cursor) {
            let id = node.id;
            self.diagram.select(id);
        }
    }

    pub fn move_stage_cursor(&mut self, delta: isize) {
        let len = self.stages.len();
        if len > 0 {
            self.stage_cursor = wrap(self.stage_cursor, delta, len);
        }
    }

    pub fn toggle_stage_at_cursor(&mut self) {
        self.stages.toggle(self.stage_cursor);
    }

    /// Queue the active code example for the clipboard and start the
    /// "copied" indicator.
    pub fn copy_active_example(&mut self, now: Instant) {
        let example = self.examples.active_content();
        self.pending_copy = Some(example.code.to_string());
        self.copy.trigger(now);
        tracing::debug!(tab = ?self.examples.active_key(), "copied example");
    }

    /// Periodic housekeeping, called once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if self.copy.tick(now) {
            tracing::trace!("copy indicator expired");
        }
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll[self.nav.current().index()]
    }

    /// Scroll the current page body, bounded by the limit recorded in the
    /// last frame.
    pub fn scroll_by(&mut self, delta: i32) {
        let limit = self.hit_map.scroll_limit().unwrap_or(u16::MAX);
        let slot = &mut self.scroll[self.nav.current().index()];
        let moved = if delta < 0 {
            slot.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            slot.saturating_add(delta as u16)
        };
        *slot = moved.min(limit);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll[self.nav.current().index()] = 0;
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

fn wrap(current: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> AppState {
        let mut config = SiteConfig::default();
        config.ui.welcome = false;
        AppState::new(Catalog::builtin(), &config).unwrap()
    }

    #[test]
    fn starts_on_configured_page_and_tab() {
        let mut config = SiteConfig::default();
        config.start.page = Page::Implementation;
        config.start.tab = ExampleKey::Security;
        let app = AppState::new(Catalog::builtin(), &config).unwrap();
        assert_eq!(app.current_page(), Page::Implementation);
        assert_eq!(app.examples.active_key(), ExampleKey::Security);
        assert_eq!(app.overlay, Overlay::Welcome);
    }

    #[test]
    fn leaving_architecture_clears_diagram() {
        let mut app = app();
        app.navigate(Page::Architecture);
        app.select_node_at_cursor();
        assert!(app.diagram.selected().is_some());
        app.navigate(Page::Security);
        assert!(app.diagram.active_detail().is_none());
    }

    #[test]
    fn leaving_cicd_collapses_stages() {
        let mut app = app();
        app.navigate(Page::CiCd);
        app.toggle_stage_at_cursor();
        assert!(app.stages.expanded().is_some());
        app.next_page();
        assert!(app.stages.expanded().is_none());
    }

    #[test]
    fn node_cursor_wraps_and_hovers() {
        let mut app = app();
        app.move_node_cursor(-1);
        assert_eq!(app.node_cursor, 7);
        assert_eq!(app.diagram.hovered().map(|n| n.id), Some("storage"));
        app.move_node_cursor(1);
        assert_eq!(app.diagram.hovered().map(|n| n.id), Some("ingress"));
    }

    #[test]
    fn drawer_only_active_when_compact() {
        let mut app = app();
        app.open_drawer();
        app.set_terminal_width(120);
        assert!(!app.drawer_active());
        app.set_terminal_width(80);
        assert!(app.drawer_active());
        app.navigate(Page::Monitoring);
        assert!(!app.drawer_active());
    }

    #[test]
    fn copy_sets_pending_text_and_indicator() {
        let mut app = app();
        let t0 = Instant::now();
        app.copy_active_example(t0);
        let text = app.pending_copy.take().unwrap();
        assert!(text.contains("kind: Deployment"));
        assert!(app.copy.is_copied(t0 + Duration::from_millis(500)));
        app.tick(t0 + Duration::from_secs(3));
        assert!(!app.copy.is_copied(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn scroll_is_per_page() {
        let mut app = app();
        app.scroll_by(5);
        app.scroll_by(-10);
        assert_eq!(app.scroll_offset(), 0);
        app.scroll_by(4);
        app.navigate(Page::Security);
        assert_eq!(app.scroll_offset(), 0);
        app.navigate(Page::Home);
        assert_eq!(app.scroll_offset(), 4);
    }

    #[test]
    fn scroll_bounded_by_last_frame() {
        let mut app = app();
        app.hit_map.set_scroll_limit(3);
        app.scroll_by(10);
        assert_eq!(app.scroll_offset(), 3);
        app.scroll_by(-1);
        assert_eq!(app.scroll_offset(), 2);

        app.navigate(Page::Security);
        assert_eq!(app.hit_map.scroll_limit(), None);
        app.scroll_by(10);
        assert_eq!(app.scroll_offset(), 10);
    }

    #[test]
    fn copy_leaves_status_line_alone() {
        let mut app = app();
        app.copy_active_example(Instant::now());
        assert!(app.status_message.is_none());
    }
}
