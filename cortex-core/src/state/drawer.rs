//! Compact-layout navigation drawer and current-page tracking.

use crate::page::Page;

/// Open/closed state of the navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Click outside the drawer panel.
    pub fn dismiss_backdrop(&mut self) {
        self.close();
    }
}

/// The page being shown plus the drawer that links to the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    current: Page,
    drawer: NavDrawer,
}

impl Navigation {
    pub fn new(start: Page) -> Self {
        Self {
            current: start,
            drawer: NavDrawer::default(),
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn drawer(&self) -> &NavDrawer {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut NavDrawer {
        &mut self.drawer
    }

    /// Follow a navigation link. Always closes the drawer.
    pub fn navigate(&mut self, page: Page) {
        if page != self.current {
            tracing::debug!(from = self.current.slug(), to = page.slug(), "navigate");
        }
        self.current = page;
        self.drawer.close();
    }

    pub fn next_page(&mut self) {
        self.navigate(self.current.next());
    }

    pub fn prev_page(&mut self) {
        self.navigate(self.current.prev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_transitions() {
        let mut d = NavDrawer::default();
        assert!(!d.is_open());
        d.toggle();
        assert!(d.is_open());
        d.open();
        assert!(d.is_open());
        d.dismiss_backdrop();
        assert!(!d.is_open());
        d.close();
        assert!(!d.is_open());
    }

    #[test]
    fn navigate_closes_drawer() {
        let mut nav = Navigation::new(Page::Home);
        nav.drawer_mut().open();
        nav.navigate(Page::Security);
        assert_eq!(nav.current(), Page::Security);
        assert!(!nav.drawer().is_open());
    }

    #[test]
    fn navigate_to_current_page_still_closes() {
        let mut nav = Navigation::new(Page::Monitoring);
        nav.drawer_mut().open();
        nav.navigate(Page::Monitoring);
        assert!(!nav.drawer().is_open());
    }

    #[test]
    fn page_cycling() {
        let mut nav = Navigation::new(Page::Implementation);
        nav.next_page();
        assert_eq!(nav.current(), Page::Home);
        nav.prev_page();
        assert_eq!(nav.current(), Page::Implementation);
    }
}
