//! Screen regions recorded during a frame, for mouse hit testing.

use ratatui::layout::{Position, Rect};

use cortex_core::catalog::{ExampleKey, MetricCategoryKey};
use cortex_core::Page;

/// Something the pointer can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavLink(Page),
    MenuButton,
    DrawerClose,
    /// Drawer surface between links; absorbs clicks.
    DrawerPanel,
    DrawerLink(Page),
    /// Everything outside the open drawer panel.
    Backdrop,
    /// Index into the diagram's node list.
    DiagramNode(usize),
    /// Index into the pipeline stage list.
    Stage(usize),
    ExampleTab(ExampleKey),
    CopyButton,
    MetricTab(MetricCategoryKey),
}

/// Regions in paint order. Later regions sit on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
    scroll_limit: Option<u16>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Topmost target covering the cell at (`column`, `row`).
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let point = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, target)| *target)
    }

    /// First region registered for `target`.
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    /// Largest useful scroll offset for the page body drawn this frame.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = Some(limit);
    }

    pub fn scroll_limit(&self) -> Option<u16> {
        self.scroll_limit
    }

    pub fn clear_scroll_limit(&mut self) {
        self.scroll_limit = None;
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_region_wins() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), HitTarget::Stage(0));
        hits.push(Rect::new(0, 0, 80, 24), HitTarget::Backdrop);
        hits.push(Rect::new(60, 0, 20, 24), HitTarget::DrawerClose);
        assert_eq!(hits.target_at(2, 2), Some(HitTarget::Backdrop));
        assert_eq!(hits.target_at(70, 5), Some(HitTarget::DrawerClose));
        assert_eq!(hits.target_at(90, 5), None);
    }

    #[test]
    fn empty_regions_skipped() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(5, 5, 0, 3), HitTarget::CopyButton);
        assert!(hits.is_empty());
    }

    #[test]
    fn area_lookup() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(1, 2, 3, 1), HitTarget::MenuButton);
        assert_eq!(hits.area_of(HitTarget::MenuButton), Some(Rect::new(1, 2, 3, 1)));
        assert_eq!(hits.area_of(HitTarget::CopyButton), None);
    }
}
