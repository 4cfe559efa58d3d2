//! Property tests for widget state invariants.
//!
//! Uses proptest to verify:
//! 1. Selection toggles: selecting any node twice returns to no selection
//! 2. Detail priority: the selected node always wins over the hovered one
//! 3. Hover ordering: a stale unhover never clears a newer hover
//! 4. Stage list: at most one stage expanded, matching a reference model
//! 5. Tabs and navigation: last write wins, navigation always closes the drawer

use std::time::{Duration, Instant};

use cortex_core::catalog::{ExampleKey, MetricCategoryKey};
use cortex_core::state::{
    CopyFeedback, InteractiveDiagram, Navigation, StageList, TabKey, TabbedViewer,
};
use cortex_core::{Catalog, Page};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn node_ids() -> Vec<&'static str> {
    Catalog::builtin().architecture.nodes.iter().map(|n| n.id).collect()
}

/// A known node id or an unknown one.
fn arb_id() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        8 => proptest::sample::select(node_ids()),
        1 => Just("no-such-node"),
    ]
}

#[derive(Debug, Clone)]
enum DiagramEvent {
    Hover(&'static str),
    Unhover(&'static str),
    Select(&'static str),
}

fn arb_diagram_event() -> impl Strategy<Value = DiagramEvent> {
    prop_oneof![
        arb_id().prop_map(DiagramEvent::Hover),
        arb_id().prop_map(DiagramEvent::Unhover),
        arb_id().prop_map(DiagramEvent::Select),
    ]
}

fn arb_page() -> impl Strategy<Value = Page> {
    (0..Page::ALL.len()).prop_map(|i| Page::ALL[i])
}

fn arb_example_key() -> impl Strategy<Value = ExampleKey> {
    proptest::sample::select(ExampleKey::ALL.to_vec())
}

fn diagram() -> InteractiveDiagram {
    InteractiveDiagram::new(Catalog::builtin().architecture.nodes)
}

fn is_known(id: &str) -> bool {
    node_ids().contains(&id)
}

// ── 1-3. Diagram ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn select_twice_is_identity(
        events in prop::collection::vec(arb_diagram_event(), 0..20),
        id in arb_id(),
    ) {
        let mut d = diagram();
        for e in events {
            match e {
                DiagramEvent::Hover(x) => d.hover(x),
                DiagramEvent::Unhover(x) => d.unhover(x),
                DiagramEvent::Select(x) => d.select(x),
            }
        }
        let before = d.selected().map(|n| n.id);
        d.select(id);
        d.select(id);
        prop_assert_eq!(d.selected().map(|n| n.id), before);
    }

    /// Replays events against a two-slot reference model.
    #[test]
    fn matches_reference_model(events in prop::collection::vec(arb_diagram_event(), 0..40)) {
        let mut d = diagram();
        let mut selected: Option<&str> = None;
        let mut hovered: Option<&str> = None;
        for e in events {
            match e {
                DiagramEvent::Hover(x) => {
                    d.hover(x);
                    if is_known(x) {
                        hovered = Some(x);
                    }
                }
                DiagramEvent::Unhover(x) => {
                    d.unhover(x);
                    if hovered == Some(x) {
                        hovered = None;
                    }
                }
                DiagramEvent::Select(x) => {
                    d.select(x);
                    if is_known(x) {
                        selected = if selected == Some(x) { None } else { Some(x) };
                    }
                }
            }
            prop_assert_eq!(d.selected().map(|n| n.id), selected);
            prop_assert_eq!(d.hovered().map(|n| n.id), hovered);
            prop_assert_eq!(d.active_detail().map(|n| n.id), selected.or(hovered));
            if selected.is_some() {
                prop_assert!(d.tooltip().is_none());
            }
        }
    }

    #[test]
    fn stale_unhover_keeps_newer_hover(a in arb_id(), b in arb_id()) {
        prop_assume!(a != b && is_known(b));
        let mut d = diagram();
        d.hover(a);
        d.hover(b);
        d.unhover(a);
        prop_assert_eq!(d.hovered().map(|n| n.id), Some(b));
    }
}

// ── 4. Stage list ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn stage_toggles_match_model(toggles in prop::collection::vec(0usize..10, 0..30)) {
        let mut list = StageList::new(Catalog::builtin().cicd.stages);
        let len = list.len();
        let mut model: Option<usize> = None;
        for i in toggles {
            list.toggle(i);
            if i < len {
                model = if model == Some(i) { None } else { Some(i) };
            }
            prop_assert_eq!(list.expanded_index(), model);
            let expanded = (0..len).filter(|&j| list.is_expanded(j)).count();
            prop_assert!(expanded <= 1);
        }
    }
}

// ── 5. Tabs, navigation, copy ────────────────────────────────────────

proptest! {
    #[test]
    fn active_tab_is_last_set(keys in prop::collection::vec(arb_example_key(), 1..15)) {
        let catalog = Catalog::builtin();
        let entries = catalog
            .implementation
            .examples
            .iter()
            .map(|e| (e.key, e))
            .collect();
        let mut viewer = TabbedViewer::new(entries, ExampleKey::default()).unwrap();
        for &k in &keys {
            viewer.set_active_tab(k);
        }
        let last = *keys.last().unwrap();
        prop_assert_eq!(viewer.active_key(), last);
        prop_assert_eq!(viewer.active_content().key, last);
    }

    #[test]
    fn tab_cycle_returns_home(steps in 0usize..12) {
        let catalog = Catalog::builtin();
        let entries = catalog
            .monitoring
            .categories
            .iter()
            .map(|c| (c.key, c))
            .collect();
        let mut viewer = TabbedViewer::new(entries, MetricCategoryKey::default()).unwrap();
        for _ in 0..steps {
            viewer.next();
        }
        for _ in 0..steps {
            viewer.prev();
        }
        prop_assert_eq!(viewer.active_key(), MetricCategoryKey::Infrastructure);
    }

    #[test]
    fn navigate_always_closes_drawer(
        start in arb_page(),
        target in arb_page(),
        open in any::<bool>(),
    ) {
        let mut nav = Navigation::new(start);
        if open {
            nav.drawer_mut().open();
        }
        nav.navigate(target);
        prop_assert_eq!(nav.current(), target);
        prop_assert!(!nav.drawer().is_open());
    }

    #[test]
    fn copy_indicator_tracks_last_trigger(
        offsets in prop::collection::vec(0u64..5_000, 1..10),
        probe in 0u64..10_000,
    ) {
        let t0 = Instant::now();
        let window = Duration::from_millis(2_000);
        let mut copy = CopyFeedback::new(window);
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        for &ms in &sorted {
            copy.trigger(t0 + Duration::from_millis(ms));
        }
        let last = *sorted.last().unwrap();
        let expected = probe < last + 2_000;
        prop_assert_eq!(copy.is_copied(t0 + Duration::from_millis(probe)), expected);
    }
}
