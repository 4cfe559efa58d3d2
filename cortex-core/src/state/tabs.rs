//! Tabbed content viewer: exactly one active key out of a fixed set.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::catalog::CatalogError;

/// A fixed, enumerated set of tab keys.
pub trait TabKey: Copy + Eq + Hash + Debug + 'static {
    /// Every key, in display order.
    const ALL: &'static [Self];

    /// Stable lowercase identifier.
    fn slug(self) -> &'static str;

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

/// Verify that `keys` names every member of `K::ALL` exactly once.
pub(crate) fn check_coverage<K: TabKey>(keys: impl IntoIterator<Item = K>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateTabContent(key.slug().to_string()));
        }
    }
    match K::ALL.iter().find(|k| !seen.contains(*k)) {
        Some(missing) => Err(CatalogError::MissingTabContent(missing.slug().to_string())),
        None => Ok(()),
    }
}

/// Content records keyed by `K`, with one active at a time.
#[derive(Debug, Clone)]
pub struct TabbedViewer<K: TabKey, C> {
    entries: Vec<(K, C)>,
    active: usize,
}

impl<K: TabKey, C> TabbedViewer<K, C> {
    /// Build a viewer over complete content. Fails if any key lacks content
    /// or appears twice.
    pub fn new(entries: Vec<(K, C)>, initial: K) -> Result<Self, CatalogError> {
        check_coverage(entries.iter().map(|(k, _)| *k))?;
        let active = entries
            .iter()
            .position(|(k, _)| *k == initial)
            .ok_or_else(|| CatalogError::MissingTabContent(initial.slug().to_string()))?;
        Ok(Self { entries, active })
    }

    /// Make `key` the active tab. Switching replaces the previous tab outright.
    pub fn set_active_tab(&mut self, key: K) {
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(i) => {
                if i != self.active {
                    tracing::debug!(tab = key.slug(), "switching tab");
                }
                self.active = i;
            }
            None => tracing::trace!(tab = key.slug(), "ignoring unknown tab"),
        }
    }

    pub fn active_key(&self) -> K {
        self.entries[self.active].0
    }

    pub fn active_content(&self) -> &C {
        &self.entries[self.active].1
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active_key() == key
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn entries(&self) -> impl Iterator<Item = (K, &C)> + '_ {
        self.entries.iter().map(|(k, c)| (*k, c))
    }

    /// Activate the following tab, wrapping around.
    pub fn next(&mut self) {
        let key = self.entries[(self.active + 1) % self.entries.len()].0;
        self.set_active_tab(key);
    }

    /// Activate the preceding tab, wrapping around.
    pub fn prev(&mut self) {
        let len = self.entries.len();
        let key = self.entries[(self.active + len - 1) % len].0;
        self.set_active_tab(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Fruit {
        Apple,
        Pear,
        Plum,
    }

    impl TabKey for Fruit {
        const ALL: &'static [Self] = &[Fruit::Apple, Fruit::Pear, Fruit::Plum];

        fn slug(self) -> &'static str {
            match self {
                Fruit::Apple => "apple",
                Fruit::Pear => "pear",
                Fruit::Plum => "plum",
            }
        }
    }

    fn viewer() -> TabbedViewer<Fruit, &'static str> {
        TabbedViewer::new(
            vec![(Fruit::Apple, "red"), (Fruit::Pear, "green"), (Fruit::Plum, "purple")],
            Fruit::Apple,
        )
        .unwrap()
    }

    #[test]
    fn defaults_to_initial_key() {
        let v = TabbedViewer::new(
            vec![(Fruit::Apple, "red"), (Fruit::Pear, "green"), (Fruit::Plum, "purple")],
            Fruit::Pear,
        )
        .unwrap();
        assert_eq!(v.active_key(), Fruit::Pear);
        assert_eq!(*v.active_content(), "green");
    }

    #[test]
    fn set_active_tab_replaces_content() {
        let mut v = viewer();
        v.set_active_tab(Fruit::Plum);
        assert_eq!(*v.active_content(), "purple");
        v.set_active_tab(Fruit::Plum);
        assert_eq!(*v.active_content(), "purple");
        assert!(v.is_active(Fruit::Plum));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut v = viewer();
        v.prev();
        assert_eq!(v.active_key(), Fruit::Plum);
        v.next();
        assert_eq!(v.active_key(), Fruit::Apple);
        v.next();
        assert_eq!(v.active_key(), Fruit::Pear);
    }

    #[test]
    fn partial_content_rejected() {
        let err = TabbedViewer::new(vec![(Fruit::Apple, "red"), (Fruit::Pear, "green")], Fruit::Apple)
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingTabContent("plum".into()));
    }

    #[test]
    fn duplicate_content_rejected() {
        let err = TabbedViewer::new(
            vec![
                (Fruit::Apple, "red"),
                (Fruit::Apple, "green"),
                (Fruit::Pear, "green"),
                (Fruit::Plum, "purple"),
            ],
            Fruit::Apple,
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTabContent("apple".into()));
    }

    #[test]
    fn from_slug_matches_any_case() {
        assert_eq!(Fruit::from_slug("PEAR"), Some(Fruit::Pear));
        assert_eq!(Fruit::from_slug("kiwi"), None);
    }
}
