//! Cortex Core — content catalog, routing, and widget state for the Cortex AI
//! Platform presentation.
//!
//! This crate has no rendering code. It provides:
//! - The static content catalog for every page (stats, cards, diagram nodes,
//!   pipeline stages, metrics, code examples)
//! - Page routing (`Page`, href/slug resolution)
//! - Widget state machines: diagram hover/select, tabbed viewer, expandable
//!   stage list, navigation drawer, copy-to-clipboard indicator
//! - TOML configuration shared by the TUI and CLI front ends

pub mod catalog;
pub mod config;
pub mod page;
pub mod state;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
pub use page::Page;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: catalog and widget state can move across threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Catalog>();
        require_sync::<Catalog>();
        require_send::<state::InteractiveDiagram>();
        require_sync::<state::InteractiveDiagram>();
        require_send::<state::StageList>();
        require_sync::<state::StageList>();
        require_send::<state::Navigation>();
        require_sync::<state::Navigation>();
        require_send::<SiteConfig>();
        require_sync::<SiteConfig>();
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().unwrap();
    }
}
