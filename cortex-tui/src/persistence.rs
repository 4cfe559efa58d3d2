//! UI preference persistence — JSON save/load across restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cortex_core::catalog::{ExampleKey, MetricCategoryKey};
use cortex_core::Page;

use crate::app::{AppState, Overlay};

/// Serializable subset of app state that persists across restarts.
///
/// Unset fields leave the configured start values alone.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub active_page: Option<Page>,
    pub example_tab: Option<ExampleKey>,
    pub metric_category: Option<MetricCategoryKey>,
    pub welcome_dismissed: bool,
}

/// `<config_dir>/cortex/state.json`.
pub fn default_path() -> Option<PathBuf> {
    cortex_core::config::app_config_dir().map(|d| d.join("state.json"))
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        active_page: Some(app.current_page()),
        example_tab: Some(app.examples.active_key()),
        metric_category: Some(app.metrics.active_key()),
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(page) = state.active_page {
        app.navigate(page);
    }
    if let Some(tab) = state.example_tab {
        app.examples.set_active_tab(tab);
    }
    if let Some(category) = state.metric_category {
        app.metrics.set_active_tab(category);
    }
    if state.welcome_dismissed && app.overlay == Overlay::Welcome {
        app.overlay = Overlay::None;
    }
}
